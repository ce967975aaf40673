use sea_orm_migration::prelude::*;

mod m20260829_000001_create_user;
mod m20260829_000002_create_lokasi;
mod m20260829_000003_create_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_user::Migration),
            Box::new(m20260829_000002_create_lokasi::Migration),
            Box::new(m20260829_000003_create_data::Migration),
        ]
    }
}
