use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DbLokasi::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DbLokasi::IdLokasi)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DbLokasi::Lokasi).string_len(300).not_null())
                    .col(ColumnDef::new(DbLokasi::Longitude).string_len(50).not_null())
                    .col(ColumnDef::new(DbLokasi::Latitude).string_len(50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DbLokasi::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DbLokasi {
    #[sea_orm(iden = "dblokasi")]
    Table,
    IdLokasi,
    Lokasi,
    Longitude,
    Latitude,
}
