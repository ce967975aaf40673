use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DbData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DbData::IdData)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DbData::IdLokasi).integer().not_null())
                    .col(ColumnDef::new(DbData::Pergeseran).integer().not_null())
                    .col(ColumnDef::new(DbData::Waktu).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dbdata_id_lokasi")
                            .from(DbData::Table, DbData::IdLokasi)
                            .to(DbLokasi::Table, DbLokasi::IdLokasi),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DbData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DbData {
    #[sea_orm(iden = "dbdata")]
    Table,
    IdData,
    IdLokasi,
    Pergeseran,
    Waktu,
}

#[derive(DeriveIden)]
enum DbLokasi {
    #[sea_orm(iden = "dblokasi")]
    Table,
    IdLokasi,
}
