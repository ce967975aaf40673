use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DbUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DbUser::IdUser)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DbUser::Username).string_len(12).not_null())
                    // Wide enough for an Argon2 PHC string
                    .col(ColumnDef::new(DbUser::Password).string_len(128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DbUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DbUser {
    #[sea_orm(iden = "dbuser")]
    Table,
    IdUser,
    Username,
    Password,
}
