use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "dbuser")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id_user: i32,
    /// Display name, not unique
    pub username: String,
    /// Argon2 PHC string, never the plaintext
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
