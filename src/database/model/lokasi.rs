use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "dblokasi")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id_lokasi: i32,
    pub lokasi: String,
    // Coordinates are stored as free-form strings, matching the sensor payloads
    pub longitude: String,
    pub latitude: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::data::Entity")]
    Data,
}

impl Related<super::data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Data.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
