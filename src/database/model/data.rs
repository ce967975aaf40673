use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "dbdata")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id_data: i32,
    pub id_lokasi: i32,
    /// Displacement reading from the sensor, in the unit the sensor reports
    pub pergeseran: i32,
    /// Assigned by the server on every create and update
    pub waktu: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lokasi::Entity",
        from = "Column::IdLokasi",
        to = "super::lokasi::Column::IdLokasi"
    )]
    Lokasi,
}

impl Related<super::lokasi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lokasi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
