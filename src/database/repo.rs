//! Thin persistence layer over the sea-orm entities. Handlers only touch
//! storage through these functions, which keeps them mockable and keeps the
//! query shapes in one place.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder, Set,
};

use super::model::data::{self, Entity as Data};
use super::model::lokasi::{self, Entity as Lokasi};
use super::model::user::{self, Entity as User};

// --- dbuser ---

pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, DbErr> {
    User::find().order_by_asc(user::Column::IdUser).all(db).await
}

pub async fn find_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, DbErr> {
    User::find_by_id(id).one(db).await
}

pub async fn insert_user(
    db: &DatabaseConnection,
    username: String,
    password_hash: String,
) -> Result<user::Model, DbErr> {
    user::ActiveModel {
        username: Set(username),
        password: Set(password_hash),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn update_user(
    db: &DatabaseConnection,
    model: user::Model,
    username: String,
    password_hash: String,
) -> Result<user::Model, DbErr> {
    let mut active: user::ActiveModel = model.into();
    active.username = Set(username);
    active.password = Set(password_hash);
    active.update(db).await
}

pub async fn delete_user(
    db: &DatabaseConnection,
    model: user::Model,
) -> Result<user::Model, DbErr> {
    let deleted = model.clone();
    model.delete(db).await?;
    Ok(deleted)
}

// --- dblokasi ---

pub async fn list_lokasi(db: &DatabaseConnection) -> Result<Vec<lokasi::Model>, DbErr> {
    Lokasi::find()
        .order_by_asc(lokasi::Column::IdLokasi)
        .all(db)
        .await
}

pub async fn find_lokasi(db: &DatabaseConnection, id: i32) -> Result<Option<lokasi::Model>, DbErr> {
    Lokasi::find_by_id(id).one(db).await
}

pub async fn insert_lokasi(
    db: &DatabaseConnection,
    lokasi: String,
    longitude: String,
    latitude: String,
) -> Result<lokasi::Model, DbErr> {
    lokasi::ActiveModel {
        lokasi: Set(lokasi),
        longitude: Set(longitude),
        latitude: Set(latitude),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn update_lokasi(
    db: &DatabaseConnection,
    model: lokasi::Model,
    lokasi: String,
    longitude: String,
    latitude: String,
) -> Result<lokasi::Model, DbErr> {
    let mut active: lokasi::ActiveModel = model.into();
    active.lokasi = Set(lokasi);
    active.longitude = Set(longitude);
    active.latitude = Set(latitude);
    active.update(db).await
}

pub async fn delete_lokasi(
    db: &DatabaseConnection,
    model: lokasi::Model,
) -> Result<lokasi::Model, DbErr> {
    let deleted = model.clone();
    model.delete(db).await?;
    Ok(deleted)
}

// --- dbdata ---

pub async fn list_data(
    db: &DatabaseConnection,
) -> Result<Vec<(data::Model, Option<lokasi::Model>)>, DbErr> {
    Data::find()
        .find_also_related(Lokasi)
        .order_by_asc(data::Column::IdData)
        .all(db)
        .await
}

pub async fn find_data(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(data::Model, Option<lokasi::Model>)>, DbErr> {
    Data::find_by_id(id).find_also_related(Lokasi).one(db).await
}

pub async fn insert_data(
    db: &DatabaseConnection,
    id_lokasi: i32,
    pergeseran: i32,
    waktu: NaiveDateTime,
) -> Result<data::Model, DbErr> {
    data::ActiveModel {
        id_lokasi: Set(id_lokasi),
        pergeseran: Set(pergeseran),
        waktu: Set(waktu),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn update_data(
    db: &DatabaseConnection,
    model: data::Model,
    id_lokasi: i32,
    pergeseran: i32,
    waktu: NaiveDateTime,
) -> Result<data::Model, DbErr> {
    let mut active: data::ActiveModel = model.into();
    active.id_lokasi = Set(id_lokasi);
    active.pergeseran = Set(pergeseran);
    active.waktu = Set(waktu);
    active.update(db).await
}

pub async fn delete_data(db: &DatabaseConnection, model: data::Model) -> Result<(), DbErr> {
    model.delete(db).await?;
    Ok(())
}
