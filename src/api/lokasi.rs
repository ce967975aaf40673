use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResponse;
use crate::database::model::lokasi;
use crate::database::repo;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LokasiBody {
    pub lokasi: String,
    pub longitude: String,
    pub latitude: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LokasiResponse {
    pub id_lokasi: i32,
    pub lokasi: String,
    pub longitude: String,
    pub latitude: String,
}

impl From<lokasi::Model> for LokasiResponse {
    fn from(model: lokasi::Model) -> Self {
        Self {
            id_lokasi: model.id_lokasi,
            lokasi: model.lokasi,
            longitude: model.longitude,
            latitude: model.latitude,
        }
    }
}

#[utoipa::path(
    get,
    path = "/lokasi",
    tag = "Lokasi",
    responses(
        (status = 200, description = "All monitored locations", body = [LokasiResponse]),
    )
)]
#[get("")]
pub async fn list_lokasi(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let rows = repo::list_lokasi(&state.db).await?;
    let data: Vec<LokasiResponse> = rows.into_iter().map(LokasiResponse::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(data)))
}

#[utoipa::path(
    post,
    path = "/lokasi",
    tag = "Lokasi",
    request_body = LokasiBody,
    responses(
        (status = 200, description = "Created location", body = LokasiResponse),
        (status = 400, description = "Missing or malformed body field"),
    )
)]
#[post("")]
pub async fn create_lokasi(
    state: web::Data<AppState>,
    body: web::Json<LokasiBody>,
) -> Result<HttpResponse, ApiError> {
    let LokasiBody {
        lokasi,
        longitude,
        latitude,
    } = body.into_inner();
    let created = repo::insert_lokasi(&state.db, lokasi, longitude, latitude).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(LokasiResponse::from(created))))
}

#[utoipa::path(
    get,
    path = "/lokasi/{id_lokasi}",
    tag = "Lokasi",
    params(("id_lokasi" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "Location by id", body = LokasiResponse),
        (status = 404, description = "No location with that id"),
    )
)]
#[get("/{id_lokasi}")]
pub async fn get_lokasi(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let row = repo::find_lokasi(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("lokasi"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(LokasiResponse::from(row))))
}

#[utoipa::path(
    put,
    path = "/lokasi/{id_lokasi}",
    tag = "Lokasi",
    params(("id_lokasi" = i32, Path, description = "Location id")),
    request_body = LokasiBody,
    responses(
        (status = 200, description = "Updated location", body = LokasiResponse),
        (status = 404, description = "No location with that id"),
    )
)]
#[put("/{id_lokasi}")]
pub async fn update_lokasi(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<LokasiBody>,
) -> Result<HttpResponse, ApiError> {
    let row = repo::find_lokasi(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("lokasi"))?;

    let LokasiBody {
        lokasi,
        longitude,
        latitude,
    } = body.into_inner();
    let updated = repo::update_lokasi(&state.db, row, lokasi, longitude, latitude).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(LokasiResponse::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/lokasi/{id_lokasi}",
    tag = "Lokasi",
    params(("id_lokasi" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "Deleted location", body = LokasiResponse),
        (status = 404, description = "No location with that id"),
        (status = 409, description = "Location still referenced by readings"),
    )
)]
#[delete("/{id_lokasi}")]
pub async fn delete_lokasi(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let row = repo::find_lokasi(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("lokasi"))?;
    let deleted = repo::delete_lokasi(&state.db, row).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(LokasiResponse::from(deleted))))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lokasi")
            .service(list_lokasi)
            .service(create_lokasi)
            .service(get_lokasi)
            .service(update_lokasi)
            .service(delete_lokasi),
    );
}
