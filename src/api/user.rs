use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResponse;
use crate::database::model::user;
use crate::database::repo;
use crate::error::ApiError;
use crate::security;
use crate::state::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserBody {
    pub username: String,
    pub password: String,
}

/// Serialized user row. `password` carries the stored Argon2 hash, matching
/// the upstream contract.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    pub id_user: i32,
    pub username: String,
    pub password: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id_user: model.id_user,
            username: model.username,
            password: model.password,
        }
    }
}

#[utoipa::path(
    get,
    path = "/user",
    tag = "User",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
    )
)]
#[get("")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = repo::list_users(&state.db).await?;
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(data)))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "User",
    request_body = UserBody,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 400, description = "Missing or malformed body field"),
    )
)]
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<UserBody>,
) -> Result<HttpResponse, ApiError> {
    let UserBody { username, password } = body.into_inner();
    let hash = security::hash_password(&password)?;
    let user = repo::insert_user(&state.db, username, hash).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/user/{id_user}",
    tag = "User",
    params(("id_user" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User by id", body = UserResponse),
        (status = 404, description = "No user with that id"),
    )
)]
#[get("/{id_user}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user = repo::find_user(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))))
}

#[utoipa::path(
    put,
    path = "/user/{id_user}",
    tag = "User",
    params(("id_user" = i32, Path, description = "User id")),
    request_body = UserBody,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "No user with that id"),
    )
)]
#[put("/{id_user}")]
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UserBody>,
) -> Result<HttpResponse, ApiError> {
    let user = repo::find_user(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    // The hash is recomputed on every update, even for an unchanged password
    let UserBody { username, password } = body.into_inner();
    let hash = security::hash_password(&password)?;
    let updated = repo::update_user(&state.db, user, username, hash).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/user/{id_user}",
    tag = "User",
    params(("id_user" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted user", body = UserResponse),
        (status = 404, description = "No user with that id"),
    )
)]
#[delete("/{id_user}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user = repo::find_user(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    let deleted = repo::delete_user(&state.db, user).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(deleted))))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(list_users)
            .service(create_user)
            .service(get_user)
            .service(update_user)
            .service(delete_user),
    );
}
