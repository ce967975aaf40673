use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResponse;
use super::lokasi::LokasiResponse;
use crate::database::model::{data, lokasi};
use crate::database::repo;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DataBody {
    pub id_lokasi: i32,
    pub pergeseran: i32,
}

/// Serialized reading with its location expanded inline rather than as a
/// bare foreign key.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DataResponse {
    pub id_data: i32,
    pub id_lokasi: i32,
    pub pergeseran: i32,
    pub waktu: NaiveDateTime,
    pub lokasi: Option<LokasiResponse>,
}

impl DataResponse {
    fn new(model: data::Model, lokasi: Option<lokasi::Model>) -> Self {
        Self {
            id_data: model.id_data,
            id_lokasi: model.id_lokasi,
            pergeseran: model.pergeseran,
            waktu: model.waktu,
            lokasi: lokasi.map(LokasiResponse::from),
        }
    }
}

#[utoipa::path(
    get,
    path = "/data",
    tag = "Data",
    responses(
        (status = 200, description = "All readings with their locations", body = [DataResponse]),
    )
)]
#[get("")]
pub async fn list_data(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let rows = repo::list_data(&state.db).await?;
    let data: Vec<DataResponse> = rows
        .into_iter()
        .map(|(reading, lokasi)| DataResponse::new(reading, lokasi))
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(data)))
}

#[utoipa::path(
    post,
    path = "/data",
    tag = "Data",
    request_body = DataBody,
    responses(
        (status = 200, description = "Created reading", body = DataResponse),
        (status = 400, description = "Missing or malformed body field"),
        (status = 409, description = "id_lokasi does not reference a location"),
    )
)]
#[post("")]
pub async fn create_data(
    state: web::Data<AppState>,
    body: web::Json<DataBody>,
) -> Result<HttpResponse, ApiError> {
    let DataBody {
        id_lokasi,
        pergeseran,
    } = body.into_inner();

    // Timestamp is server-assigned, never taken from the client
    let waktu = Utc::now().naive_utc();
    let created = repo::insert_data(&state.db, id_lokasi, pergeseran, waktu).await?;
    let lokasi = repo::find_lokasi(&state.db, created.id_lokasi).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(DataResponse::new(created, lokasi))))
}

#[utoipa::path(
    get,
    path = "/data/{id_data}",
    tag = "Data",
    params(("id_data" = i32, Path, description = "Reading id")),
    responses(
        (status = 200, description = "Reading by id", body = DataResponse),
        (status = 404, description = "No reading with that id"),
    )
)]
#[get("/{id_data}")]
pub async fn get_data(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let (reading, lokasi) = repo::find_data(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("data"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(DataResponse::new(reading, lokasi))))
}

#[utoipa::path(
    put,
    path = "/data/{id_data}",
    tag = "Data",
    params(("id_data" = i32, Path, description = "Reading id")),
    request_body = DataBody,
    responses(
        (status = 200, description = "Updated reading", body = DataResponse),
        (status = 404, description = "No reading with that id"),
        (status = 409, description = "id_lokasi does not reference a location"),
    )
)]
#[put("/{id_data}")]
pub async fn update_data(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<DataBody>,
) -> Result<HttpResponse, ApiError> {
    let (reading, _) = repo::find_data(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("data"))?;

    let DataBody {
        id_lokasi,
        pergeseran,
    } = body.into_inner();

    // Every update stamps the reading with "now", like a fresh measurement
    let waktu = Utc::now().naive_utc();
    let updated = repo::update_data(&state.db, reading, id_lokasi, pergeseran, waktu).await?;
    let lokasi = repo::find_lokasi(&state.db, updated.id_lokasi).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(DataResponse::new(updated, lokasi))))
}

#[utoipa::path(
    delete,
    path = "/data/{id_data}",
    tag = "Data",
    params(("id_data" = i32, Path, description = "Reading id")),
    responses(
        (status = 200, description = "Plain confirmation body, no envelope"),
        (status = 404, description = "No reading with that id"),
    )
)]
#[delete("/{id_data}")]
pub async fn delete_data(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let (reading, _) = repo::find_data(&state.db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("data"))?;
    repo::delete_data(&state.db, reading).await?;
    // The one endpoint that answers outside the envelope, kept as-is
    Ok(HttpResponse::Ok().body("successfully delete"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/data")
            .service(list_data)
            .service(create_data)
            .service(get_data)
            .service(update_data)
            .service(delete_data),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{App, http::StatusCode, test};
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
    use serde_json::{Value, json};

    fn lokasi_row(id: i32) -> lokasi::Model {
        lokasi::Model {
            id_lokasi: id,
            lokasi: "Slope A".to_string(),
            longitude: "110.5".to_string(),
            latitude: "-7.2".to_string(),
        }
    }

    fn data_row(id: i32, id_lokasi: i32, pergeseran: i32) -> data::Model {
        data::Model {
            id_data: id,
            id_lokasi,
            pergeseran,
            waktu: NaiveDate::from_ymd_opt(2026, 8, 29)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    fn app_state(db: DatabaseConnection) -> web::Data<AppState> {
        web::Data::new(AppState {
            db,
            config: Config::for_tests(),
        })
    }

    macro_rules! test_app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(app_state($db))
                    .app_data(crate::api::json_config())
                    .app_data(crate::api::path_config())
                    .configure(init_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_embeds_the_location_and_stamps_a_time() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![data_row(1, 3, 5)]])
            .append_query_results([vec![lokasi_row(3)]])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/data")
            .set_json(json!({"id_lokasi": 3, "pergeseran": 5}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "success");
        assert_eq!(body["data"]["pergeseran"], 5);
        assert!(body["data"]["waktu"].is_string());
        assert_eq!(body["data"]["lokasi"]["id_lokasi"], 3);
        assert_eq!(body["data"]["lokasi"]["lokasi"], "Slope A");
    }

    #[actix_web::test]
    async fn create_rejects_a_missing_field() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/data")
            .set_json(json!({"pergeseran": 5}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn get_expands_the_related_location() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(data_row(7, 3, 12), lokasi_row(3))]])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::get().uri("/data/7").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id_data"], 7);
        assert_eq!(body["data"]["lokasi"]["longitude"], "110.5");
        assert_eq!(body["data"]["lokasi"]["latitude"], "-7.2");
    }

    #[actix_web::test]
    async fn get_by_unknown_id_is_404() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(data::Model, lokasi::Model)>::new()])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::get().uri("/data/99").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_rewrites_value_and_location() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(data_row(7, 3, 12), lokasi_row(3))]])
            .append_query_results([vec![data_row(7, 4, 20)]])
            .append_query_results([vec![lokasi::Model {
                id_lokasi: 4,
                lokasi: "Slope B".to_string(),
                longitude: "110.9".to_string(),
                latitude: "-7.4".to_string(),
            }]])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::put()
            .uri("/data/7")
            .set_json(json!({"id_lokasi": 4, "pergeseran": 20}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["pergeseran"], 20);
        assert_eq!(body["data"]["lokasi"]["lokasi"], "Slope B");
    }

    #[actix_web::test]
    async fn update_restamps_waktu_even_without_a_value_change() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(data_row(7, 3, 12), lokasi_row(3))]])
            .append_query_results([vec![data_row(7, 3, 12)]])
            .append_query_results([vec![lokasi_row(3)]])
            .into_connection();
        let log_handle = db.clone();
        let app = test_app!(db);

        let req = test::TestRequest::put()
            .uri("/data/7")
            .set_json(json!({"id_lokasi": 3, "pergeseran": 12}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        // The UPDATE must bind a fresh timestamp next to the client fields
        let log = format!("{:?}", log_handle.into_transaction_log());
        let update_start = log.find("UPDATE").expect("an update statement was issued");
        let update_end = log[update_start..]
            .find("WHERE")
            .map_or(log.len(), |i| update_start + i);
        let set_clause = &log[update_start..update_end];
        assert!(set_clause.contains("waktu"));
        assert!(set_clause.contains("pergeseran"));
        assert!(set_clause.contains("id_lokasi"));
    }

    #[actix_web::test]
    async fn delete_answers_with_the_plain_confirmation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(data_row(7, 3, 12), lokasi_row(3))]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::delete().uri("/data/7").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, "successfully delete");
    }
}
