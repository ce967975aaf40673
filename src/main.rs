use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod database;
mod error;
mod migration;
mod security;
mod state;

use api::{data, lokasi, user};
use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        user::list_users,
        user::create_user,
        user::get_user,
        user::update_user,
        user::delete_user,
        lokasi::list_lokasi,
        lokasi::create_lokasi,
        lokasi::get_lokasi,
        lokasi::update_lokasi,
        lokasi::delete_lokasi,
        data::list_data,
        data::create_data,
        data::get_data,
        data::update_data,
        data::delete_data,
    ),
    components(schemas(
        user::UserBody,
        user::UserResponse,
        lokasi::LokasiBody,
        lokasi::LokasiResponse,
        data::DataBody,
        data::DataResponse,
    )),
    tags(
        (name = "User", description = "Accounts for the monitoring dashboard"),
        (name = "Lokasi", description = "Monitored locations"),
        (name = "Data", description = "Displacement readings"),
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();
    let config = Config::from_env();

    // Initialize logger (RUST_LOG overrides the profile default if set)
    env_logger::Builder::from_env(
        Env::default().default_filter_or(config.env.default_log_filter()),
    )
    .init();

    // Establish database connection and run migrations before starting the server
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Run pending migrations (idempotent)
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");

    let port = config.port;
    let state = AppState { db, config };

    info!("Server running at http://0.0.0.0:{port}");
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            .wrap(middleware::NormalizePath::trim())
            .wrap(Cors::permissive())
            // Share the server context with handlers
            .app_data(web::Data::new(state.clone()))
            .app_data(api::json_config())
            .app_data(api::path_config())
            .configure(user::init_routes)
            .configure(lokasi::init_routes)
            .configure(data::init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::route().to(api::not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
