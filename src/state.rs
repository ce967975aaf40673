use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Server context shared with handlers through `web::Data` instead of
/// module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
