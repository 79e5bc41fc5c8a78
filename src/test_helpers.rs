use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{config::AppConfig, routes::app, state::AppState};

/// Router over the default config and no database.
pub fn test_router() -> Router {
    app(AppState::new(AppConfig::default(), None))
}

pub fn test_router_with(config: AppConfig, db: Option<DatabaseConnection>) -> Router {
    app(AppState::new(config, db))
}

pub fn empty_mock_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}
