use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, schema::SchemaRegistry};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` when no database is configured; pages and the schema API still work.
    pub db: Option<DatabaseConnection>,
    pub registry: SchemaRegistry<'static>,
}

impl AppState {
    pub fn new(config: AppConfig, db: Option<DatabaseConnection>) -> Arc<Self> {
        Arc::new(Self {
            config,
            db,
            registry: SchemaRegistry::builtin(),
        })
    }
}
