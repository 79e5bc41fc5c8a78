use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext, error::AppError, services::metrics_service::MetricsService,
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    /// Fails with 503 when the site runs without a database.
    pub fn from_state(state: &AppState) -> Result<Self, AppError> {
        state
            .db
            .as_ref()
            .map(Self::new)
            .ok_or_else(|| AppError::service_unavailable("Database is not configured"))
    }

    pub fn metrics(&self) -> MetricsService {
        MetricsService::new(self.daos.video(), self.daos.recipe())
    }
}
