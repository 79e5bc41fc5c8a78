use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{geo, metrics, schema};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(schema::router(state.clone()))
        .merge(geo::router())
        .merge(metrics::router(state))
}
