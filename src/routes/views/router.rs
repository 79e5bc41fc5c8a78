use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

use super::{contact, layout::resolve_public_dir, pages, schema};

pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = resolve_public_dir(&state.config.general.public_dir);
    Router::new()
        .merge(pages::router(state.clone()))
        .merge(contact::router(state.clone()))
        .merge(schema::router(state))
        .route_service("/{*file}", ServeDir::new(public_dir))
}
