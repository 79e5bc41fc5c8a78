use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::post,
};
use uuid::Uuid;

use crate::{
    response::{ApiResult, JsonApiResponse},
    services::{CounterSnapshot, ServiceContext},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/videos/{id}/views", post(video_views))
        .route("/videos/{id}/likes", post(video_likes))
        .route("/recipes/{id}/views", post(recipe_views))
        .with_state(state)
}

async fn video_views(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<CounterSnapshot> {
    let service = ServiceContext::from_state(state.as_ref())?.metrics();
    let snapshot = service.increment_video_views(&id).await?;
    JsonApiResponse::ok(snapshot)
}

async fn video_likes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<CounterSnapshot> {
    let service = ServiceContext::from_state(state.as_ref())?.metrics();
    let snapshot = service.increment_video_likes(&id).await?;
    JsonApiResponse::ok(snapshot)
}

async fn recipe_views(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<CounterSnapshot> {
    let service = ServiceContext::from_state(state.as_ref())?.metrics();
    let snapshot = service.increment_recipe_views(&id).await?;
    JsonApiResponse::ok(snapshot)
}
