use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::{
    response::{ApiResult, JsonApiResponse},
    schema::{
        FunctionSignature, Relationship, SchemaReport, SchemaSummary, TableDescriptor, TableSchema,
    },
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct TableDetailResponse {
    pub stats: Option<&'static TableDescriptor>,
    pub definition: Option<&'static TableSchema>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/schema/tables", get(list_tables))
        .route("/schema/tables/{name}", get(get_table))
        .route("/schema/stats", get(list_stats))
        .route("/schema/relationships", get(list_relationships))
        .route("/schema/functions", get(list_functions))
        .route("/schema/functions/{name}", get(get_function))
        .route("/schema/check", get(check))
        .route("/schema/summary", get(summary))
        .with_state(state)
}

async fn list_tables(State(state): State<Arc<AppState>>) -> ApiResult<&'static [&'static TableSchema]> {
    JsonApiResponse::ok(state.registry.tables())
}

/// Either half may be missing: some tables are defined without statistics.
async fn get_table(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<TableDetailResponse> {
    let stats = state.registry.find_stats(&name).ok();
    let definition = match state.registry.find_table(&name) {
        Ok(table) => Some(table),
        Err(err) if stats.is_none() => return Err(err.into()),
        Err(_) => None,
    };
    JsonApiResponse::ok(TableDetailResponse { stats, definition })
}

async fn list_stats(State(state): State<Arc<AppState>>) -> ApiResult<&'static [TableDescriptor]> {
    JsonApiResponse::ok(state.registry.stats())
}

async fn list_relationships(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Relationship>> {
    let relationships = state.registry.relationships()?;
    JsonApiResponse::ok(relationships)
}

async fn list_functions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<&'static [FunctionSignature]> {
    JsonApiResponse::ok(state.registry.functions())
}

async fn get_function(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<&'static FunctionSignature> {
    let function = state.registry.find_function(&name)?;
    JsonApiResponse::ok(function)
}

async fn check(State(state): State<Arc<AppState>>) -> ApiResult<SchemaReport> {
    JsonApiResponse::ok(state.registry.check())
}

async fn summary(State(state): State<Arc<AppState>>) -> ApiResult<SchemaSummary> {
    JsonApiResponse::ok(state.registry.summary())
}
