use std::sync::Arc;

use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};

use crate::{
    schema::{SchemaSummary, TableDescriptor, TableSchema},
    state::AppState,
};

use super::layout::{HtmlError, Layout, render};

#[derive(Template)]
#[template(path = "schema.html")]
struct SchemaTemplate {
    layout: Layout,
    summary: SchemaSummary,
    stats: &'static [TableDescriptor],
    tables: &'static [&'static TableSchema],
    relationships: &'static [&'static str],
    issues: Vec<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/schema", get(schema_view))
        .with_state(state)
}

async fn schema_view(State(state): State<Arc<AppState>>) -> Result<Html<String>, HtmlError> {
    let registry = &state.registry;
    let report = registry.check();
    let rendered = render(
        SchemaTemplate {
            layout: Layout::new(&state.config, "schema"),
            summary: registry.summary(),
            stats: registry.stats(),
            tables: registry.tables(),
            relationships: registry.raw_relationships(),
            issues: report.issues.iter().map(ToString::to_string).collect(),
        },
        "schema",
    )?;
    Ok(Html(rendered))
}
