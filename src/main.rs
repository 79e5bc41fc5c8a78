use std::net::SocketAddr;

use anyhow::Context;

use mon_projet::{
    config::AppConfig, db::connection, logging::init_tracing, routes::app, schema::SchemaRegistry,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging.rust_log)?;

    report_schema(&SchemaRegistry::builtin());

    let db = match cfg.database.as_ref() {
        Some(database) => Some(
            connection::connect(database)
                .await
                .context("failed to connect to database")?,
        ),
        None => {
            tracing::warn!("no database configured; metric endpoints will answer 503");
            None
        }
    };

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .context("invalid host/port")?;
    let state = AppState::new(cfg, db);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn report_schema(registry: &SchemaRegistry<'_>) {
    let summary = registry.summary();
    tracing::info!(
        tables = summary.described_tables,
        definitions = summary.defined_tables,
        columns = summary.total_columns,
        relationships = summary.relationships,
        functions = summary.declared_functions,
        triggers = summary.triggers,
        "schema registry loaded"
    );
    for issue in registry.check().issues {
        tracing::warn!(%issue, "schema registry issue");
    }
}
