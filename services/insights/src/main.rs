mod config;
mod pdftext;
mod routes_graph;
mod routes_papers;
mod state;
mod upload;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use extraction::{AgentTaskConfig, AgentTaskExtractor, InsightExtractor};

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    // The task definition (the extraction prompt) lives outside the binary.
    let task_raw = std::fs::read_to_string(&cfg.task_file)
        .with_context(|| format!("Failed to read task file {}", cfg.task_file.display()))?;
    let task: serde_json::Value =
        serde_json::from_str(&task_raw).context("Task file is not valid JSON")?;

    // Explicit session lifecycle: connect here, close on shutdown.
    let extractor: Arc<Mutex<dyn InsightExtractor>> = {
        let mut ex = AgentTaskExtractor::new(
            AgentTaskConfig::new(&cfg.extractor_base_url, &cfg.extractor_api_key)
                .with_model(&cfg.extractor_model)
                .with_task(task),
        );
        ex.connect()
            .await
            .context("Failed to set up extraction session")?;
        Arc::new(Mutex::new(ex))
    };

    tokio::fs::create_dir_all(cfg.upload_dir())
        .await
        .context("Failed to create upload directory")?;

    let app_state = Arc::new(AppState::new(
        cfg.results_file(),
        extractor.clone(),
        cfg.upload_dir(),
    ));

    let app = Router::new()
        .route(
            "/papers",
            get(routes_papers::get_papers).post(routes_papers::upload_papers),
        )
        .route("/discourse-graph", get(routes_graph::get_discourse_graph))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    info!(addr = %cfg.bind_addr, "insights service listening");
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .context("Failed to bind")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Err(e) = extractor.lock().await.close().await {
        warn!("failed to release extraction session: {e}");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
    }
}
