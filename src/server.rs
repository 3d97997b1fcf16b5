//! HTTP shell around the pipeline: one GET endpoint that runs a scrape and
//! returns the record list as JSON.

use std::net::SocketAddr;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::{ScrapeConfig, DEFAULT_TARGET_URL};
use crate::pipeline::ExtractionPipeline;

#[derive(Clone)]
struct AppState {
    config: ScrapeConfig,
}

#[derive(Deserialize)]
struct ScrapeParams {
    url: Option<String>,
}

pub async fn serve(addr: SocketAddr, config: ScrapeConfig) -> anyhow::Result<()> {
    let app = router(AppState { config });
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/scrape", get(scrape_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "DBF scraper API is running" }))
}

async fn scrape_handler(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    let url = params.url.unwrap_or_else(|| DEFAULT_TARGET_URL.to_string());
    info!("scrape request for {}", url);

    let pipeline = ExtractionPipeline::new(state.config.clone());
    // Detached task: a client disconnect drops this handler's future, but the
    // scrape must still run to completion so the browser gets torn down.
    let outcome = tokio::spawn(async move { pipeline.scrape(&url).await }).await;

    match outcome {
        Ok(Ok(records)) => Json(records).into_response(),
        Ok(Err(e)) => {
            error!("scrape failed: {}", e);
            error_response(format!("Failed to scrape data: {}", e))
        }
        Err(e) => {
            error!("scrape task panicked: {}", e);
            error_response(format!("Failed to scrape data: {}", e))
        }
    }
}

fn error_response(detail: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "detail": detail })),
    )
        .into_response()
}
