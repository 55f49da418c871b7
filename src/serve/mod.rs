//! Thin HTTP query service over the pipeline.
//!
//! Endpoints mirror the two logical read paths plus a health check:
//!
//! - `GET /` — health envelope
//! - `GET /api/exoplanets?limit=N` — enriched planet records
//! - `GET /api/feature-importance` — ranked model importances
//!
//! Every response is an envelope: `{"success": true, "data": [...]}` on
//! success, `{"success": false, "message": ..., "data": []}` on failure. No
//! raw fault crosses this boundary; handler errors become failure envelopes
//! so the server stays alive.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::pipeline;
use crate::cli::ServeArgs;
use crate::domain::{FeatureImportance, PipelineConfig, PlanetRecord};
use crate::error::AppError;

/// Success/failure envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Vec::new(),
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: Arc<PipelineConfig>,
}

#[derive(Debug, Deserialize)]
struct PlanetsQuery {
    limit: Option<usize>,
}

/// Run the HTTP service until the process is stopped.
pub fn run(args: ServeArgs) -> Result<(), AppError> {
    let config = crate::app::pipeline_config_from_args(&args.fetch);
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| AppError::Server(format!("failed to start runtime: {e}")))?;
    runtime.block_on(serve(config, args.port))
}

async fn serve(config: PipelineConfig, port: u16) -> Result<(), AppError> {
    let state = AppState {
        config: Arc::new(config),
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("failed to bind {addr}: {e}")))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/exoplanets", get(list_planets))
        .route("/api/feature-importance", get(feature_importance))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "online", "api": "ready" }))
}

async fn list_planets(
    State(state): State<AppState>,
    Query(query): Query<PlanetsQuery>,
) -> Json<Envelope<PlanetRecord>> {
    let mut config = (*state.config).clone();
    if let Some(limit) = query.limit {
        config.limit = limit;
    }

    // The pipeline is synchronous and blocking; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || pipeline::run_fetch(&config)).await;

    let envelope = match result {
        Ok(Ok(run)) => Envelope::ok(run.records),
        Ok(Err(err)) => Envelope::fail(err.to_string()),
        Err(join_err) => Envelope::fail(format!("server logic error: {join_err}")),
    };
    Json(envelope)
}

async fn feature_importance(State(state): State<AppState>) -> Json<Envelope<FeatureImportance>> {
    let model_path = state.config.model_path.clone();
    let result = tokio::task::spawn_blocking(move || crate::report::rank_importances(&model_path)).await;

    let envelope = match result {
        Ok(Ok(list)) => Envelope::ok(list),
        Ok(Err(err)) => Envelope::fail(err.to_string()),
        Err(join_err) => Envelope::fail(format!("server logic error: {join_err}")),
    };
    Json(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_message() {
        let envelope = Envelope::ok(vec![1u32, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("message").is_none());
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn failure_envelope_carries_message_and_empty_data() {
        let envelope: Envelope<PlanetRecord> = Envelope::fail("catalog unavailable: status 503");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "catalog unavailable: status 503");
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}
