//! HTTP routes

use axum::extract::rejection::JsonRejection;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use connect_core::Board;
use solver_engine::Solver;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::schema::{SolveRequest, SolveResponse};

pub fn router(config: &ServerConfig) -> anyhow::Result<Router> {
    let cors = match &config.allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid allowed_origin {origin:?}"))?;
            CorsLayer::new().allow_origin(origin)
        }
        None => CorsLayer::permissive(),
    };

    Ok(Router::new()
        .route("/solve", post(solve))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Validates a move request, runs the configured search, and returns the
/// chosen column with the explored tree. Every failure maps to 400 with an
/// `{"error": ...}` body.
async fn solve(
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    request.validate()?;

    debug!(
        algorithm = ?request.algorithm,
        depth = request.depth,
        prune = request.prune,
        ai_player = request.ai_player,
        "received solve request"
    );

    let board = Board::from_grid(&request.board)?;
    let solver = Solver::new(request.depth, request.prune, request.ai_player.into());
    let outcome = solver.run(&board, request.algorithm);

    info!(
        best_col = ?outcome.best_column,
        nodes = outcome.nodes_expanded,
        "solve finished"
    );

    Ok(Json(SolveResponse {
        algorithm: request.algorithm,
        best_col: outcome.best_column,
        value: outcome.value,
        nodes_expanded: outcome.nodes_expanded,
        tree: outcome.trace.to_json(),
    }))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod routes_tests;
