//! Request and response schema
//!
//! Deserialization enforces shape and enum membership (grid dimensions,
//! algorithm names, unknown fields); `validate` adds the numeric range
//! checks on top. The floating-piece invariant stays with the core.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use connect_core::Grid;
use solver_engine::Algorithm;

use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolveRequest {
    /// Cell codes 0/1/2, row 0 at the bottom.
    pub board: Grid,
    pub algorithm: Algorithm,
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default = "default_prune")]
    pub prune: bool,
    #[serde(default = "default_ai_player")]
    pub ai_player: bool,
}

fn default_depth() -> u32 {
    4
}

fn default_prune() -> bool {
    true
}

fn default_ai_player() -> bool {
    true
}

impl SolveRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.depth < 1 {
            return Err(ApiError::BadRequest("depth must be at least 1".to_string()));
        }
        for (r, row) in self.board.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                if code > 2 {
                    return Err(ApiError::BadRequest(format!(
                        "invalid cell code {code} at row {r}, column {c} (expected 0, 1 or 2)"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub algorithm: Algorithm,
    pub best_col: Option<usize>,
    /// Negative infinity (a moveless root) serializes as `null`.
    pub value: f64,
    pub nodes_expanded: u64,
    pub tree: Value,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod schema_tests;
