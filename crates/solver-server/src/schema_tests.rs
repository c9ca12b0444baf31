use super::*;
use serde_json::json;

use connect_core::{COLS, ROWS};

fn empty_board() -> [[u8; COLS]; ROWS] {
    [[0; COLS]; ROWS]
}

#[test]
fn test_defaults_are_filled() {
    let request: SolveRequest = serde_json::from_value(json!({
        "board": empty_board(),
        "algorithm": "minimax",
    }))
    .unwrap();

    assert_eq!(request.algorithm, Algorithm::Minimax);
    assert_eq!(request.depth, 4);
    assert!(request.prune);
    assert!(request.ai_player);
    assert!(request.validate().is_ok());
}

#[test]
fn test_explicit_fields_override_defaults() {
    let request: SolveRequest = serde_json::from_value(json!({
        "board": empty_board(),
        "algorithm": "expectiminimax",
        "depth": 2,
        "prune": false,
        "ai_player": false,
    }))
    .unwrap();

    assert_eq!(request.algorithm, Algorithm::Expectiminimax);
    assert_eq!(request.depth, 2);
    assert!(!request.prune);
    assert!(!request.ai_player);
}

#[test]
fn test_unknown_fields_are_rejected() {
    let result: Result<SolveRequest, _> = serde_json::from_value(json!({
        "board": empty_board(),
        "algorithm": "minimax",
        "lookahead": 3,
    }));
    assert!(result.is_err());
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let result: Result<SolveRequest, _> = serde_json::from_value(json!({
        "board": empty_board(),
        "algorithm": "montecarlo",
    }));
    assert!(result.is_err());
}

#[test]
fn test_wrong_row_count_is_rejected() {
    let board = [[0u8; COLS]; ROWS - 1];
    let result: Result<SolveRequest, _> = serde_json::from_value(json!({
        "board": board,
        "algorithm": "minimax",
    }));
    assert!(result.is_err());
}

#[test]
fn test_wrong_column_count_is_rejected() {
    let board = [[0u8; COLS - 1]; ROWS];
    let result: Result<SolveRequest, _> = serde_json::from_value(json!({
        "board": board,
        "algorithm": "minimax",
    }));
    assert!(result.is_err());
}

#[test]
fn test_zero_depth_fails_validation() {
    let request: SolveRequest = serde_json::from_value(json!({
        "board": empty_board(),
        "algorithm": "minimax",
        "depth": 0,
    }))
    .unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_bad_cell_code_fails_validation() {
    let mut board = empty_board();
    board[0][6] = 9;
    let request: SolveRequest = serde_json::from_value(json!({
        "board": board,
        "algorithm": "minimax",
    }))
    .unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_moveless_value_serializes_as_null() {
    let response = SolveResponse {
        algorithm: Algorithm::Minimax,
        best_col: None,
        value: f64::NEG_INFINITY,
        nodes_expanded: 0,
        tree: json!({}),
    };
    let rendered = serde_json::to_value(&response).unwrap();
    assert_eq!(rendered["best_col"], Value::Null);
    assert_eq!(rendered["value"], Value::Null);
    assert_eq!(rendered["algorithm"], "minimax");
}
