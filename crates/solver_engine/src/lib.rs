//! Search engine for the gravity-drop grid game.
//!
//! Two depth-limited algorithms over `connect_core` boards:
//! - minimax with alpha-beta pruning
//! - expectiminimax, which models drift on the engine's own drops with
//!   chance nodes
//!
//! Every search returns the chosen column together with the fully explored
//! search tree for inspection.

mod eval;
mod expectimax;
mod search;
mod trace;

use connect_core::{Board, Side};
use serde::{Deserialize, Serialize};

pub use eval::{
    evaluate, CENTER_WEIGHT, MOBILITY_WEIGHT, OPEN_2_WEIGHT, OPEN_3_WEIGHT, WIN_4_WEIGHT,
};
pub use trace::{NodeKind, TraceNode};

/// Search algorithm selector, as named by the request layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Minimax,
    Expectiminimax,
}

/// Per-request search configuration. Nothing persists across calls.
#[derive(Clone, Copy, Debug)]
pub struct Solver {
    /// Remaining plies to search; callers supply a positive depth.
    pub depth: u32,
    /// Enable alpha-beta cutoffs.
    pub prune: bool,
    /// The side the engine is optimizing for.
    pub ai_side: Side,
}

impl Solver {
    pub fn new(depth: u32, prune: bool, ai_side: Side) -> Self {
        Solver { depth, prune, ai_side }
    }

    /// Dispatch to the configured algorithm.
    pub fn run(&self, board: &Board, algorithm: Algorithm) -> SearchOutcome {
        match algorithm {
            Algorithm::Minimax => self.run_minimax(board),
            Algorithm::Expectiminimax => self.run_expectiminimax(board),
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            depth: 4,
            prune: true,
            ai_side: Side::One,
        }
    }
}

/// Result of one search call.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best root column; `None` only when the root has no legal moves.
    pub best_column: Option<usize>,
    /// Value of the best column (negative infinity on a moveless root).
    pub value: f64,
    /// Child boards constructed and explored, chance outcomes included.
    /// Diagnostics only.
    pub nodes_expanded: u64,
    /// The explored tree, owned wholesale by the caller.
    pub trace: TraceNode,
}
