//! Expectiminimax search
//!
//! Models drift on the engine side's drops: a piece aimed at column `c` may
//! land in `c - 1` or `c + 1`. Each maximizing layer expands one chance node
//! per candidate column; the chance node's value is the probability-weighted
//! sum over its outcome children. Opponent layers stay fully deterministic.
//! Pruning applies only at the deterministic layers, always after a chance
//! node has expanded every outcome.

use connect_core::Board;

use crate::eval::evaluate;
use crate::trace::{NodeKind, TraceNode};
use crate::{SearchOutcome, Solver};

/// Raw weight of the intended column.
const DRIFT_STAY: f64 = 0.6;
/// Raw weight of each neighboring column.
const DRIFT_SIDE: f64 = 0.2;

/// Drift outcomes for a drop aimed at `col`: (landing column, probability).
///
/// Raw weights of the valid outcomes are renormalized by their sum, so both
/// neighbors open gives 0.6/0.2/0.2, a single open neighbor gives 0.75/0.25,
/// and no open neighbor collapses onto the intended column. Callers pass a
/// legal `col`, so the outcome set is never empty.
fn drift_outcomes(board: &Board, col: usize) -> Vec<(usize, f64)> {
    let mut raw: Vec<(usize, f64)> = Vec::with_capacity(3);
    if board.is_column_open(col) {
        raw.push((col, DRIFT_STAY));
    }
    if col > 0 && board.is_column_open(col - 1) {
        raw.push((col - 1, DRIFT_SIDE));
    }
    if board.is_column_open(col + 1) {
        raw.push((col + 1, DRIFT_SIDE));
    }

    let total: f64 = raw.iter().map(|&(_, w)| w).sum();
    debug_assert!(total > 0.0, "drift outcomes for an illegal column");
    raw.into_iter().map(|(c, w)| (c, w / total)).collect()
}

impl Solver {
    /// Searches the board with chance nodes on the engine side's drops.
    ///
    /// Same return contract as `run_minimax`; candidate columns are compared
    /// by the expected value of their chance node.
    pub fn run_expectiminimax(&self, board: &Board) -> SearchOutcome {
        let mut root = TraceNode::new(None, NodeKind::Root, 0);
        let mut nodes: u64 = 0;
        let mut best_val = f64::NEG_INFINITY;
        let mut best_col = None;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for col in board.legal_moves() {
            nodes += 1;
            let mut chance = TraceNode::new(Some(col), NodeKind::Chance, 1);
            let mut expected = 0.0;

            for (outcome_col, prob) in drift_outcomes(board, col) {
                nodes += 1;
                let child_board = board
                    .play(outcome_col, self.ai_side)
                    .expect("drift outcome is an open column");
                let mut child = self.expecti_min(
                    &child_board,
                    self.depth.saturating_sub(1),
                    alpha,
                    beta,
                    Some(outcome_col),
                    2,
                    &mut nodes,
                );
                child.prob = prob;
                expected += prob * child.value;
                chance.add_child(child);
            }

            chance.value = expected;
            root.add_child(chance);

            if expected > best_val {
                best_val = expected;
                best_col = Some(col);
            }
            if self.prune && best_val >= beta {
                break;
            }
            if best_val > alpha {
                alpha = best_val;
            }
            root.value = best_val;
        }

        SearchOutcome {
            best_column: best_col,
            value: best_val,
            nodes_expanded: nodes,
            trace: root,
        }
    }

    /// Opponent layer: deterministic, identical shape to plain minimax.
    #[allow(clippy::too_many_arguments)]
    fn expecti_min(
        &self,
        board: &Board,
        plies: u32,
        alpha: f64,
        mut beta: f64,
        mv: Option<usize>,
        depth: u32,
        nodes: &mut u64,
    ) -> TraceNode {
        if plies == 0 || board.is_terminal() {
            let mut node = TraceNode::new(mv, NodeKind::Leaf, depth);
            node.value = evaluate(board, self.ai_side);
            return node;
        }

        let mut node = TraceNode::new(mv, NodeKind::Min, depth);
        let mut best = f64::INFINITY;

        for (col, child_board) in board.children(self.ai_side.other()) {
            *nodes += 1;
            let child =
                self.expecti_max(&child_board, plies - 1, alpha, beta, Some(col), depth + 1, nodes);
            best = best.min(child.value);
            node.add_child(child);
            node.value = best;

            if self.prune && best <= alpha {
                node.alpha = Some(alpha);
                node.beta = Some(beta);
                return node; // Alpha cutoff
            }
            beta = beta.min(best);
        }

        if self.prune {
            node.alpha = Some(alpha);
            node.beta = Some(beta);
        }
        node
    }

    /// Engine layer: one chance node per candidate column, each fully
    /// expanded before its expected value feeds the pruning decision.
    #[allow(clippy::too_many_arguments)]
    fn expecti_max(
        &self,
        board: &Board,
        plies: u32,
        mut alpha: f64,
        beta: f64,
        mv: Option<usize>,
        depth: u32,
        nodes: &mut u64,
    ) -> TraceNode {
        if plies == 0 || board.is_terminal() {
            let mut node = TraceNode::new(mv, NodeKind::Leaf, depth);
            node.value = evaluate(board, self.ai_side);
            return node;
        }

        let mut node = TraceNode::new(mv, NodeKind::Max, depth);
        let mut best = f64::NEG_INFINITY;

        for col in board.legal_moves() {
            *nodes += 1;
            let mut chance = TraceNode::new(Some(col), NodeKind::Chance, depth + 1);
            let mut expected = 0.0;

            for (outcome_col, prob) in drift_outcomes(board, col) {
                *nodes += 1;
                let child_board = board
                    .play(outcome_col, self.ai_side)
                    .expect("drift outcome is an open column");
                let mut child = self.expecti_min(
                    &child_board,
                    plies - 1,
                    alpha,
                    beta,
                    Some(outcome_col),
                    depth + 2,
                    nodes,
                );
                child.prob = prob;
                expected += prob * child.value;
                chance.add_child(child);
            }

            chance.value = expected;
            node.add_child(chance);
            best = best.max(expected);
            node.value = best;

            if self.prune && best >= beta {
                node.alpha = Some(alpha);
                node.beta = Some(beta);
                return node; // Beta cutoff
            }
            alpha = alpha.max(best);
        }

        if self.prune {
            node.alpha = Some(alpha);
            node.beta = Some(beta);
        }
        node
    }
}

#[cfg(test)]
#[path = "expectimax_tests.rs"]
mod expectimax_tests;
