//! The unified recursive traversal
//!
//! One routine drives all three strategies: terminal check, candidate
//! ordering, paired mutate/undo around each descent, and strictly-better
//! tie-breaking are shared code. The strategies differ in exactly two
//! places: how a child's value is produced (plain recursion, or a
//! probability-weighted sum over perturbed landing columns) and whether
//! the alpha/beta window stops sibling enumeration.
//!
//! The board is mutated in place and restored on every return path; a
//! `search` call leaves it bit-for-bit identical to how it found it.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::board::{Board, Disc};
use crate::eval::evaluate;
use crate::search::memo::{Bound, MemoTable};
use crate::search::{SearchStats, Strategy};
use crate::trace::{NodeKind, TraceNode};

/// Chance distribution constants for the landing perturbation.
const P_INTENDED: f64 = 0.6;
const P_NEIGHBOR: f64 = 0.2;
const P_LONE_NEIGHBOR: f64 = 0.4;

/// Per-solve traversal state: node accounting, diagnostics, the optional
/// memo table, and the cooperative stop flag. Created fresh by the engine
/// for every top-level solve, so nothing leaks across calls.
pub(crate) struct Traversal<'a> {
    strategy: Strategy,
    max_depth: usize,
    ai_piece: Disc,
    opponent_piece: Disc,
    memo: Option<MemoTable>,
    stop: &'a AtomicBool,
    pub(crate) nodes: u64,
    pub(crate) completed: bool,
    beta_cutoffs: u64,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(
        strategy: Strategy,
        max_depth: usize,
        ai_piece: Disc,
        opponent_piece: Disc,
        use_memo: bool,
        stop: &'a AtomicBool,
    ) -> Self {
        Self {
            strategy,
            max_depth,
            ai_piece,
            opponent_piece,
            memo: use_memo.then(MemoTable::new),
            stop,
            nodes: 0,
            completed: true,
            beta_cutoffs: 0,
        }
    }

    pub(crate) fn stats(&self) -> SearchStats {
        SearchStats {
            beta_cutoffs: self.beta_cutoffs,
            memo_probes: self.memo.as_ref().map_or(0, MemoTable::probes),
            memo_hits: self.memo.as_ref().map_or(0, MemoTable::hits),
        }
    }

    /// Search one node. Returns the best column (if any continuation is
    /// strictly preferable) and the node's value. When tracing, the
    /// completed node is pushed onto `trace`.
    pub(crate) fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
        trace: Option<&mut Vec<TraceNode>>,
    ) -> (Option<usize>, f64) {
        self.nodes += 1;
        let kind = if maximizing { NodeKind::Max } else { NodeKind::Min };

        if self.stop.load(Ordering::Relaxed) {
            self.completed = false;
            let value = evaluate(board, self.ai_piece, self.opponent_piece);
            emit(trace, value, kind, Vec::new());
            return (None, value);
        }

        if depth >= self.max_depth || board.is_full() {
            let value = evaluate(board, self.ai_piece, self.opponent_piece);
            emit(trace, value, kind, Vec::new());
            return (None, value);
        }

        if let Some(memo) = self.memo.as_mut() {
            if let Some((value, best)) = memo.probe(board, depth, maximizing, alpha, beta) {
                emit(trace, value, kind, Vec::new());
                return (best, value);
            }
        }

        let candidates = self.ordered_candidates(board);
        if candidates.is_empty() {
            // Unreachable while the empty-count invariant holds; answer
            // with the static evaluation rather than faulting.
            let value = evaluate(board, self.ai_piece, self.opponent_piece);
            emit(trace, value, kind, Vec::new());
            return (None, value);
        }

        let (alpha_in, beta_in) = (alpha, beta);
        let piece = if maximizing {
            self.ai_piece
        } else {
            self.opponent_piece
        };
        let mut best_col = None;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut children = trace.as_ref().map(|_| Vec::new());

        for col in candidates {
            let value = if self.strategy == Strategy::Expectiminimax {
                self.chance_value(board, col, depth, maximizing, piece, children.as_mut())
            } else {
                board.add_piece(col, piece);
                let (_, value) =
                    self.search(board, depth + 1, !maximizing, alpha, beta, children.as_mut());
                board.remove_piece(col);
                value
            };

            if maximizing {
                if value > best {
                    best = value;
                    best_col = Some(col);
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_col = Some(col);
                }
                beta = beta.min(best);
            }

            if self.strategy == Strategy::AlphaBeta && alpha >= beta {
                self.beta_cutoffs += 1;
                break;
            }
        }

        if self.completed {
            if let Some(memo) = self.memo.as_mut() {
                let bound = if self.strategy == Strategy::AlphaBeta {
                    if best <= alpha_in {
                        Bound::Upper
                    } else if best >= beta_in {
                        Bound::Lower
                    } else {
                        Bound::Exact
                    }
                } else {
                    Bound::Exact
                };
                memo.store(board, depth, maximizing, best, bound, best_col);
            }
        }

        emit(trace, best, kind, children.unwrap_or_default());
        (best_col, best)
    }

    /// Probability-weighted value of choosing `col`: the landing column is
    /// perturbed to a neighbor with fixed probability, and each simulated
    /// outcome recurses one ply like an ordinary move.
    fn chance_value(
        &mut self,
        board: &mut Board,
        col: usize,
        depth: usize,
        maximizing: bool,
        piece: Disc,
        trace: Option<&mut Vec<TraceNode>>,
    ) -> f64 {
        let mut children = trace.as_ref().map(|_| Vec::new());
        let mut expected = 0.0;

        for (outcome, probability) in chance_outcomes(board, col) {
            board.add_piece(outcome, piece);
            let (_, value) = self.search(
                board,
                depth + 1,
                !maximizing,
                f64::NEG_INFINITY,
                f64::INFINITY,
                children.as_mut(),
            );
            board.remove_piece(outcome);
            expected += probability * value;
        }

        emit(trace, expected, NodeKind::Chance, children.unwrap_or_default());
        expected
    }

    /// Non-full columns, stable-sorted descending by a one-ply lookahead:
    /// each candidate is evaluated on a throwaway copy of the board with
    /// the AI piece dropped in. Purely an ordering heuristic: values are
    /// independent of it, pruning efficiency is not.
    fn ordered_candidates(&self, board: &Board) -> Vec<usize> {
        let mut scored: Vec<(usize, f64)> = (0..board.cols())
            .filter(|&col| board.first_empty_row(col).is_some())
            .map(|col| (col, self.lookahead(board, col)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(col, _)| col).collect()
    }

    fn lookahead(&self, board: &Board, col: usize) -> f64 {
        let mut probe = board.clone();
        probe.add_piece(col, self.ai_piece);
        evaluate(&probe, self.ai_piece, self.opponent_piece)
    }
}

fn emit(trace: Option<&mut Vec<TraceNode>>, value: f64, kind: NodeKind, children: Vec<TraceNode>) {
    if let Some(parent) = trace {
        parent.push(TraceNode::new(value, kind, children));
    }
}

/// Simulated landing columns for an intended column, with probabilities.
///
/// The intended column and its immediate neighbors participate when they
/// are in range and non-full; the distribution depends on the surviving
/// outcome count: three outcomes weight {0.2, 0.6, 0.2} around the
/// intended column, two weight the intended column 0.6 and the surviving
/// neighbor 0.4 (whether the other neighbor is off-board or full), and a
/// forced single outcome carries the whole mass.
fn chance_outcomes(board: &Board, intended: usize) -> Vec<(usize, f64)> {
    let mut columns = Vec::with_capacity(3);
    if intended > 0 && board.first_empty_row(intended - 1).is_some() {
        columns.push(intended - 1);
    }
    if board.first_empty_row(intended).is_some() {
        columns.push(intended);
    }
    if intended + 1 < board.cols() && board.first_empty_row(intended + 1).is_some() {
        columns.push(intended + 1);
    }

    match columns.len() {
        3 => vec![
            (columns[0], P_NEIGHBOR),
            (columns[1], P_INTENDED),
            (columns[2], P_NEIGHBOR),
        ],
        2 if columns[0] == intended => vec![
            (columns[0], P_INTENDED),
            (columns[1], P_LONE_NEIGHBOR),
        ],
        2 => vec![
            (columns[0], P_LONE_NEIGHBOR),
            (columns[1], P_INTENDED),
        ],
        1 => vec![(columns[0], 1.0)],
        _ => Vec::new(),
    }
}
