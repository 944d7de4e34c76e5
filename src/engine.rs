//! Search engine facade
//!
//! [`SearchEngine`] owns the search configuration (strategy, depth limit,
//! piece identities, memoization and tracing switches) and runs one
//! traversal per [`SearchEngine::solve`] call against a caller-owned
//! board. The engine is stateless across solves apart from remembering the
//! last call's node count as a diagnostic; counters and the memo table
//! live in a per-call traversal, so a single engine can be reused across
//! games safely.
//!
//! # Example
//!
//! ```
//! use connect4::{Board, Disc, SearchEngine, Strategy};
//!
//! let mut board = Board::new();
//! let mut engine = SearchEngine::new(Strategy::AlphaBeta, 4, Disc::Red, Disc::Yellow);
//!
//! let result = engine.solve(&mut board);
//! if let Some(col) = result.best_move {
//!     board.add_piece(col, Disc::Red);
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::board::{Board, Disc};
use crate::error::EngineError;
use crate::search::traversal::Traversal;
use crate::search::{SearchResult, Strategy};
use crate::trace::TraceNode;

/// Game-tree search engine over one of the three strategies.
#[derive(Debug)]
pub struct SearchEngine {
    strategy: Strategy,
    max_depth: usize,
    ai_piece: Disc,
    opponent_piece: Disc,
    use_memo: bool,
    trace_enabled: bool,
    trace_tx: Option<Sender<TraceNode>>,
    stop: Arc<AtomicBool>,
    last_nodes: u64,
}

impl SearchEngine {
    /// Create an engine with memoization and tracing disabled.
    #[must_use]
    pub fn new(strategy: Strategy, max_depth: usize, ai_piece: Disc, opponent_piece: Disc) -> Self {
        Self::with_config(strategy, max_depth, ai_piece, opponent_piece, false, false)
    }

    /// Create a fully configured engine.
    ///
    /// * `use_memo` - memoize identical states within each solve call
    /// * `trace_enabled` - build and emit a [`TraceNode`] tree per solve
    #[must_use]
    pub fn with_config(
        strategy: Strategy,
        max_depth: usize,
        ai_piece: Disc,
        opponent_piece: Disc,
        use_memo: bool,
        trace_enabled: bool,
    ) -> Self {
        debug_assert!(ai_piece != Disc::Empty && opponent_piece != Disc::Empty);
        debug_assert!(ai_piece != opponent_piece);
        Self {
            strategy,
            max_depth,
            ai_piece,
            opponent_piece,
            use_memo,
            trace_enabled,
            trace_tx: None,
            stop: Arc::new(AtomicBool::new(false)),
            last_nodes: 0,
        }
    }

    /// Create an engine from a strategy name (see [`Strategy::from_str`]).
    ///
    /// An unrecognized name fails this call only; nothing is constructed.
    ///
    /// [`Strategy::from_str`]: std::str::FromStr::from_str
    pub fn from_name(
        strategy: &str,
        max_depth: usize,
        ai_piece: Disc,
        opponent_piece: Disc,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(
            strategy.parse()?,
            max_depth,
            ai_piece,
            opponent_piece,
        ))
    }

    /// Find the best column for the AI side of the given position.
    ///
    /// The board is mutated during the search and restored before this
    /// returns; it is left bit-for-bit identical to how it arrived. When
    /// every continuation is a proven loss no column is strictly
    /// preferable and `best_move` is `None`, as it also is when the
    /// position is already terminal (`depth` limit zero or full board).
    pub fn solve(&mut self, board: &mut Board) -> SearchResult {
        // Re-arm the cooperative stop flag for this call.
        self.stop.store(false, Ordering::Relaxed);

        #[cfg(debug_assertions)]
        let snapshot = board.clone();

        let mut traversal = Traversal::new(
            self.strategy,
            self.max_depth,
            self.ai_piece,
            self.opponent_piece,
            self.use_memo,
            &self.stop,
        );
        let mut sink = (self.trace_enabled && self.trace_tx.is_some()).then(Vec::new);
        let (best_move, score) = traversal.search(
            board,
            0,
            true,
            f64::NEG_INFINITY,
            f64::INFINITY,
            sink.as_mut(),
        );

        #[cfg(debug_assertions)]
        assert_eq!(*board, snapshot, "solve must leave the board as it found it");

        if let (Some(tx), Some(mut roots)) = (self.trace_tx.as_ref(), sink) {
            if let Some(root) = roots.pop() {
                // Best-effort: a dropped receiver never fails the search.
                let _ = tx.send(root);
            }
        }

        let result = SearchResult {
            best_move,
            score,
            nodes: traversal.nodes,
            completed: traversal.completed,
            stats: traversal.stats(),
        };
        self.last_nodes = result.nodes;
        result
    }

    /// Subscribe to per-solve trace trees.
    ///
    /// Returns the receiving end of an unbounded channel; each subsequent
    /// `solve` sends one tree, provided the engine was configured with
    /// `trace_enabled`. Subscribing again replaces the previous channel.
    /// Emission is asynchronous with respect to the consumer: the search
    /// never waits for the channel to drain.
    pub fn subscribe(&mut self) -> Receiver<TraceNode> {
        let (tx, rx) = channel();
        self.trace_tx = Some(tx);
        rx
    }

    /// Handle for cancelling an in-flight solve from another thread.
    ///
    /// Setting the flag makes the search wind down at the next node it
    /// enters and return with `completed: false`; a solve that finishes
    /// before the flag is seen is unaffected. The flag is re-armed at the
    /// start of every solve.
    #[must_use]
    pub fn abort_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Nodes visited by the most recent solve call.
    #[must_use]
    pub fn last_nodes(&self) -> u64 {
        self.last_nodes
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
