//! Game-tree search engine for a gravity-based connection game
//!
//! An adversarial two-player search core for the classic drop-a-disc,
//! four-in-a-row column game. Three interchangeable strategies share one
//! board-mutation/undo protocol and heuristic evaluator:
//! - Exhaustive minimax
//! - Alpha-beta pruned minimax, value-equivalent to the exhaustive search
//! - Expectiminimax, where a chance layer perturbs the landing column
//!
//! # Architecture
//!
//! - [`board`]: grid state, gravity mutation/undo, heuristic scoring
//! - [`eval`]: terminal and heuristic position evaluation
//! - [`search`]: the unified traversal, strategy selection, memoization
//! - [`trace`]: per-solve search-tree records for external renderers
//! - [`engine`]: the [`SearchEngine`] facade tying it together
//!
//! Rendering, input handling, and turn orchestration are deliberately out
//! of scope; the crate exposes a pure solving API plus an optional trace
//! channel for visualization tools.
//!
//! # Quick Start
//!
//! ```
//! use connect4::{Board, Disc, SearchEngine, Strategy};
//!
//! let mut board = Board::new();
//! board.add_piece(3, Disc::Yellow);
//!
//! // Red replies with a 4-ply alpha-beta search.
//! let mut engine = SearchEngine::new(Strategy::AlphaBeta, 4, Disc::Red, Disc::Yellow);
//! let result = engine.solve(&mut board);
//!
//! if let Some(col) = result.best_move {
//!     board.add_piece(col, Disc::Red);
//! }
//! println!("value {:.1}, {} nodes", result.score, result.nodes);
//! ```
//!
//! # Search notes
//!
//! Search is single-threaded, depth-first, and bounded by `max_depth`
//! only; stack use is proportional to the depth limit. The board passed
//! to [`SearchEngine::solve`] is mutated in place during the search and
//! restored before the call returns. Candidate columns are pre-ordered by
//! a one-ply lookahead to sharpen alpha-beta cutoffs; ordering never
//! affects returned values.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod search;
pub mod trace;

// Re-export the commonly used types
pub use board::{Board, Disc, COLS, ROWS};
pub use engine::SearchEngine;
pub use error::EngineError;
pub use eval::evaluate;
pub use search::{SearchResult, SearchStats, Strategy};
pub use trace::{NodeKind, TraceNode};
