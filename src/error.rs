//! Error types for engine configuration and board loading.

/// Errors produced when configuring the engine or loading external state.
///
/// These are fatal only to the call that produced them: neither the engine
/// nor any board is left in a modified state.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A strategy name that none of the accepted spellings match.
    #[error("unknown strategy '{0}' (expected minimax, alpha-beta, or expectiminimax)")]
    UnknownStrategy(String),

    /// An externally supplied grid with no rows or no columns.
    #[error("cannot load an empty grid")]
    EmptyGrid,

    /// An externally supplied grid whose rows have unequal lengths.
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
