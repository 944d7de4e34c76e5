//! Search strategies and result types
//!
//! Three interchangeable traversals over the same board-mutation protocol:
//! exhaustive minimax, alpha-beta pruned minimax, and expectiminimax with
//! stochastic landing-column perturbation. They share one recursive routine
//! (see [`traversal`]) and differ only in how a child's value combines into
//! its parent and whether the alpha/beta window prunes siblings.

pub(crate) mod memo;
pub(crate) mod traversal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Traversal strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Exhaustive minimax, no pruning
    Minimax,
    /// Minimax with alpha-beta pruning; value-equivalent to `Minimax`
    AlphaBeta,
    /// Minimax with a chance layer perturbing the landing column
    Expectiminimax,
}

impl Strategy {
    /// Canonical name, as accepted by [`Strategy::from_str`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Expectiminimax => "expectiminimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    /// Parse a strategy name, case-insensitively.
    ///
    /// Accepts the conventional names plus the legacy UI spellings
    /// ("minmax", "α-β pruning", "expectminimax"). Anything else is a
    /// configuration error, fatal only to this call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "minmax" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" | "alpha-beta pruning" | "α-β pruning" => {
                Ok(Strategy::AlphaBeta)
            }
            "expectiminimax" | "expectminimax" => Ok(Strategy::Expectiminimax),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Diagnostics collected during one `solve` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sibling enumerations stopped by an alpha >= beta cutoff
    pub beta_cutoffs: u64,
    /// Memo table lookups attempted
    pub memo_probes: u64,
    /// Memo table lookups that short-circuited a subtree
    pub memo_hits: u64,
}

impl SearchStats {
    /// Fraction of memo probes that hit, in percent.
    #[must_use]
    pub fn memo_hit_rate(&self) -> f64 {
        if self.memo_probes == 0 {
            0.0
        } else {
            self.memo_hits as f64 / self.memo_probes as f64 * 100.0
        }
    }
}

/// Result of one `solve` call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Chosen column, if any continuation is preferable at all
    pub best_move: Option<usize>,
    /// Value of the position under the chosen strategy
    pub score: f64,
    /// Nodes visited by this call (every recursion entry counts once)
    pub nodes: u64,
    /// False iff the search was cut short by the abort flag
    pub completed: bool,
    /// Search diagnostics
    pub stats: SearchStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_legacy_names() {
        assert_eq!(Strategy::from_str("minimax").unwrap(), Strategy::Minimax);
        assert_eq!(Strategy::from_str("MinMax").unwrap(), Strategy::Minimax);
        assert_eq!(
            Strategy::from_str("α-β Pruning").unwrap(),
            Strategy::AlphaBeta
        );
        assert_eq!(
            Strategy::from_str("alphabeta").unwrap(),
            Strategy::AlphaBeta
        );
        assert_eq!(
            Strategy::from_str("ExpectMiniMax").unwrap(),
            Strategy::Expectiminimax
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = Strategy::from_str("monte-carlo").unwrap_err();
        assert!(matches!(err, EngineError::UnknownStrategy(ref s) if s == "monte-carlo"));
    }

    #[test]
    fn display_round_trips() {
        for strategy in [
            Strategy::Minimax,
            Strategy::AlphaBeta,
            Strategy::Expectiminimax,
        ] {
            assert_eq!(
                Strategy::from_str(&strategy.to_string()).unwrap(),
                strategy
            );
        }
    }

    #[test]
    fn memo_hit_rate() {
        let stats = SearchStats {
            beta_cutoffs: 0,
            memo_probes: 8,
            memo_hits: 2,
        };
        assert_eq!(stats.memo_hit_rate(), 25.0);
        assert_eq!(SearchStats::default().memo_hit_rate(), 0.0);
    }
}
