//! Position evaluation
//!
//! Terminal and heuristic scoring used at search cutoffs. A full board is
//! settled by a post-hoc tally of completed 4-windows per side; anything
//! else falls back to the heuristic window score, always taken from the
//! AI's perspective regardless of whose turn it is.

pub mod heuristic;

pub use heuristic::{count_connections, CONNECTION_WEIGHT};

use crate::board::{Board, Disc};

/// Evaluate a position for the AI side.
///
/// On a full board, counts completed 4-windows for each side and returns
/// `+inf` / `-inf` / `0.0` for an AI majority / opponent majority / tie.
/// Otherwise returns the heuristic [`Board::score`] for the AI piece.
#[must_use]
pub fn evaluate(board: &Board, ai_piece: Disc, opponent_piece: Disc) -> f64 {
    if board.is_full() {
        let ai_fours = count_connections(board, ai_piece);
        let opp_fours = count_connections(board, opponent_piece);
        if ai_fours > opp_fours {
            f64::INFINITY
        } else if opp_fours > ai_fours {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    } else {
        board.score(ai_piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COLS, ROWS};

    fn full_board(cell: impl Fn(usize, usize) -> Disc) -> Board {
        let grid = (0..ROWS)
            .map(|r| (0..COLS).map(|c| cell(r, c)).collect())
            .collect();
        Board::from_grid(grid).unwrap()
    }

    #[test]
    fn non_full_board_uses_heuristic() {
        let mut board = Board::new();
        board.add_piece(COLS / 2, Disc::Red);
        assert_eq!(evaluate(&board, Disc::Red, Disc::Yellow), 3.0);
        // Always the AI's perspective: the same position seen from Yellow
        // scores Yellow's windows and center discs, of which there are none.
        assert_eq!(evaluate(&board, Disc::Yellow, Disc::Red), 0.0);
    }

    #[test]
    fn full_board_majority_wins() {
        let board = full_board(|_, _| Disc::Red);
        assert_eq!(evaluate(&board, Disc::Red, Disc::Yellow), f64::INFINITY);
        assert_eq!(
            evaluate(&board, Disc::Yellow, Disc::Red),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn full_board_tie_is_zero() {
        // Top three rows Red, bottom three Yellow: 12 horizontal windows
        // each, no vertical or diagonal runs of four.
        let board = full_board(|r, _| if r < 3 { Disc::Red } else { Disc::Yellow });
        assert_eq!(count_connections(&board, Disc::Red), 12);
        assert_eq!(count_connections(&board, Disc::Yellow), 12);
        assert_eq!(evaluate(&board, Disc::Red, Disc::Yellow), 0.0);
    }
}
