//! Window-based heuristic scoring
//!
//! Positions are scored by scanning every contiguous 4-cell window along
//! the four line directions. Windows overlap, so a single cell contributes
//! to several windows. A completed window carries a weight larger than any
//! possible sum of the threat terms, which makes it a de-facto terminal
//! signal inside heuristic scores.

use crate::board::{Board, Disc};

/// Length of a scoring window (and of a winning run)
pub const WINDOW: usize = 4;

/// Weight of a completed 4-in-a-row window.
///
/// Larger than any sum the threat terms can reach on a standard board, so
/// one completed window dominates every heuristic consideration.
pub const CONNECTION_WEIGHT: f64 = 1000.0;

/// Three own discs plus one empty cell in a window
const THREE_OPEN: f64 = 5.0;
/// Two own discs plus two empty cells in a window
const TWO_OPEN: f64 = 2.0;
/// Weight per own disc occupying the center column
const CENTER_WEIGHT: f64 = 3.0;

/// Line directions as (row, col) steps. Four directions suffice: each
/// window is enumerated once from its starting cell.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal, down-right
    (1, -1), // diagonal, down-left
];

/// Score a single window by its disc counts.
fn score_window(own: usize, opp: usize, empty: usize) -> f64 {
    let mut score = 0.0;
    if own == WINDOW {
        score += CONNECTION_WEIGHT;
    } else if own == 3 && empty == 1 {
        score += THREE_OPEN;
    } else if own == 2 && empty == 2 {
        score += TWO_OPEN;
    }
    if opp == 3 && empty == 1 {
        score -= THREE_OPEN;
    }
    if opp == WINDOW {
        score -= CONNECTION_WEIGHT;
    }
    score
}

/// Visit every 4-cell window on the board.
///
/// Calls `visit` with the counts of `piece`, opposing, and empty cells in
/// each window.
fn for_each_window<F: FnMut(usize, usize, usize)>(board: &Board, piece: Disc, mut visit: F) {
    let opponent = piece.opponent();
    let (rows, cols) = (board.rows() as isize, board.cols() as isize);

    for row in 0..rows {
        for col in 0..cols {
            for &(dr, dc) in &DIRECTIONS {
                let end_row = row + dr * (WINDOW as isize - 1);
                let end_col = col + dc * (WINDOW as isize - 1);
                if end_row >= rows || end_col < 0 || end_col >= cols {
                    continue;
                }
                let (mut own, mut opp, mut empty) = (0, 0, 0);
                for i in 0..WINDOW as isize {
                    let cell = board.get((row + dr * i) as usize, (col + dc * i) as usize);
                    if cell == piece {
                        own += 1;
                    } else if cell == opponent {
                        opp += 1;
                    } else {
                        empty += 1;
                    }
                }
                visit(own, opp, empty);
            }
        }
    }
}

/// Heuristic score of the whole position for `piece`.
///
/// Sums the window scores over every window, then adds the center-column
/// weighting for each own disc in column `cols / 2`.
pub fn score_position(board: &Board, piece: Disc) -> f64 {
    debug_assert!(piece != Disc::Empty);
    let mut score = 0.0;
    for_each_window(board, piece, |own, opp, empty| {
        score += score_window(own, opp, empty);
    });

    let center = board.cols() / 2;
    for row in 0..board.rows() {
        if board.get(row, center) == piece {
            score += CENTER_WEIGHT;
        }
    }
    score
}

/// Count every completed 4-in-a-row window for `piece`.
///
/// This is a post-hoc tally over the whole board, not first-win detection:
/// overlapping completed windows each count once, so a run of five counts
/// as two.
#[must_use]
pub fn count_connections(board: &Board, piece: Disc) -> usize {
    let mut count = 0;
    for_each_window(board, piece, |own, _, _| {
        if own == WINDOW {
            count += 1;
        }
    });
    count
}
