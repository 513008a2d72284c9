//! Move engine: sliding and merging tiles.
//!
//! Every direction is expressed through `slide_and_merge_line` applied to
//! rows. Right reverses each row first, Up and Down work on the transposed
//! board. Nothing here mutates its input.

use super::types::{Board, Direction, MoveResult};
use crate::constants::MAX_TILE;

/// Whether two neighbouring tiles combine when slid together. Tiles at
/// `MAX_TILE` stay put.
pub(crate) fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Slide one line toward index 0 and merge equal neighbours.
///
/// Merges happen in a single left-to-right pass; a tile produced by a merge
/// never merges again in the same move, and tiles at `MAX_TILE` never merge.
/// Returns the new line (same length as
/// the input) and the points scored, which is the sum of merged tile values.
pub fn slide_and_merge_line(line: &[u32]) -> (Vec<u32>, u64) {
    let compacted: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut merged = Vec::with_capacity(line.len());
    let mut score_delta = 0u64;
    let mut i = 0;
    while i < compacted.len() {
        if i + 1 < compacted.len() && can_merge(compacted[i], compacted[i + 1]) {
            let doubled = compacted[i] * 2;
            merged.push(doubled);
            score_delta += doubled as u64;
            i += 2;
        } else {
            merged.push(compacted[i]);
            i += 1;
        }
    }

    merged.resize(line.len(), 0);
    (merged, score_delta)
}

/// Slide every row toward its end: index 0 when `reversed` is false,
/// the last index otherwise.
fn slide_rows(board: &Board, reversed: bool) -> (Board, u64) {
    let mut score_delta = 0;
    let rows = board
        .rows()
        .map(|row| {
            if reversed {
                let flipped: Vec<u32> = row.iter().rev().copied().collect();
                let (mut line, delta) = slide_and_merge_line(&flipped);
                line.reverse();
                score_delta += delta;
                line
            } else {
                let (line, delta) = slide_and_merge_line(row);
                score_delta += delta;
                line
            }
        })
        .collect();
    (Board::from_trusted_rows(board.size(), rows), score_delta)
}

/// Apply a move to `board`, returning the resulting board and score.
///
/// `changed` is a full cell-wise comparison against the input; a move that
/// changes nothing must not spawn a tile or count as a turn.
pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    let (next, score_delta) = match direction {
        Direction::Left => slide_rows(board, false),
        Direction::Right => slide_rows(board, true),
        Direction::Up => {
            let (moved, delta) = slide_rows(&board.transpose(), false);
            (moved.transpose(), delta)
        }
        Direction::Down => {
            let (moved, delta) = slide_rows(&board.transpose(), true);
            (moved.transpose(), delta)
        }
    };

    let changed = next != *board;
    MoveResult {
        board: next,
        score_delta,
        changed,
    }
}

/// Directions that would change `board`, in `Direction::ALL` order.
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&d| apply_move(board, d).changed)
        .collect()
}
