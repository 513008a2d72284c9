//! Game-over detection.

use super::engine::can_merge;
use super::types::Board;

/// True when no move can change `board`: every cell is filled and no two
/// orthogonally adjacent cells can merge.
pub fn is_terminal(board: &Board) -> bool {
    let n = board.size();
    for r in 0..n {
        for c in 0..n {
            let value = board.get(r, c);
            if value == 0 {
                return false;
            }
            if c + 1 < n && can_merge(value, board.get(r, c + 1)) {
                return false;
            }
            if r + 1 < n && can_merge(value, board.get(r + 1, c)) {
                return false;
            }
        }
    }
    true
}
