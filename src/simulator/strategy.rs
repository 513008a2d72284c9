//! Move-selection policies for simulated players.

use crate::game::{apply_move, legal_moves, Board, Direction};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a simulated player picks its next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniformly random legal move
    Random,
    /// Legal move with the largest immediate score
    Greedy,
    /// Keep big tiles in the bottom-left corner
    Corner,
}

const CORNER_PREFERENCE: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Random, Strategy::Greedy, Strategy::Corner];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Greedy => "greedy",
            Self::Corner => "corner",
        }
    }

    /// Next move for `board`, or `None` when nothing can move.
    pub fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Direction> {
        match self {
            Self::Random => {
                let legal = legal_moves(board);
                if legal.is_empty() {
                    None
                } else {
                    Some(legal[rng.gen_range(0..legal.len())])
                }
            }
            Self::Greedy => {
                let mut best: Option<(Direction, u64)> = None;
                for dir in Direction::ALL {
                    let result = apply_move(board, dir);
                    if !result.changed {
                        continue;
                    }
                    // Strictly greater keeps the earliest direction on ties
                    if best.map_or(true, |(_, score)| result.score_delta > score) {
                        best = Some((dir, result.score_delta));
                    }
                }
                best.map(|(dir, _)| dir)
            }
            Self::Corner => CORNER_PREFERENCE
                .iter()
                .copied()
                .find(|&dir| apply_move(board, dir).changed),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|st| st.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown strategy: {} (expected random, greedy or corner)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_greedy_prefers_biggest_merge() {
        // Left merges the 2s (4 points); Up merges the 8s (16 points)
        let b = board(&[&[2, 2, 8], &[0, 0, 8], &[0, 0, 0]]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Strategy::Greedy.choose_move(&b, &mut rng), Some(Direction::Up));
    }

    #[test]
    fn test_greedy_tie_uses_direction_order() {
        let b = board(&[&[0, 0], &[0, 2]]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Strategy::Greedy.choose_move(&b, &mut rng), Some(Direction::Up));
    }

    #[test]
    fn test_corner_prefers_down_then_left() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let b = board(&[&[2, 0], &[0, 0]]);
        assert_eq!(Strategy::Corner.choose_move(&b, &mut rng), Some(Direction::Down));

        let b = board(&[&[0, 0], &[0, 2]]);
        assert_eq!(Strategy::Corner.choose_move(&b, &mut rng), Some(Direction::Left));
    }

    #[test]
    fn test_random_only_picks_legal_moves() {
        let b = board(&[&[2, 0], &[0, 0]]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let dir = Strategy::Random.choose_move(&b, &mut rng).unwrap();
            assert!(matches!(dir, Direction::Down | Direction::Right));
        }
    }

    #[test]
    fn test_no_move_on_stuck_board() {
        let b = board(&[&[2, 4], &[4, 2]]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.choose_move(&b, &mut rng), None);
        }
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("Corner".parse::<Strategy>(), Ok(Strategy::Corner));
        assert!("expectimax".parse::<Strategy>().is_err());
    }
}
