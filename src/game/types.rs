//! 2048 data structures: board, directions, move results and game state.

use crate::config::GameConfig;
use crate::constants::{MAX_TILE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Square grid of tile values stored row-major. `0` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

/// Wire shape of a `Board` before its invariants are checked.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<u32>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        check_size(raw.size)?;
        if raw.cells.len() != raw.size * raw.size {
            return Err(format!(
                "Board of size {} needs {} cells, got {}",
                raw.size,
                raw.size * raw.size,
                raw.cells.len()
            ));
        }
        for (i, &value) in raw.cells.iter().enumerate() {
            check_tile(value, i / raw.size, i % raw.size)?;
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// All-empty board of the given side length.
    pub fn empty(size: usize) -> Result<Self, String> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// All-empty board with the same side length as this one.
    pub fn cleared(&self) -> Board {
        Board {
            size: self.size,
            cells: vec![0; self.cells.len()],
        }
    }

    /// Build a board from rows, checking that it is square and that every
    /// tile is either empty or a power of two between 2 and `MAX_TILE`.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, String> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                ));
            }
            for (c, &value) in row.iter().enumerate() {
                check_tile(value, r, c)?;
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Row `r` as a slice.
    pub fn row(&self, r: usize) -> &[u32] {
        &self.cells[r * self.size..(r + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Board {
        let n = self.size;
        let mut cells = vec![0; n * n];
        for r in 0..n {
            for c in 0..n {
                cells[c * n + r] = self.cells[r * n + c];
            }
        }
        Board { size: n, cells }
    }

    /// Copy of this board with one cell replaced.
    pub fn with_tile(&self, row: usize, col: usize, value: u32) -> Board {
        let mut next = self.clone();
        next.cells[row * self.size + col] = value;
        next
    }

    /// Assemble a board from rows that are already known to be well formed.
    pub(crate) fn from_trusted_rows(size: usize, rows: Vec<Vec<u32>>) -> Board {
        let cells: Vec<u32> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), size * size);
        Board { size, cells }
    }
}

fn check_size(size: usize) -> Result<(), String> {
    if size < MIN_BOARD_SIZE {
        return Err(format!(
            "Board must be at least {}x{}, got size {}",
            MIN_BOARD_SIZE, MIN_BOARD_SIZE, size
        ));
    }
    Ok(())
}

fn check_tile(value: u32, row: usize, col: usize) -> Result<(), String> {
    let valid = value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two());
    if !valid {
        return Err(format!("Invalid tile {} at ({}, {})", value, row, col));
    }
    Ok(())
}

/// Cardinal direction for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| format!("Unknown direction: {}", token))
    }
}

/// Outcome of sliding a board in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub board: Board,
    pub score_delta: u64,
    /// True iff at least one cell differs from the input board.
    pub changed: bool,
}

/// Lifecycle tag for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    Playing,
    Terminal,
}

/// Events the presentation layer can feed into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Start,
    Move(Direction),
    Reset,
}

/// Complete game snapshot. Replaced, never mutated, by `transition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub board: Board,
    pub score: u64,
    /// Highest score seen this session; survives resets.
    pub best_score: u64,
    /// Accepted moves in the current game.
    pub moves: u32,
    /// Tile value that sets `reached_target`.
    pub target_tile: u32,
    /// Set once a tile at or above `target_tile` appears. Play continues.
    pub reached_target: bool,
}

impl GameState {
    /// A game that has not been started yet, with an empty board.
    /// Fails if `config` does not validate.
    pub fn new(config: &GameConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            status: GameStatus::NotStarted,
            board: Board::empty(config.board_size)?,
            score: 0,
            best_score: 0,
            moves: 0,
            target_tile: config.target_tile,
            reached_target: false,
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.status == GameStatus::Terminal
    }

    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.empty_count(), 16);
        assert_eq!(board.tile_sum(), 0);
        assert_eq!(board.max_tile(), 0);
    }

    #[test]
    fn test_from_rows_accepts_valid_board() {
        let board = Board::from_rows(vec![vec![2, 0], vec![4, 2048]]).unwrap();
        assert_eq!(board.get(0, 0), 2);
        assert_eq!(board.get(1, 1), 2048);
        assert_eq!(board.empty_cells(), vec![(0, 1)]);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = Board::from_rows(vec![vec![2, 0, 0], vec![4, 2, 0]]).unwrap_err();
        assert!(err.contains("Row 0"));
    }

    #[test]
    fn test_from_rows_rejects_bad_tiles() {
        assert!(Board::from_rows(vec![vec![3, 0], vec![0, 0]]).is_err());
        assert!(Board::from_rows(vec![vec![1, 0], vec![0, 0]]).is_err());
        assert!(Board::from_rows(vec![vec![0, 0], vec![0, 6]]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_tiny_board() {
        assert!(Board::from_rows(vec![vec![2]]).is_err());
        assert!(Board::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_empty_rejects_tiny_board() {
        assert!(Board::empty(0).is_err());
        assert!(Board::empty(1).is_err());
        assert_eq!(Board::empty(2).unwrap().empty_count(), 4);
    }

    #[test]
    fn test_tile_ceiling() {
        assert!(Board::from_rows(vec![vec![MAX_TILE, 0], vec![0, 0]]).is_ok());
        assert!(Board::from_rows(vec![vec![1 << 31, 0], vec![0, 0]]).is_err());
    }

    #[test]
    fn test_cleared_keeps_size() {
        let board = Board::from_rows(vec![vec![2, 4, 8], vec![0; 3], vec![16, 0, 0]]).unwrap();
        let cleared = board.cleared();
        assert_eq!(cleared, Board::empty(3).unwrap());
    }

    #[test]
    fn test_transpose() {
        let board = Board::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
        let t = board.transpose();
        assert_eq!(t.to_rows(), vec![vec![2, 8], vec![4, 16]]);
        assert_eq!(t.transpose(), board);
    }

    #[test]
    fn test_with_tile_leaves_original_untouched() {
        let board = Board::empty(3).unwrap();
        let next = board.with_tile(1, 2, 4);
        assert_eq!(board.get(1, 2), 0);
        assert_eq!(next.get(1, 2), 4);
        assert_eq!(next.row(1), &[0, 0, 4]);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert!("diagonal".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_display_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        assert_eq!(state.status, GameStatus::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
        assert_eq!(state.moves, 0);
        assert!(!state.reached_target);
        assert_eq!(state.board.empty_count(), 16);
    }

    #[test]
    fn test_state_serializes_to_json() {
        let state = GameState::new(&GameConfig::with_size(2)).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"], "NotStarted");
        assert_eq!(json["board"]["size"], 2);
        assert_eq!(json["board"]["cells"], serde_json::json!([0, 0, 0, 0]));

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_new_state_rejects_invalid_config() {
        assert!(GameState::new(&GameConfig::with_size(0)).is_err());
        assert!(GameState::new(&GameConfig::with_size(1)).is_err());
        let config = GameConfig {
            target_tile: 3,
            ..Default::default()
        };
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn test_board_json_is_checked() {
        let ok: Board = serde_json::from_str(r#"{"size":2,"cells":[2,0,0,4]}"#).unwrap();
        assert_eq!(ok.to_rows(), vec![vec![2, 0], vec![0, 4]]);

        let bad = [
            // cell count does not match size
            r#"{"size":2,"cells":[3,0,6]}"#,
            r#"{"size":2,"cells":[2,0,0,0,0]}"#,
            // not powers of two
            r#"{"size":2,"cells":[3,0,0,6]}"#,
            r#"{"size":2,"cells":[1,0,0,0]}"#,
            // above the tile ceiling
            r#"{"size":2,"cells":[2147483648,0,0,0]}"#,
            // too small
            r#"{"size":0,"cells":[]}"#,
            r#"{"size":1,"cells":[2]}"#,
        ];
        for json in bad {
            assert!(serde_json::from_str::<Board>(json).is_err(), "{}", json);
        }
    }
}
