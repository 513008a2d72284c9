//! 2048 game flow: the state machine that ties moves, spawns and game-over
//! detection together.

use super::engine::apply_move;
use super::spawn::{spawn_tile, TileSource};
use super::terminality::is_terminal;
use super::types::*;
use crate::config::GameConfig;
use crate::constants::STARTING_TILES;
use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Compute the state that follows `state` after `event`.
///
/// The input state is never modified. Events that do not apply in the
/// current status (moves before the game starts or after it ends, a second
/// start, moves that change nothing) return an identical copy.
pub fn transition<S: TileSource + ?Sized>(
    state: &GameState,
    event: GameEvent,
    source: &mut S,
) -> GameState {
    match (state.status, event) {
        (GameStatus::NotStarted, GameEvent::Start) => new_game(state, source),
        (_, GameEvent::Reset) => {
            debug!(
                "reset after {} moves, score {} (best {})",
                state.moves, state.score, state.best_score
            );
            new_game(state, source)
        }
        (GameStatus::Playing, GameEvent::Move(direction)) => play_move(state, direction, source),
        (status, event) => {
            trace!("ignoring {:?} while {:?}", event, status);
            state.clone()
        }
    }
}

/// Fresh board with the starting tiles. Score and move count restart, the
/// best score carries over.
fn new_game<S: TileSource + ?Sized>(state: &GameState, source: &mut S) -> GameState {
    let mut board = state.board.cleared();
    for _ in 0..STARTING_TILES {
        board = spawn_tile(&board, source);
    }

    // Only reachable on the smallest boards
    let status = if is_terminal(&board) {
        GameStatus::Terminal
    } else {
        GameStatus::Playing
    };

    GameState {
        status,
        reached_target: board.max_tile() >= state.target_tile,
        board,
        score: 0,
        best_score: state.best_score,
        moves: 0,
        target_tile: state.target_tile,
    }
}

fn play_move<S: TileSource + ?Sized>(
    state: &GameState,
    direction: Direction,
    source: &mut S,
) -> GameState {
    let result = apply_move(&state.board, direction);
    if !result.changed {
        trace!("move {} changed nothing", direction);
        return state.clone();
    }

    let board = spawn_tile(&result.board, source);
    let score = state.score + result.score_delta;
    let status = if is_terminal(&board) {
        GameStatus::Terminal
    } else {
        GameStatus::Playing
    };

    let reached_target = state.reached_target || board.max_tile() >= state.target_tile;
    if reached_target && !state.reached_target {
        debug!("reached {} after {} moves", state.target_tile, state.moves + 1);
    }
    if status == GameStatus::Terminal {
        debug!(
            "no moves left after {} moves, final score {}",
            state.moves + 1,
            score
        );
    }

    GameState {
        status,
        board,
        score,
        best_score: state.best_score.max(score),
        moves: state.moves + 1,
        target_tile: state.target_tile,
        reached_target,
    }
}

/// Owns the latest game state and the random source. The presentation layer
/// reads `state()` and feeds events through the methods below.
#[derive(Debug, Clone)]
pub struct GameController<S: TileSource> {
    state: GameState,
    source: S,
}

impl GameController<ChaCha8Rng> {
    /// Reproducible controller for a fixed seed.
    pub fn seeded(config: &GameConfig, seed: u64) -> Result<Self, String> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: &GameConfig) -> Result<Self, String> {
        Self::new(config, ChaCha8Rng::from_entropy())
    }
}

impl<S: TileSource> GameController<S> {
    /// Controller in the `NotStarted` state. Fails if `config` does not
    /// validate.
    pub fn new(config: &GameConfig, source: S) -> Result<Self, String> {
        Ok(Self {
            state: GameState::new(config)?,
            source,
        })
    }

    /// Read-only snapshot of the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn start(&mut self) -> &GameState {
        self.apply(GameEvent::Start)
    }

    /// Slide the board. Returns true if the move was accepted (the board
    /// changed and a tile was spawned).
    pub fn move_in(&mut self, direction: Direction) -> bool {
        let moves_before = self.state.moves;
        self.apply(GameEvent::Move(direction));
        self.state.moves != moves_before
    }

    /// Like `move_in`, but takes a direction token. Unknown tokens are
    /// ignored and leave the game untouched.
    pub fn move_token(&mut self, token: &str) -> bool {
        match token.parse::<Direction>() {
            Ok(direction) => self.move_in(direction),
            Err(e) => {
                trace!("{}", e);
                false
            }
        }
    }

    pub fn reset(&mut self) -> &GameState {
        self.apply(GameEvent::Reset)
    }

    fn apply(&mut self, event: GameEvent) -> &GameState {
        self.state = transition(&self.state, event, &mut self.source);
        &self.state
    }
}
