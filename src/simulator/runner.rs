//! Main simulation runner.
//!
//! Games are driven through `transition`, the same state machine the
//! terminal front end uses, so simulated results match real play.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::game::{transition, GameEvent, GameState, GameStatus};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report. Fails if the board size
/// or target tile in `config` does not validate.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, String> {
    config.game_config().validate()?;
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let run_seed = config.seed.map(|seed| seed.wrapping_add(run_idx as u64));
        let mut rng = match run_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut stats = simulate_single_run(config, &mut rng)?;
        stats.seed = run_seed;

        if config.verbosity >= 2 {
            info!(
                "Run {}/{} - score {}, max tile {}, {} moves{}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.max_tile,
                stats.moves,
                if stats.game_over { "" } else { " (capped)" }
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(config, all_runs))
}

/// Play one game to the end (or to the move cap) with `config.strategy`.
pub fn simulate_single_run<R: Rng + ?Sized>(
    config: &SimConfig,
    rng: &mut R,
) -> Result<RunStats, String> {
    let fresh = GameState::new(&config.game_config())?;
    let mut state = transition(&fresh, GameEvent::Start, rng);

    while state.status == GameStatus::Playing && state.moves < config.max_moves_per_run {
        let Some(direction) = config.strategy.choose_move(&state.board, rng) else {
            break;
        };
        state = transition(&state, GameEvent::Move(direction), rng);
    }

    Ok(RunStats {
        seed: None,
        score: state.score,
        max_tile: state.max_tile(),
        moves: state.moves,
        reached_target: state.reached_target,
        game_over: state.is_terminal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::strategy::Strategy;

    #[test]
    fn test_single_run_ends_in_terminal_state() {
        let config = SimConfig::strategy_test(Strategy::Corner, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let stats = simulate_single_run(&config, &mut rng).unwrap();
        assert!(stats.game_over);
        assert!(stats.moves > 0);
        assert!(stats.score > 0);
    }

    #[test]
    fn test_move_cap_stops_run() {
        let config = SimConfig {
            max_moves_per_run: 10,
            ..SimConfig::strategy_test(Strategy::Random, 1)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let stats = simulate_single_run(&config, &mut rng).unwrap();
        assert_eq!(stats.moves, 10);
        assert!(!stats.game_over);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig::strategy_test(Strategy::Random, 5);
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a.run_stats, b.run_stats);
        assert_eq!(a.run_stats[0].seed, Some(42));
        assert_eq!(a.run_stats[4].seed, Some(46));
    }

    #[test]
    fn test_invalid_board_size_is_an_error() {
        let config = SimConfig {
            board_size: 0,
            ..SimConfig::strategy_test(Strategy::Greedy, 3)
        };
        assert!(run_simulation(&config).is_err());
    }
}
