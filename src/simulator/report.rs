//! Simulation report generation.

use super::config::SimConfig;
use super::strategy::Strategy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub score: u64,
    pub max_tile: u32,
    pub moves: u32,
    pub reached_target: bool,
    /// False when the run hit the move cap before the board locked up
    pub game_over: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub strategy: Strategy,
    pub board_size: usize,
    pub target_tile: u32,
    pub runs_game_over: u32,
    pub runs_capped: u32,
    pub runs_reached_target: u32,

    // Aggregated stats
    pub avg_score: f64,
    pub best_score: u64,
    pub avg_moves: f64,
    pub avg_max_tile: f64,

    /// Max tile value -> number of runs that ended with it
    pub max_tile_distribution: BTreeMap<u32, u32>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], value: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(value).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_game_over = runs.iter().filter(|r| r.game_over).count() as u32;
        let runs_reached_target = runs.iter().filter(|r| r.reached_target).count() as u32;

        let mut max_tile_distribution = BTreeMap::new();
        for run in &runs {
            *max_tile_distribution.entry(run.max_tile).or_insert(0) += 1;
        }

        Self {
            num_runs,
            strategy: config.strategy,
            board_size: config.board_size,
            target_tile: config.target_tile,
            runs_game_over,
            runs_capped: num_runs - runs_game_over,
            runs_reached_target,
            avg_score: average(&runs, |r| r.score as f64),
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_moves: average(&runs, |r| r.moves as f64),
            avg_max_tile: average(&runs, |r| r.max_tile as f64),
            max_tile_distribution,
            run_stats: runs,
        }
    }

    /// Share of runs that produced the target tile, 0.0 to 1.0.
    pub fn target_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.runs_reached_target as f64 / self.num_runs as f64
    }

    /// One line for `--quiet` output.
    pub fn summary_line(&self) -> String {
        format!(
            "{} runs ({}), avg score {:.0}, best {}, {} reached {:.1}%",
            self.num_runs,
            self.strategy.name(),
            self.avg_score,
            self.best_score,
            self.target_tile,
            self.target_rate() * 100.0
        )
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} game over, {} capped\n",
            self.num_runs, self.runs_game_over, self.runs_capped
        ));
        report.push_str(&format!(
            "Board: {}x{}, strategy: {}\n\n",
            self.board_size,
            self.board_size,
            self.strategy.name()
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!("  Best Score:          {}\n", self.best_score));
        report.push_str(&format!("  Avg Moves:           {:.1}\n", self.avg_moves));
        report.push_str(&format!("  Avg Max Tile:        {:.1}\n", self.avg_max_tile));
        report.push_str(&format!(
            "  Reached {}:{}{:.1}%\n\n",
            self.target_tile,
            " ".repeat(12usize.saturating_sub(self.target_tile.to_string().len())),
            self.target_rate() * 100.0
        ));

        report.push_str("── MAX TILE ─────────────────────────────────────────────────────\n");
        for (tile, count) in self.max_tile_distribution.iter().rev() {
            let pct = if self.num_runs == 0 {
                0.0
            } else {
                (*count as f64 / self.num_runs as f64) * 100.0
            };
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:>6}: {:>5.1}% {}\n", tile, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Serialized by hand to include the derived target rate
impl Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 13)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("strategy", &self.strategy)?;
        state.serialize_field("board_size", &self.board_size)?;
        state.serialize_field("target_tile", &self.target_tile)?;
        state.serialize_field("runs_game_over", &self.runs_game_over)?;
        state.serialize_field("runs_capped", &self.runs_capped)?;
        state.serialize_field("avg_score", &self.avg_score)?;
        state.serialize_field("best_score", &self.best_score)?;
        state.serialize_field("avg_moves", &self.avg_moves)?;
        state.serialize_field("avg_max_tile", &self.avg_max_tile)?;
        state.serialize_field("target_rate", &self.target_rate())?;
        state.serialize_field("max_tile_distribution", &self.max_tile_distribution)?;
        state.serialize_field("run_stats", &self.run_stats)?;
        state.end()
    }
}
