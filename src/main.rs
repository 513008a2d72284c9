mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{map_key, GameInput};
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use twenty48::constants::INPUT_POLL_MS;
use twenty48::{GameConfig, GameController};
use ui::render_board_scene;

struct CliOptions {
    config: GameConfig,
    seed: Option<u64>,
}

/// Screen-level state around the game controller.
struct App {
    controller: GameController<ChaCha8Rng>,
    /// First Esc arms this, the second one quits.
    quit_pending: bool,
}

/// Result of handling a key press.
#[derive(Debug, PartialEq, Eq)]
enum InputResult {
    Continue,
    Quit,
}

fn handle_input(app: &mut App, input: GameInput) -> InputResult {
    match input {
        GameInput::Quit => {
            if app.quit_pending {
                return InputResult::Quit;
            }
            app.quit_pending = true;
        }
        _ if app.quit_pending => app.quit_pending = false,
        GameInput::Move(direction) => {
            app.controller.move_in(direction);
        }
        GameInput::Restart => {
            app.controller.reset();
        }
        GameInput::Other => {}
    }
    InputResult::Continue
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            eprintln!("{} requires a number", flag);
            eprintln!("Run 'twenty48 --help' for usage.");
            std::process::exit(1);
        }
    }
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        config: GameConfig::default(),
        seed: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                options.config.board_size = parse_value(&args, i, "--size");
            }
            "--target" => {
                i += 1;
                options.config.target_tile = parse_value(&args, i, "--target");
            }
            "--seed" => {
                i += 1;
                options.seed = Some(parse_value(&args, i, "--seed"));
            }
            "--version" | "-v" => {
                println!("twenty48 {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("twenty48 - slide tiles, merge numbers, reach 2048\n");
                println!("Usage: twenty48 [options]\n");
                println!("Options:");
                println!("  --size N     Board side length, 2-8 (default 4)");
                println!("  --target N   Tile that counts as a win (default 2048)");
                println!("  --seed N     Fixed random seed");
                println!("  --version    Show version information");
                println!("  --help       Show this help message\n");
                println!("Keys: arrows / WASD / hjkl move, R restarts, Esc or Q quits");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'twenty48 --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.size();
            render_board_scene(f, area, app.controller.state(), app.quit_pending);
        })?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if handle_input(app, map_key(key_event)) == InputResult::Quit {
                    return Ok(());
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    let options = parse_args();
    let created = match options.seed {
        Some(seed) => GameController::seeded(&options.config, seed),
        None => GameController::from_entropy(&options.config),
    };
    let mut controller = match created {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    controller.start();
    let mut app = App {
        controller,
        quit_pending: false,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    let state = app.controller.state();
    println!(
        "Final score: {} (best {}, {} moves)",
        state.score, state.best_score, state.moves
    );
    Ok(())
}
