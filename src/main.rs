use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, info, warn};
use simplelog::{Config, WriteLogger};
use tick_snake::config::{Display, GameConfig};
use tick_snake::game::{GameSetup, GameState, TickOutcome};
use tick_snake::input::{GameInput, InputHandler};
use tick_snake::renderer::{self, CellScale, board_layout};
use tick_snake::terminal_runtime::{AppTerminal, TerminalSession, install_panic_hook};
use tick_snake::timer::Ticker;

const LOG_FILE_NAME: &str = "tick-snake.log";

/// Upper bound on how long one input poll may block.
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Board used when running without a terminal.
const HEADLESS_DISPLAY: Display = Display {
    width: 40,
    height: 24,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file overriding the default game settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Where to write the log (defaults to the system temp directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Run this many ticks without a terminal and print the final state as JSON.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.clone())?;

    let config = load_config(&cli)?;
    info!("starting with {config:?}");

    if let Some(ticks) = cli.headless {
        return run_headless(&config, ticks);
    }

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), &config)
}

fn init_logging(path: Option<PathBuf>) -> io::Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(path)?)
        .map_err(io::Error::other)
}

fn load_config(cli: &Cli) -> io::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }

    Ok(config)
}

fn new_game(config: &GameConfig, setup: GameSetup) -> io::Result<GameState> {
    let state = match config.seed {
        Some(seed) => GameState::new_with_seed(setup, seed)?,
        None => GameState::new(setup)?,
    };
    Ok(state)
}

fn run_headless(config: &GameConfig, ticks: u64) -> io::Result<()> {
    let bounds = config.bounds_for(HEADLESS_DISPLAY)?;
    let mut state = new_game(config, config.setup(bounds))?;

    for _ in 0..ticks {
        if state.tick() == TickOutcome::Idle {
            break;
        }
    }

    let json = serde_json::to_string_pretty(&state.snapshot())
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    println!("{json}");

    Ok(())
}

fn run(terminal: &mut AppTerminal, config: &GameConfig) -> io::Result<()> {
    let (bounds, scale) = board_layout(terminal.size()?, config)?;
    let mut state = new_game(config, config.setup(bounds))?;
    let mut ticker = Ticker::new(config.tick_interval());
    ticker.start(Instant::now());

    let result = game_loop(terminal, config, &mut state, &mut ticker, scale);

    ticker.stop();
    info!("exiting with score {}", state.score);
    result
}

fn game_loop(
    terminal: &mut AppTerminal,
    config: &GameConfig,
    state: &mut GameState,
    ticker: &mut Ticker,
    mut scale: CellScale,
) -> io::Result<()> {
    let mut input = InputHandler::new();
    loop {
        let snapshot = state.snapshot();
        terminal.draw(|frame| renderer::render(frame, &snapshot, scale))?;

        let timeout = ticker
            .remaining(Instant::now())
            .map_or(MAX_POLL_INTERVAL, |remaining| remaining.min(MAX_POLL_INTERVAL));

        match input.poll_input(timeout)? {
            Some(GameInput::Quit) => return Ok(()),
            Some(GameInput::Reload) => {
                // The terminal may have been resized since the last game.
                let resized = board_layout(terminal.size()?, config).and_then(|(bounds, new_scale)| {
                    state.reload_with_bounds(bounds).map(|()| new_scale)
                });
                match resized {
                    Ok(new_scale) => scale = new_scale,
                    Err(error) => {
                        warn!("keeping previous board: {error}");
                        state.reload()?;
                    }
                }
                ticker.start(Instant::now());
            }
            Some(input) => state.apply_input(input)?,
            None => {}
        }

        if ticker.poll(Instant::now()) {
            match state.tick() {
                TickOutcome::Died(reason) => {
                    info!("died: {reason:?}");
                    ticker.stop();
                }
                TickOutcome::Won => ticker.stop(),
                _ => {}
            }
        }
    }
}
