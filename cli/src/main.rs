//! # term2048
//!
//! Play 2048 in the terminal. The best score is kept between runs in
//! `$XDG_CONFIG_HOME/term2048/highscore` (or the platform config directory).

mod render;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use env_logger::{Env, Target};
use log::info;
use term2048_core::{
    config, Command, Direction, FileStore, Game, HighScoreStore, Phase, Renderer, Session,
};

use render::Terminal;

/// How long the game-over message shows before a key can dismiss it.
const GAME_OVER_PAUSE: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "term2048")]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Args {
    /// Random seed for deterministic tile spawns
    #[arg(short, long)]
    seed: Option<u64>,

    /// High-score file (default: resolved from the config directory)
    #[arg(long, value_name = "FILE")]
    highscore_file: Option<PathBuf>,

    /// Write logs to this file (the terminal is busy drawing the board)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let path = args
        .highscore_file
        .clone()
        .unwrap_or_else(config::highscore_path);
    info!("high score file: {}", path.display());
    let store = FileStore::new(path);

    let game = match args.seed {
        Some(seed) => Game::new(seed, store),
        None => Game::from_entropy(store),
    };
    let mut session = Session::new(game);

    let mut terminal = Terminal::enter().context("failed to set up the terminal")?;
    let outcome = run(&mut session, &mut terminal);
    // Restore the terminal before anything is reported.
    drop(terminal);
    outcome?;

    info!(
        "quit with score {} (best {})",
        session.game().score(),
        session.game().high_score()
    );
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Blocking input/render loop. Returns once the player quits.
fn run<S, R>(session: &mut Session<S>, renderer: &mut R) -> Result<()>
where
    S: HighScoreStore,
    R: Renderer<Error = io::Error>,
{
    renderer.render(&session.view()).context("failed to draw")?;

    loop {
        let Some(command) = next_command().context("failed to read input")? else {
            // Resize and other non-key events only need a redraw.
            renderer.render(&session.view()).context("failed to draw")?;
            continue;
        };

        let before = session.phase();
        match session.handle(command) {
            Phase::Terminated => return Ok(()),
            Phase::GameOver if before == Phase::Playing => {
                info!("game over at {} points", session.game().score());
                renderer.render(&session.view()).context("failed to draw")?;
                thread::sleep(GAME_OVER_PAUSE);
                discard_pending_input()?;
                renderer
                    .render(&session.view().with_prompt())
                    .context("failed to draw")?;
            }
            _ => renderer.render(&session.view()).context("failed to draw")?,
        }
    }
}

/// Wait for the next key press. `None` for events that are not key presses.
fn next_command() -> io::Result<Option<Command>> {
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(parse_key(key))),
        _ => Ok(None),
    }
}

/// Drop keys typed while the game-over message was showing.
fn discard_pending_input() -> Result<()> {
    while event::poll(Duration::ZERO).context("failed to poll input")? {
        event::read().context("failed to read input")?;
    }
    Ok(())
}

fn parse_key(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        // Arrow keys, vi keys, WASD
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Command::Move(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Command::Move(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Command::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Move(Direction::Right)
        }

        // Control keys
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,

        _ => Command::Other,
    }
}
