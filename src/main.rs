mod app;
mod error;
mod game;
mod helpers;
mod types;

use crate::{
    app::App,
    game::{Game, LogFeedback},
    helpers::{load_word_list, parse_args},
    types::Control,
};

use anyhow::{Context, Result};
use ratatui::{
    crossterm::{
        cursor,
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const POLLING_RATE_MS: u64 = 16;

fn main() -> Result<()> {
    let config = parse_args();
    init_logging();

    let words = load_word_list(&config.word_list)?;
    info!(count = words.len(), path = %config.word_list.display(), "starting");

    let mut app = App::new(Game::new(words).with_feedback(Box::new(LogFeedback)));

    with_terminal(
        || enable_raw_mode().context("failed to enable raw mode"),
        || setup_and_run(&mut app),
        restore_terminal,
    )?;

    info!(score = app.game().score(), "exiting");

    Ok(())
}

/// Once `enter` succeeds, `leave` runs whether or not `body` fails.
fn with_terminal<T>(
    enter: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> Result<()>,
) -> Result<T> {
    enter()?;
    let result = body();
    leave()?;

    result
}

fn setup_and_run(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    run(&mut terminal, app)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;

    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw_ui(frame))?;

        if event::poll(Duration::from_millis(POLLING_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == Control::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Silent unless `RUST_LOG` is set. Goes to stderr so it can be redirected away from the screen.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
