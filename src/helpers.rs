use crate::{
    error::{UsageError, WordWizardError},
    game::Game,
    types::{Config, Tile, View},
};

use ratatui::prelude::*;
use std::{env, fs, path::Path, process};
use tracing::debug;

pub const TILE_WIDTH: u16 = 5;
pub const TILE_HEIGHT: u16 = 3;
pub const TILE_GAP: u16 = 2;

pub fn print_usage_and_exit() -> ! {
    println!(
        "Usage: word-wizard <path_to_word_file>

Shows each word in the file as a row of letter tiles.
  s  clear the sounding cue, then advance to the next word
  ?  show the key bindings
  q  quit"
    );

    process::exit(1);
}

pub fn parse_args() -> Config {
    parse_args_from(env::args().skip(1)).unwrap_or_else(|e| {
        if e != UsageError::Help {
            println!("{}", e);
        }

        print_usage_and_exit()
    })
}

pub fn parse_args_from<I>(args: I) -> Result<Config, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    match args.as_slice() {
        [flag] if matches!(flag.as_str(), "-h" | "--help") => Err(UsageError::Help),
        [path] => Ok(Config {
            word_list: path.into(),
        }),
        other => Err(UsageError::ArgumentCount(other.len())),
    }
}

/// One word per line, trimmed. Blank lines are kept as empty words.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content.lines().map(|s| s.trim().to_string()).collect()
}

pub fn load_word_list(path: &Path) -> Result<Vec<String>, WordWizardError> {
    let content = fs::read_to_string(path).map_err(|source| WordWizardError::ReadWordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

pub fn build_view(game: &Game) -> View {
    let sounding = game.sounding();

    let tiles = game
        .current_word()
        .map(|word| {
            word.chars()
                .enumerate()
                .map(|(i, letter)| Tile {
                    letter,
                    cued: sounding && i == 0,
                })
                .collect()
        })
        .unwrap_or_default();

    View {
        tiles,
        score_text: format!("Score: {}", game.score()),
        sounding,
        status: game.status(),
    }
}

/// Left-to-right tile slots centred in `area`. Tiles past the right edge are dropped.
pub fn tile_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.width < TILE_WIDTH || area.height < TILE_HEIGHT {
        return Vec::new();
    }

    let fits = ((area.width + TILE_GAP) / (TILE_WIDTH + TILE_GAP)) as usize;
    let shown = count.min(fits);
    let row_width = shown as u16 * TILE_WIDTH + (shown as u16 - 1) * TILE_GAP;
    let x0 = area.x + (area.width - row_width) / 2;
    let y = area.y + (area.height - TILE_HEIGHT) / 2;

    (0..shown as u16)
        .map(|i| Rect::new(x0 + i * (TILE_WIDTH + TILE_GAP), y, TILE_WIDTH, TILE_HEIGHT))
        .collect()
}

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
