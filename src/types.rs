use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub word_list: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Complete,
}

/// Result of a single "s" press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    CueCleared,
    Advanced,
    Completed,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub cued: bool,
}

/// Everything the terminal layer needs to draw one frame of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub tiles: Vec<Tile>,
    pub score_text: String,
    pub sounding: bool,
    pub status: Status,
}
