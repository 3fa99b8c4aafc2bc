use crate::{
    game::Game,
    helpers::{build_view, centered_rect, tile_rects},
    types::{Control, Status, Step, View},
};

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    prelude::*,
    widgets::*,
};
use tracing::debug;

const TITLE: &str = "Word Wizard";

const KEY_BINDINGS: [(&str, &str); 4] = [
    ("s", "clear the cue, then next word"),
    ("?", "show or hide this help"),
    ("Esc", "close this help"),
    ("q", "quit"),
];

pub struct App {
    game: Game,
    help_open: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            help_open: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press
            || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char('?') => self.help_open = !self.help_open,
            KeyCode::Esc if self.help_open => self.help_open = false,
            KeyCode::Char('s') if !self.help_open => {
                let step = self.game.press_advance();
                if step != Step::Ignored {
                    debug!(?step, index = self.game.index(), "advance key");
                }
            }
            _ => {}
        }

        Control::Continue
    }

    pub fn draw_ui(&self, f: &mut Frame) {
        let area = f.area();
        let view = build_view(&self.game);

        let frame_block = Block::default()
            .title(TITLE)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::White).fg(Color::Black));
        let inner = frame_block.inner(area);
        f.render_widget(frame_block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(sidebar_width(self.game.words(), inner.width)),
                Constraint::Min(0),
            ])
            .split(inner);

        self.draw_sidebar(f, columns[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Score
                Constraint::Min(0),    // Tiles
                Constraint::Length(1), // Key hint
            ])
            .split(columns[1]);

        let score = Paragraph::new(view.score_text.as_str()).alignment(Alignment::Right);
        f.render_widget(score, rows[0]);

        draw_tiles(f, rows[1], &view);

        let hint = Paragraph::new("s: next   ?: help   q: quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, rows[2]);

        if view.status == Status::Complete {
            draw_dialog(
                f,
                area,
                "Congratulations!",
                vec![Line::from("Congratulations! Press Q to quit.")],
            );
        }

        if self.help_open {
            let lines = KEY_BINDINGS
                .iter()
                .map(|(key, action)| {
                    Line::from(vec![
                        Span::styled(format!("{:>4}  ", key), Style::default().bold()),
                        Span::raw(*action),
                    ])
                })
                .collect();
            draw_dialog(f, area, "Keys", lines);
        }
    }

    fn draw_sidebar(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .game
            .words()
            .iter()
            .map(|w| ListItem::new(w.as_str()))
            .collect();

        let list = List::new(items).block(Block::default().title("Words").borders(Borders::RIGHT));
        f.render_widget(list, area);
    }
}

/// Longest word plus padding, never more than a third of `available`.
fn sidebar_width(words: &[String], available: u16) -> u16 {
    let longest = words
        .iter()
        .map(|w| Line::from(w.as_str()).width())
        .max()
        .unwrap_or(0)
        .max(8);

    (longest + 4).min((available / 3) as usize) as u16
}

fn draw_tiles(f: &mut Frame, area: Rect, view: &View) {
    for (tile, rect) in view.tiles.iter().zip(tile_rects(area, view.tiles.len())) {
        let (border, letter) = if tile.cued {
            (
                Style::default().fg(Color::Yellow),
                Style::default().bold().underlined(),
            )
        } else {
            (Style::default(), Style::default().bold())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let letter = Paragraph::new(Span::styled(tile.letter.to_string(), letter))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(letter, rect);
    }
}

fn draw_dialog(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let width = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0) + 4;
    let height = lines.len() as u16 + 2;
    let rect = centered_rect(area, width.max(title.len() as u16 + 4), height);

    let block = Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().bg(Color::Gray).fg(Color::Black));

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        rect,
    );
}
