use anyhow::Result;
use ratatui::{
    Frame,
    buffer::Buffer,
    crossterm::event::{self, Event, KeyCode},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use std::time::Duration;

use super::game::{Game, Key};
use super::grid::EMPTY_CELL;
use super::outcome::Outcome;
use super::tile::{LetterStatus, Tile};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP_X: u16 = 2;
const TILE_GAP_Y: u16 = 1;

/// Map the next terminal event, if any, to a router key. Polls with a
/// short timeout so deferred work (the outcome reveal) advances while the
/// player is idle.
pub fn poll_input() -> Result<Option<Key>> {
    if !event::poll(Duration::from_millis(50))? {
        return Ok(None);
    }

    if let Event::Key(key) = event::read()? {
        let mapped = match key.code {
            KeyCode::Esc => Some(Key::Quit),
            KeyCode::Tab => Some(Key::Restart),
            KeyCode::Up => Some(Key::MoreAttempts),
            KeyCode::Down => Some(Key::FewerAttempts),
            KeyCode::Right => Some(Key::MoreLetters),
            KeyCode::Left => Some(Key::FewerLetters),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Char(ch) => Some(Key::Letter(ch)),
            _ => None,
        };
        return Ok(mapped);
    }
    Ok(None)
}

impl Game {
    pub fn render_terminal(&self, frame: &mut Frame) {
        let board_height = self.grid.max_attempts as u16 * (TILE_HEIGHT + TILE_GAP_Y) + 3;
        let board_width = self.grid.word_len as u16 * (TILE_WIDTH + TILE_GAP_X) + 6;
        let outer_width = board_width.max(50);
        let outer_height = board_height + 14;

        let [outer_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Fill(1)])
            .margin(1)
            .areas(
                frame
                    .area()
                    .centered(Constraint::Length(outer_width), Constraint::Length(outer_height)),
            );

        let [inner_area] = Layout::vertical([Constraint::Fill(1)])
            .margin(1)
            .areas(outer_area);

        let [msg_area, top_area, bottom_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(2),
                Constraint::Length(board_height),
                Constraint::Length(7),
            ])
            .margin(1)
            .areas(inner_area);

        self.render_border(outer_area, frame.buffer_mut());
        self.render_system_message(msg_area, frame.buffer_mut());
        self.render_game_board(top_area, frame.buffer_mut());
        self.render_keyboard(bottom_area, frame.buffer_mut());
    }

    fn render_border(&self, area: Rect, buf: &mut Buffer) {
        let instructions = Line::from(vec![
            " Submit ".into(),
            "<Enter>".blue().bold(),
            " New game ".into(),
            "<Tab>".blue().bold(),
            " Rows ".into(),
            "<↑ ↓>".blue().bold(),
            " Letters ".into(),
            "<← →>".blue().bold(),
            " Quit ".into(),
            "<Esc>".blue().bold(),
        ]);

        let settings = self.settings();
        Block::bordered()
            .title(format!(
                "Wordle Unlimited — {} tries, {} letters",
                settings.num_of_attempts, settings.num_of_letters
            ))
            .title_bottom(instructions.right_aligned())
            .border_type(BorderType::Rounded)
            .render(area, buf);
    }

    fn render_system_message(&self, area: Rect, buf: &mut Buffer) {
        if !self.err_msg.is_empty() {
            Span::styled(self.err_msg.clone(), Style::default().fg(Color::Red)).render(area, buf);
            return;
        }
        if self.show_none_word_error {
            Span::styled("Not in word list", Style::default().fg(Color::Red)).render(area, buf);
            return;
        }
        match self.status {
            Outcome::Won => Paragraph::new(Line::from(vec![
                Span::raw("You won! The answer is: ").fg(Color::Green),
                Span::raw(&self.grid.target).bold().fg(Color::White),
            ]))
            .render(area, buf),
            Outcome::Lost => Paragraph::new(Line::from(vec![
                Span::raw("You lost! The answer is: ").fg(Color::LightYellow),
                Span::raw(&self.grid.target).bold().fg(Color::White),
            ]))
            .render(area, buf),
            Outcome::Ongoing => {}
        }
    }

    fn render_game_board(&self, area: Rect, buf: &mut Buffer) {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .render(area, buf);
        let [game_board_area] = Layout::vertical([Constraint::Fill(1)])
            .margin(1)
            .areas(area);

        let center_x = (game_board_area.left() + game_board_area.right()) / 2;
        let base_y = game_board_area.y + 1;

        for row in 0..self.grid.max_attempts {
            for col in 0..self.grid.word_len {
                let letter = self.grid.rows[row][col];
                let status = if row < self.grid.attempt_index {
                    self.grid.statuses[row][col]
                } else if row == self.grid.attempt_index && letter != EMPTY_CELL {
                    // Typed but not yet evaluated.
                    LetterStatus::Absent
                } else {
                    LetterStatus::Unset
                };
                let tile = Tile { letter, status };
                tile.render(self.tile_area(center_x, base_y, row, col), buf);
            }
        }
    }

    fn tile_area(&self, center_x: u16, base_y: u16, row: usize, col: usize) -> Rect {
        let row_width = (TILE_WIDTH + TILE_GAP_X) * self.grid.word_len as u16 - TILE_GAP_X;
        let x = center_x as i32 - row_width as i32 / 2
            + col as i32 * (TILE_WIDTH + TILE_GAP_X) as i32;
        let y = base_y as i32 + row as i32 * (TILE_HEIGHT + TILE_GAP_Y) as i32;

        Rect {
            x: x as u16,
            y: y as u16,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        }
    }

    fn render_keyboard(&self, area: Rect, buf: &mut Buffer) {
        let qwerty = [
            "Q W E R T Y U I O P",
            " A S D F G H J K L ",
            "  Z X C V B N M    ",
        ];
        Block::bordered()
            .border_type(BorderType::Rounded)
            .render(area, buf);
        let [keyboard_area] = Layout::vertical([Constraint::Fill(1)])
            .margin(1)
            .areas(area);
        let mut lines = Vec::new();
        for row in qwerty {
            let spans = row
                .chars()
                .map(|ch| {
                    if ch == ' ' {
                        Span::raw(" ")
                    } else {
                        let color = match self.keyboard.get(ch) {
                            LetterStatus::Correct => Color::Green,
                            LetterStatus::Present => Color::Yellow,
                            LetterStatus::Absent => Color::DarkGray,
                            LetterStatus::Unset => Color::Black,
                        };
                        Span::raw(format!(" {ch} ")).bg(color).bold()
                    }
                })
                .collect();
            lines.push(spans);
            lines.push(Line::from(vec![]));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(keyboard_area, buf);
    }
}
