use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Stylize},
    widgets::{Block, Paragraph, Widget},
};

/// Feedback category for one letter position.
///
/// Declaration order doubles as precedence: the smaller the value, the
/// stronger the status. `Correct` beats `Present` beats `Absent` beats
/// `Unset`, so upgrades compare with `<`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
    Unset,
}

#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub letter: char,
    pub status: LetterStatus,
}

impl Tile {
    pub fn get_color(&self) -> Color {
        match self.status {
            LetterStatus::Correct => Color::Green,
            LetterStatus::Present => Color::Yellow,
            LetterStatus::Absent => Color::DarkGray,
            LetterStatus::Unset => Color::Rgb(65, 65, 65), // very dark gray
        }
    }
}

impl Widget for Tile {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::new().bg(self.get_color()).render(area, buf);
        Paragraph::new(format!("{}", self.letter)).bold().render(
            area.centered(Constraint::Length(1), Constraint::Length(1)),
            buf,
        );
    }
}
