//! The five-button control bar.
//!
//! ```text
//! [ ⇤ ][ ← ]        [ ↕ ]        [ → ][ ⇥ ]
//! ```
//!
//! Buttons are laid out on every draw and their rectangles kept for mouse
//! hit-testing until the next draw.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    widgets::{Block, BorderType, Paragraph},
};

use nbdeck_types::NavCommand;

use crate::theme::{Glyphs, Palette, styles};

const BUTTON_WIDTH: u16 = 7;

/// Screen rectangles of the rendered buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlBar {
    buttons: Vec<(NavCommand, Rect)>,
}

impl ControlBar {
    /// The command whose button contains the cell at `column`, `row`.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<NavCommand> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(command, _)| *command)
    }

    #[must_use]
    pub fn button_area(&self, command: NavCommand) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(c, _)| *c == command)
            .map(|(_, rect)| *rect)
    }
}

/// Left pair, centered toggle, right pair.
fn layout(area: Rect) -> [(NavCommand, Rect); 5] {
    let [first, previous, _, toggle, _, next, last] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(area);

    [
        (NavCommand::First, first),
        (NavCommand::Previous, previous),
        (NavCommand::ToggleCode, toggle),
        (NavCommand::Next, next),
        (NavCommand::Last, last),
    ]
}

pub(crate) fn draw_controls(
    frame: &mut Frame,
    area: Rect,
    code_visible: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> ControlBar {
    let mut bar = ControlBar::default();

    for (command, rect) in layout(area) {
        if rect.is_empty() {
            continue;
        }
        let active = command == NavCommand::ToggleCode && code_visible;
        let style = styles::button(palette, active);
        let button = Paragraph::new(glyphs.button(command))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style.fg(palette.bg_border)),
            );
        frame.render_widget(button, rect);
        bar.buttons.push((command, rect));
    }

    bar
}
