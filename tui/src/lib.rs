//! TUI rendering for nbdeck using ratatui.
//!
//! ```text
//! ┌ Analysis Navigator ─────────────────────────┐
//! │ Question 3                                  │  title
//! │ Which region sells most?                    │  question
//! │            ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀             │  chart
//! │ ┌ Code ───────────────────────────────────┐ │  code panel (togglable)
//! │ └─────────────────────────────────────────┘ │
//! │ [⇤][←]          [↕]          [→][⇥]         │  control bar
//! │ 3 / 12                  ↑ first ← prev ...  │  status
//! └─────────────────────────────────────────────┘
//! ```

mod chart;
mod controls;
mod input;
mod theme;
mod view;

pub use chart::{ChartImage, decode_chart};
pub use controls::ControlBar;
pub use input::{Action, handle_event, map_event};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use view::ScreenView;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use nbdeck_types::UiOptions;

use self::controls::draw_controls;

/// Title of the outer window frame.
pub const WINDOW_TITLE: &str = " Analysis Navigator ";

const CONTROL_BAR_HEIGHT: u16 = 3;

/// Draw the whole screen and return the control-bar hit areas.
pub fn draw(frame: &mut Frame, view: &mut ScreenView, options: UiOptions) -> ControlBar {
    let palette = palette(options);
    let glyphs = glyphs(options);

    let window = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(WINDOW_TITLE, styles::title(&palette)))
        .style(Style::default().bg(palette.bg_dark));
    let inner = window.inner(frame.area());
    frame.render_widget(window, frame.area());

    let body = if view.code_visible() {
        Constraint::Fill(3)
    } else {
        Constraint::Fill(1)
    };
    let code = if view.code_visible() {
        Constraint::Fill(2)
    } else {
        Constraint::Length(0)
    };

    let [title, question, chart, code_area, controls, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        body,
        code,
        Constraint::Length(CONTROL_BAR_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_heading(frame, view, title, question, &palette);
    draw_chart(frame, view, chart, &palette);
    if view.code_visible() {
        draw_code(frame, view, code_area, &palette);
    }
    let bar = draw_controls(frame, controls, view.code_visible(), &palette, &glyphs);
    draw_status(frame, view, status, &palette, &glyphs);
    bar
}

fn draw_heading(
    frame: &mut Frame,
    view: &ScreenView,
    title: Rect,
    question: Rect,
    palette: &Palette,
) {
    frame.render_widget(
        Paragraph::new(view.title())
            .alignment(Alignment::Center)
            .style(styles::title(palette)),
        title,
    );
    frame.render_widget(
        Paragraph::new(view.question())
            .alignment(Alignment::Center)
            .style(styles::question(palette))
            .wrap(Wrap { trim: true }),
        question,
    );
}

fn draw_chart(frame: &mut Frame, view: &ScreenView, area: Rect, palette: &Palette) {
    if let Some(image) = view.chart() {
        frame.render_widget(ChartImage::new(image, palette.bg_dark), area);
    }
}

fn draw_code(frame: &mut Frame, view: &mut ScreenView, area: Rect, palette: &Palette) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(" Code ", styles::key_hint(palette)));
    let inner = block.inner(area);

    let lines: Vec<Line> = view
        .code()
        .lines()
        .map(|line| Line::raw(line.to_owned()))
        .collect();
    let code = Paragraph::new(lines)
        .style(styles::code(palette))
        .wrap(Wrap { trim: false });

    // Scrolling counts wrapped rows, not source lines.
    let total_rows = code.line_count(inner.width.max(1));
    let max_scroll = u16::try_from(total_rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height);
    view.update_code_scroll_max(max_scroll);

    frame.render_widget(code.scroll((view.code_scroll(), 0)).block(block), area);
}

fn draw_status(
    frame: &mut Frame,
    view: &ScreenView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, styles::key_highlight(palette)),
            Span::styled(format!(" {label}  "), styles::key_hint(palette)),
        ]
    };
    let hints: Vec<Span> = [
        hint(glyphs.key_up, "first"),
        hint(glyphs.key_left, "prev"),
        hint("Space", "code"),
        hint(glyphs.key_right, "next"),
        hint(glyphs.key_down, "last"),
        hint("q", "quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    let hints = Line::from(hints);
    let hints_width = u16::try_from(hints.width()).unwrap_or(u16::MAX);

    let [position, keys] = Layout::horizontal([
        Constraint::Min(UnicodeWidthStr::width(view.position()) as u16),
        Constraint::Length(hints_width),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(view.position(), styles::key_hint(palette))),
        position,
    );
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), keys);
}
