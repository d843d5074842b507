//! Full-screen rendering tests against ratatui's in-memory backend.

mod common;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use serde_json::Value;
use tempfile::tempdir;

use nbdeck_engine::{
    ExtractOptions, NavCommand, Navigator, SlideView, TextField, UiOptions, load_deck,
};
use nbdeck_tui::{ControlBar, ScreenView, WINDOW_TITLE, draw, handle_event};

use common::{code_cell, markdown_cell, notebook, sample_notebook, write_notebook};

const WIDTH: u16 = 72;
const HEIGHT: u16 = 32;

struct Harness {
    terminal: Terminal<TestBackend>,
    navigator: Navigator,
    view: ScreenView,
    controls: ControlBar,
    options: UiOptions,
}

impl Harness {
    fn new(options: UiOptions) -> Self {
        Self::with_notebook(&sample_notebook(), options, WIDTH, HEIGHT)
    }

    fn with_notebook(doc: &Value, options: UiOptions, width: u16, height: u16) -> Self {
        let dir = tempdir().unwrap();
        let path = write_notebook(dir.path(), doc);
        let deck = load_deck(&path, &ExtractOptions::default()).unwrap();
        let navigator = Navigator::new(deck);
        let mut view = ScreenView::new();
        navigator.show(&mut view).unwrap();

        let mut harness = Self {
            terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
            navigator,
            view,
            controls: ControlBar::default(),
            options,
        };
        harness.render();
        harness
    }

    fn render(&mut self) {
        let view = &mut self.view;
        let options = self.options;
        let mut controls = ControlBar::default();
        self.terminal
            .draw(|frame| controls = draw(frame, view, options))
            .unwrap();
        self.controls = controls;
    }

    fn send(&mut self, event: &Event) {
        let quit =
            handle_event(event, &mut self.navigator, &mut self.view, &self.controls).unwrap();
        assert!(!quit);
        self.render();
    }

    fn click(&mut self, command: NavCommand) {
        let area = self.controls.button_area(command).expect("button rendered");
        self.send(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + area.width / 2,
            row: area.y + 1,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn screen(&self) -> String {
        screen_lines(&self.terminal).join("\n")
    }
}

fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

#[test]
fn single_slide_full_frame() {
    let doc = notebook(vec![
        markdown_cell("intro"),
        code_cell("#1. What is X?\ndf.info()"),
    ]);
    let harness = Harness::with_notebook(&doc, UiOptions::default(), 61, 19);

    // Only cell symbols are compared; every cell carries theme colors.
    let expected = [
        "╭ Analysis Navigator ───────────────────────────────────────╮",
        "│                      Dataset Schema                       │",
        "│                        What is X?                         │",
        "│                                                           │",
        "│                                                           │",
        "│                                                           │",
        "│                                                           │",
        "│                                                           │",
        "│                                                           │",
        "│                                                           │",
        "│╭ Code ───────────────────────────────────────────────────╮│",
        "││#1. What is X?                                           ││",
        "││df.info()                                                ││",
        "│╰─────────────────────────────────────────────────────────╯│",
        "│╭─────╮╭─────╮            ╭─────╮            ╭─────╮╭─────╮│",
        "││  ⇤  ││  ←  │            │  ↕  │            │  →  ││  ⇥  ││",
        "│╰─────╯╰─────╯            ╰─────╯            ╰─────╯╰─────╯│",
        "│1 / 1 ↑ first  ← prev  Space code  → next  ↓ last  q quit  │",
        "╰───────────────────────────────────────────────────────────╯",
    ];
    assert_eq!(screen_lines(&harness.terminal), expected);
}

#[test]
fn first_slide_shows_heading_chart_code_and_controls() {
    let harness = Harness::new(UiOptions::default());
    let screen = harness.screen();

    assert!(screen.contains(WINDOW_TITLE.trim()));
    assert!(screen.contains("Dataset Schema"));
    assert!(screen.contains("What is X?"));
    assert!(screen.contains("▀"), "chart should be rasterized");
    assert!(screen.contains(" Code "));
    assert!(screen.contains("df.info()"));
    for glyph in ["⇤", "←", "↕", "→", "⇥"] {
        assert!(screen.contains(glyph), "missing button {glyph}");
    }
    assert!(screen.contains("1 / 3"));
}

#[test]
fn toggling_hides_the_code_panel() {
    let mut harness = Harness::new(UiOptions::default());
    harness.click(NavCommand::ToggleCode);

    let screen = harness.screen();
    assert!(!screen.contains(" Code "));
    assert!(!screen.contains("df.info()"));
    assert!(screen.contains("Dataset Schema"));

    harness.click(NavCommand::ToggleCode);
    assert!(harness.screen().contains("df.info()"));
}

#[test]
fn clicking_next_moves_and_clears_the_chart() {
    let mut harness = Harness::new(UiOptions::default());
    harness.click(NavCommand::Next);

    assert_eq!(harness.navigator.current_index(), 1);
    let screen = harness.screen();
    assert!(screen.contains("Question 2"));
    assert!(screen.contains("What is Y?"));
    assert!(!screen.contains("▀"), "slide 2 has no chart");
    assert!(screen.contains("2 / 3"));
}

#[test]
fn clicking_last_then_first() {
    let mut harness = Harness::new(UiOptions::default());
    harness.click(NavCommand::Last);
    assert_eq!(harness.navigator.current_index(), 2);
    assert!(harness.screen().contains("print('hi')"));

    harness.click(NavCommand::First);
    assert_eq!(harness.navigator.current_index(), 0);
    assert!(harness.screen().contains("Dataset Schema"));
}

#[test]
fn ascii_mode_uses_ascii_buttons() {
    let harness = Harness::new(UiOptions {
        ascii_only: true,
        high_contrast: true,
    });
    let screen = harness.screen();
    assert!(screen.contains("|<"));
    assert!(screen.contains(">|"));
    assert!(!screen.contains("⇤"));
}

#[test]
fn wrapped_code_scrolls_to_its_last_row() {
    let words: Vec<String> = (0..200).map(|i| format!("w{i:03}")).collect();
    let mut view = ScreenView::new();
    view.set_text(TextField::Code, &words.join(" "));

    let options = UiOptions::default();
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal
        .draw(|frame| {
            draw(frame, &mut view, options);
        })
        .unwrap();
    let screen = screen_lines(&terminal).join("\n");
    assert!(screen.contains("w000"));
    assert!(!screen.contains("w199"));

    for _ in 0..50 {
        view.scroll_code(3);
    }
    terminal
        .draw(|frame| {
            draw(frame, &mut view, options);
        })
        .unwrap();

    assert!(view.code_scroll() > 0);
    let screen = screen_lines(&terminal).join("\n");
    assert!(screen.contains("w199"), "tail of the wrapped line is visible");
    assert!(!screen.contains("w000"));
}
