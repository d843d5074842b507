//! Key-driven navigation through a loaded deck, without a terminal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use nbdeck_engine::{ExtractOptions, Navigator, load_deck};
use nbdeck_tui::{ControlBar, ScreenView, handle_event};
use tempfile::tempdir;

use crate::common::{sample_notebook, write_notebook};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn setup() -> (Navigator, ScreenView) {
    let dir = tempdir().unwrap();
    let path = write_notebook(dir.path(), &sample_notebook());
    let deck = load_deck(&path, &ExtractOptions::default()).unwrap();
    let navigator = Navigator::new(deck);
    let mut view = ScreenView::new();
    navigator.show(&mut view).unwrap();
    (navigator, view)
}

fn send(navigator: &mut Navigator, view: &mut ScreenView, code: KeyCode) -> bool {
    handle_event(&press(code), navigator, view, &ControlBar::default()).unwrap()
}

#[test]
fn initial_render_shows_first_slide() {
    let (navigator, view) = setup();
    assert_eq!(navigator.current_index(), 0);
    assert_eq!(view.title(), "Dataset Schema");
    assert_eq!(view.question(), "What is X?");
    assert_eq!(view.position(), "1 / 3");
    assert!(view.chart().is_some());
    assert!(view.code_visible());
}

#[test]
fn right_stops_at_the_last_slide() {
    let (mut navigator, mut view) = setup();
    for _ in 0..5 {
        assert!(!send(&mut navigator, &mut view, KeyCode::Right));
    }
    assert_eq!(navigator.current_index(), 2);
    assert_eq!(view.title(), "");
    assert_eq!(view.question(), "");
    assert_eq!(view.code(), "print('hi')");
    assert_eq!(view.position(), "3 / 3");
}

#[test]
fn chart_follows_the_current_slide() {
    let (mut navigator, mut view) = setup();
    send(&mut navigator, &mut view, KeyCode::Right);
    assert!(view.chart().is_none(), "slide 2 has no chart");

    send(&mut navigator, &mut view, KeyCode::Up);
    assert_eq!(navigator.current_index(), 0);
    assert!(view.chart().is_some());
}

#[test]
fn down_and_left_walk_back_from_the_end() {
    let (mut navigator, mut view) = setup();
    send(&mut navigator, &mut view, KeyCode::Down);
    assert_eq!(navigator.current_index(), 2);
    send(&mut navigator, &mut view, KeyCode::Left);
    assert_eq!(view.title(), "Question 2");
    for _ in 0..4 {
        send(&mut navigator, &mut view, KeyCode::Left);
    }
    assert_eq!(navigator.current_index(), 0);
}

#[test]
fn space_toggles_code_without_moving() {
    let (mut navigator, mut view) = setup();
    send(&mut navigator, &mut view, KeyCode::Right);

    send(&mut navigator, &mut view, KeyCode::Char(' '));
    assert!(!view.code_visible());
    assert_eq!(navigator.current_index(), 1);

    send(&mut navigator, &mut view, KeyCode::Char(' '));
    assert!(view.code_visible());
    assert_eq!(navigator.current_index(), 1);
}

#[test]
fn q_quits() {
    let (mut navigator, mut view) = setup();
    assert!(send(&mut navigator, &mut view, KeyCode::Char('q')));
}
