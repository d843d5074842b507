//! Input handling for the nbdeck TUI.
//!
//! Keys and clicks map to an [`Action`]; navigation actions go through the
//! navigator's single dispatch, everything else stays in the TUI.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use nbdeck_engine::{NavCommand, Navigator, RenderError};

use crate::controls::ControlBar;
use crate::view::ScreenView;

const PAGE_SCROLL: i32 = 10;
const WHEEL_SCROLL: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(NavCommand),
    ScrollCode(i32),
    Quit,
}

/// Map a terminal event to an action. `None` for events nbdeck ignores.
#[must_use]
pub fn map_event(event: &Event, controls: &ControlBar) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, controls),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Up => Action::Navigate(NavCommand::First),
        KeyCode::Left => Action::Navigate(NavCommand::Previous),
        KeyCode::Char(' ') => Action::Navigate(NavCommand::ToggleCode),
        KeyCode::Right => Action::Navigate(NavCommand::Next),
        KeyCode::Down => Action::Navigate(NavCommand::Last),
        KeyCode::PageUp => Action::ScrollCode(-PAGE_SCROLL),
        KeyCode::PageDown => Action::ScrollCode(PAGE_SCROLL),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn map_mouse(mouse: &MouseEvent, controls: &ControlBar) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => controls
            .hit(mouse.column, mouse.row)
            .map(Action::Navigate),
        MouseEventKind::ScrollUp => Some(Action::ScrollCode(-WHEEL_SCROLL)),
        MouseEventKind::ScrollDown => Some(Action::ScrollCode(WHEEL_SCROLL)),
        _ => None,
    }
}

/// Handle one event to completion. Returns `true` when the user quits.
pub fn handle_event(
    event: &Event,
    navigator: &mut Navigator,
    view: &mut ScreenView,
    controls: &ControlBar,
) -> Result<bool, RenderError> {
    let Some(action) = map_event(event, controls) else {
        return Ok(false);
    };

    match action {
        Action::Navigate(command) => {
            let transition = navigator.dispatch(command, view)?;
            if transition.changed() {
                debug!(from = transition.from, to = transition.to, "Slide changed");
            }
        }
        Action::ScrollCode(delta) => view.scroll_code(delta),
        Action::Quit => return Ok(true),
    }
    Ok(false)
}
