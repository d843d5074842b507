/// Navigation commands understood by the navigator.
///
/// Bound to keys and control-bar buttons by the TUI; the navigator
/// dispatches on this enum alone and knows nothing about input devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    First,
    Previous,
    ToggleCode,
    Next,
    Last,
}

impl NavCommand {
    /// Control-bar order, left to right.
    pub const ALL: [NavCommand; 5] = [
        NavCommand::First,
        NavCommand::Previous,
        NavCommand::ToggleCode,
        NavCommand::Next,
        NavCommand::Last,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            NavCommand::First => "first",
            NavCommand::Previous => "previous",
            NavCommand::ToggleCode => "toggle code",
            NavCommand::Next => "next",
            NavCommand::Last => "last",
        }
    }

    /// Whether the command moves the current index (and re-renders).
    #[must_use]
    pub const fn moves(self) -> bool {
        !matches!(self, NavCommand::ToggleCode)
    }
}
