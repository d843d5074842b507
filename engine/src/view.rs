use nbdeck_types::{Chart, ChartError};

/// Text fields a view exposes to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Question,
    Code,
    /// Position indicator, e.g. `3 / 12`.
    Position,
}

/// The display surface the navigator renders into.
///
/// A fixed set of setters: text per [`TextField`], the chart image, and
/// code-panel visibility. Each call replaces the previous value outright.
pub trait SlideView {
    fn set_text(&mut self, field: TextField, text: &str);

    /// Show `chart`, or clear the chart area when `None`.
    ///
    /// Decoding happens here; an undecodable chart is an error.
    fn set_chart(&mut self, chart: Option<&Chart>) -> Result<(), ChartError>;

    fn set_code_visible(&mut self, visible: bool);
}
