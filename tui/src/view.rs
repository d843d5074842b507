use image::RgbaImage;

use nbdeck_engine::{SlideView, TextField};
use nbdeck_types::{Chart, ChartError, sanitize_display_text};

use crate::chart::decode_chart;

/// Terminal-side state of the slide being shown.
///
/// The navigator writes into it through [`SlideView`]; `draw` reads it.
/// Text is sanitized on the way in, so drawing never sees escape sequences.
#[derive(Debug, Default)]
pub struct ScreenView {
    title: String,
    question: String,
    code: String,
    position: String,
    chart: Option<RgbaImage>,
    code_visible: bool,
    code_scroll: u16,
    /// Last scrollable row of the code panel, as measured by the last draw.
    code_scroll_max: u16,
}

impl ScreenView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            code_visible: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    #[must_use]
    pub fn chart(&self) -> Option<&RgbaImage> {
        self.chart.as_ref()
    }

    #[must_use]
    pub fn code_visible(&self) -> bool {
        self.code_visible
    }

    #[must_use]
    pub fn code_scroll(&self) -> u16 {
        self.code_scroll
    }

    /// Scroll the code panel by `delta` rows, clamped to what the panel
    /// can show.
    pub fn scroll_code(&mut self, delta: i32) {
        let next = i32::from(self.code_scroll).saturating_add(delta);
        self.code_scroll = u16::try_from(next.max(0))
            .unwrap_or(u16::MAX)
            .min(self.code_scroll_max);
    }

    /// Record how far the code panel can scroll at its current size.
    ///
    /// Called from `draw` with the wrapped row count minus the visible
    /// height; the current offset is pulled back if the panel grew.
    pub fn update_code_scroll_max(&mut self, max: u16) {
        self.code_scroll_max = max;
        self.code_scroll = self.code_scroll.min(max);
    }
}

impl SlideView for ScreenView {
    fn set_text(&mut self, field: TextField, text: &str) {
        let text = sanitize_display_text(text).into_owned();
        match field {
            TextField::Title => self.title = text,
            TextField::Question => self.question = text,
            TextField::Position => self.position = text,
            TextField::Code => {
                if text != self.code {
                    self.code_scroll = 0;
                    self.code_scroll_max = 0;
                }
                self.code = text;
            }
        }
    }

    fn set_chart(&mut self, chart: Option<&Chart>) -> Result<(), ChartError> {
        self.chart = chart.map(decode_chart).transpose()?;
        Ok(())
    }

    fn set_code_visible(&mut self, visible: bool) {
        self.code_visible = visible;
    }
}
