//! Slide navigation state machine.
//!
//! State is a single index into a non-empty deck plus the code-panel flag.
//! Every transition is total: moves clamp to `0..=last_index`, so no
//! command sequence can leave the index out of range.

use thiserror::Error;
use tracing::debug;

use nbdeck_types::{ChartError, Deck, NavCommand, Slide};

use crate::view::{SlideView, TextField};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render chart of slide {}: {source}", index + 1)]
    Chart { index: usize, source: ChartError },
}

/// Outcome of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub command: NavCommand,
    pub from: usize,
    pub to: usize,
}

impl Transition {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug)]
pub struct Navigator {
    deck: Deck,
    current_index: usize,
    code_visible: bool,
}

impl Navigator {
    /// Starts at the first slide with the code panel visible.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            current_index: 0,
            code_visible: true,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        // The index is clamped on every transition and the deck is non-empty.
        &self.deck.as_slice()[self.current_index]
    }

    #[must_use]
    pub fn code_visible(&self) -> bool {
        self.code_visible
    }

    /// Initial paint: every field of the view, including panel visibility.
    pub fn show<V: SlideView + ?Sized>(&self, view: &mut V) -> Result<(), RenderError> {
        view.set_code_visible(self.code_visible);
        self.update_display(view)
    }

    /// Single entry point for all navigation commands.
    pub fn dispatch<V: SlideView + ?Sized>(
        &mut self,
        command: NavCommand,
        view: &mut V,
    ) -> Result<Transition, RenderError> {
        let from = self.current_index;

        if !command.moves() {
            self.code_visible = !self.code_visible;
            view.set_code_visible(self.code_visible);
            debug!(visible = self.code_visible, "Toggled code panel");
            return Ok(Transition {
                command,
                from,
                to: from,
            });
        }

        self.current_index = self.target(command);
        debug!(command = command.label(), from, to = self.current_index, "Navigate");
        self.update_display(view)?;

        Ok(Transition {
            command,
            from,
            to: self.current_index,
        })
    }

    pub fn go_to_first<V: SlideView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<Transition, RenderError> {
        self.dispatch(NavCommand::First, view)
    }

    pub fn go_to_previous<V: SlideView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<Transition, RenderError> {
        self.dispatch(NavCommand::Previous, view)
    }

    pub fn toggle_code<V: SlideView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<Transition, RenderError> {
        self.dispatch(NavCommand::ToggleCode, view)
    }

    pub fn go_to_next<V: SlideView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<Transition, RenderError> {
        self.dispatch(NavCommand::Next, view)
    }

    pub fn go_to_last<V: SlideView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<Transition, RenderError> {
        self.dispatch(NavCommand::Last, view)
    }

    /// Render the slide at the current index.
    ///
    /// A slide without chart clears the chart area rather than leaving the
    /// previous slide's image on screen.
    pub fn update_display<V: SlideView + ?Sized>(&self, view: &mut V) -> Result<(), RenderError> {
        let slide = self.current_slide();

        view.set_text(TextField::Title, slide.title().unwrap_or_default());
        view.set_text(TextField::Question, slide.question().unwrap_or_default());
        view.set_chart(slide.chart.as_ref())
            .map_err(|source| RenderError::Chart {
                index: self.current_index,
                source,
            })?;
        view.set_text(TextField::Code, &slide.code);
        view.set_text(
            TextField::Position,
            &format!("{} / {}", self.current_index + 1, self.deck.len()),
        );
        Ok(())
    }

    fn target(&self, command: NavCommand) -> usize {
        let last = self.deck.last_index();
        match command {
            NavCommand::First => 0,
            NavCommand::Previous => self.current_index.saturating_sub(1),
            NavCommand::Next => (self.current_index + 1).min(last),
            NavCommand::Last => last,
            NavCommand::ToggleCode => self.current_index,
        }
    }
}
