//! Slides and the deck that holds them.

use std::slice;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

// ============================================================================
// Chart
// ============================================================================

/// A PNG chart as embedded in a notebook output: a base64 payload.
///
/// Decoding is deferred to render time; a notebook with a corrupt chart
/// still loads, and the failure surfaces when that slide is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    encoded: String,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("chart is not a decodable image: {0}")]
    Image(#[from] image::ImageError),
}

impl Chart {
    /// Wraps a base64 payload. Line breaks and padding whitespace are
    /// tolerated (nbformat writers wrap long payloads).
    #[must_use]
    pub fn from_base64(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Decodes the payload into raw PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, ChartError> {
        let compact: String = self
            .encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        Ok(STANDARD.decode(compact)?)
    }
}

// ============================================================================
// Slide
// ============================================================================

/// Title and question of a slide, derived together from one comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideHeading {
    pub title: String,
    pub question: String,
}

/// One navigable unit: heading, source code, optional chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub heading: Option<SlideHeading>,
    pub code: String,
    pub chart: Option<Chart>,
}

impl Slide {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.heading.as_ref().map(|h| h.title.as_str())
    }

    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.heading.as_ref().map(|h| h.question.as_str())
    }

    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }
}

// ============================================================================
// Deck
// ============================================================================

#[derive(Debug, Error)]
#[error("deck must contain at least one slide")]
pub struct EmptyDeckError;

/// A non-empty, immutable, ordered list of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, EmptyDeckError> {
        if slides.is_empty() {
            return Err(EmptyDeckError);
        }
        Ok(Self { slides })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
