use std::path::Path;

use tracing::{debug, info};

use nbdeck_types::{Chart, Deck, Slide, SlideHeading};

use crate::{ExtractError, Notebook};

/// Cell index of the slide that gets the fixed title.
const FIXED_TITLE_CELL: usize = 1;

/// How headings are recognised and titled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Prefix that marks a heading line.
    pub marker: String,
    /// Title of the slide built from cell 1, whatever its fragment says.
    pub first_title: String,
    /// Prefix for every later title: `"<prefix> <fragment>"`.
    pub title_prefix: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: "#".to_string(),
            first_title: "Dataset Schema".to_string(),
            title_prefix: "Question".to_string(),
        }
    }
}

/// Read a notebook from disk and extract a non-empty deck.
pub fn load_deck(path: &Path, options: &ExtractOptions) -> Result<Deck, ExtractError> {
    let notebook = Notebook::from_path(path)?;
    let slides = extract_slides(&notebook, options)?;
    let deck = Deck::new(slides).map_err(|_| ExtractError::NoSlides)?;
    info!(path = %path.display(), slides = deck.len(), "Loaded notebook");
    Ok(deck)
}

/// Turn every code cell after the first into a slide, in cell order.
pub fn extract_slides(
    notebook: &Notebook,
    options: &ExtractOptions,
) -> Result<Vec<Slide>, ExtractError> {
    let mut slides = Vec::new();

    for (index, cell) in notebook.cells.iter().enumerate().skip(1) {
        if !cell.is_code() {
            continue;
        }

        let heading = parse_heading(cell.first_line(), index, options)?;
        let chart = cell
            .outputs
            .iter()
            .filter_map(|output| output.display_png())
            .last()
            .map(Chart::from_base64);

        debug!(
            cell = index,
            title = heading.as_ref().map_or("", |h| h.title.as_str()),
            chart = chart.is_some(),
            "Extracted slide"
        );

        slides.push(Slide {
            heading,
            code: cell.source.clone(),
            chart,
        });
    }

    Ok(slides)
}

fn parse_heading(
    first_line: &str,
    cell: usize,
    options: &ExtractOptions,
) -> Result<Option<SlideHeading>, ExtractError> {
    let Some(rest) = first_line.strip_prefix(options.marker.as_str()) else {
        return Ok(None);
    };

    let (fragment, question) =
        rest.trim()
            .split_once('.')
            .ok_or_else(|| ExtractError::MalformedHeading {
                cell,
                line: first_line.to_string(),
            })?;

    let title = if cell == FIXED_TITLE_CELL {
        options.first_title.clone()
    } else {
        let fragment = fragment.trim();
        if options.title_prefix.is_empty() {
            fragment.to_string()
        } else {
            format!("{} {fragment}", options.title_prefix)
        }
    };

    Ok(Some(SlideHeading {
        title,
        question: question.trim().to_string(),
    }))
}
