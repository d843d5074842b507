/// Presentation options resolved from configuration.
///
/// Pure data; the TUI turns these into a palette and a glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}
