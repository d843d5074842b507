//! Serde model of the nbformat 4 subset nbdeck reads.
//!
//! Only the fields extraction needs are modelled; everything else in the
//! document (metadata, execution counts, attachments) is ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::ExtractError;

const SUPPORTED_MAJOR: u32 = 4;

#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub nbformat: u32,
    #[serde(default)]
    pub nbformat_minor: u32,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(default, deserialize_with = "multiline")]
    pub source: String,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Output {
    pub output_type: String,
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
}

/// nbformat stores multiline strings either as one string or as a list of
/// lines (each keeping its trailing newline).
#[derive(Deserialize)]
#[serde(untagged)]
enum MultilineString {
    One(String),
    Lines(Vec<String>),
}

impl MultilineString {
    fn join(self) -> String {
        match self {
            MultilineString::One(s) => s,
            MultilineString::Lines(lines) => lines.concat(),
        }
    }
}

fn multiline<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    MultilineString::deserialize(deserializer).map(MultilineString::join)
}

impl Notebook {
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let content = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        let notebook: Notebook = serde_json::from_str(json)?;
        if notebook.nbformat != SUPPORTED_MAJOR {
            return Err(ExtractError::UnsupportedVersion {
                major: notebook.nbformat,
            });
        }
        Ok(notebook)
    }
}

impl Cell {
    #[must_use]
    pub fn is_code(&self) -> bool {
        self.cell_type == CellType::Code
    }

    #[must_use]
    pub fn first_line(&self) -> &str {
        self.source.split('\n').next().unwrap_or_default()
    }
}

impl Output {
    /// The `image/png` payload of a `display_data` output, if any.
    #[must_use]
    pub fn display_png(&self) -> Option<String> {
        if self.output_type != "display_data" {
            return None;
        }
        match self.data.get("image/png")? {
            Value::String(s) => Some(s.clone()),
            Value::Array(parts) => Some(parts.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }
}
