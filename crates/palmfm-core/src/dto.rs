//! Serializable views of core types for frontend bridges.
//!
//! Mobile shells consume the core over a serialization boundary; these DTOs
//! define that wire shape. Directory locators are rendered as strings with
//! a trailing separator, which is how the header path and navigation
//! targets are displayed and passed around on the UI side.

use std::path::Path;

use serde::Serialize;

use crate::fs::entry::Entry;

/// One listed entry, as the frontend sees it.
#[derive(Debug, Serialize)]
pub struct EntryDto {
    pub name: String,
    pub uri: String,
    pub is_dir: bool,
    /// `"image"`, `"text"`, or `"other"`; absent for directories.
    pub kind: Option<&'static str>,
}

impl From<&Entry> for EntryDto {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name().to_string(),
            uri: entry.path().to_string_lossy().into_owned(),
            is_dir: entry.is_dir(),
            kind: entry.kind().map(|k| k.as_str()),
        }
    }
}

/// A full listing snapshot for one directory.
#[derive(Debug, Serialize)]
pub struct ListingDto {
    /// The listed directory, trailing-separator-normalized.
    pub current_path: String,
    pub entries: Vec<EntryDto>,
}

impl ListingDto {
    /// Builds a snapshot from the listed directory and its entries.
    pub fn new(current_path: &Path, entries: &[Entry]) -> Self {
        Self {
            current_path: dir_locator(current_path),
            entries: entries.iter().map(EntryDto::from).collect(),
        }
    }
}

/// Renders a directory path as a locator string ending in `/`.
pub fn dir_locator(path: &Path) -> String {
    let s = path.to_string_lossy();
    if s.ends_with('/') {
        s.into_owned()
    } else {
        format!("{s}/")
    }
}
