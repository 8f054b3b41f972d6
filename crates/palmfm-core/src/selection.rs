//! Selection state for the file viewer.

use crate::fs::entry::Entry;

/// What the viewer is currently showing.
///
/// A single tagged state replaces a pile of independent visibility flags:
/// at most one file is ever open, and text files always open with an
/// editable draft — there is no read-only text view. The creation dialogs
/// are orthogonal to file content and stay plain booleans in the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No file is open.
    Closed,
    /// An image file is open, rendered read-only by the frontend.
    Viewing(Entry),
    /// A text file is open with an in-memory, unsaved draft of its content.
    Editing {
        /// The file being edited.
        entry: Entry,
        /// The draft content, discarded on close and persisted on commit.
        draft: String,
    },
}

impl Selection {
    /// Returns `true` when no file is open.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns the open entry, if any.
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Self::Closed => None,
            Self::Viewing(entry) => Some(entry),
            Self::Editing { entry, .. } => Some(entry),
        }
    }

    /// Returns the unsaved draft while editing.
    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }
}
