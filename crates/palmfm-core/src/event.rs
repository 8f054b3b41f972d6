//! Command and event types for communication between UI and core.
//!
//! The frontend translates user input into [`Command`]s, which the session
//! processes and answers with [`Event`]s. This decoupling lets any mobile
//! shell drive the same core logic.

use std::path::PathBuf;

use crate::fs::entry::Entry;

/// An action the frontend requests the core to perform.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone)]
pub enum Command {
    /// Enter the directory the entry points at.
    NavigateInto(Entry),
    /// Move to the parent directory (no-op at the root).
    NavigateUp,
    /// Re-read the current directory.
    Refresh,
    /// Create a subfolder with the given name in the current directory.
    CreateFolder(String),
    /// Create a text file with the given name in the current directory.
    CreateFile(String),
    /// Delete the entry (files directly, directories recursively).
    Delete(Entry),
    /// Pick an image from the photo library and copy it here.
    ImportExternal,
    /// Open the entry in the viewer.
    Open(Entry),
    /// Replace the unsaved draft of the open text file.
    UpdateDraft(String),
    /// Persist the draft and close the viewer.
    CommitEdit,
    /// Close the viewer, discarding any unsaved draft.
    CloseSelection,
}

/// A notification the core sends back to the frontend.
///
/// Events flow **Core → UI**. Operations that deliberately do nothing
/// (going up at the root, a cancelled import) produce no event at all.
#[derive(Debug, Clone)]
pub enum Event {
    /// A directory has been successfully read.
    DirectoryLoaded {
        /// The absolute path of the directory.
        path: PathBuf,
        /// The entries contained in the directory.
        entries: Vec<Entry>,
    },
    /// A file was opened in the viewer.
    FileOpened {
        /// The entry now showing.
        entry: Entry,
    },
    /// An operation failed; the frontend should notify the user.
    OperationFailed {
        /// Human-readable description of the operation.
        operation: String,
        /// The error message.
        error: String,
    },
}
