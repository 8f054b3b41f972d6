//! Current-directory tracking.

use std::path::{Path, PathBuf};

use crate::fs::entry::Entry;

/// The directory currently being browsed and its listing.
///
/// `PathState` is the single source of truth for "what directory am I
/// viewing" and "what entries does it contain". The root is fixed at
/// construction and can never be navigated above or deleted. All mutation
/// methods consume `self` and return a new instance, following the
/// project-wide immutability convention.
///
/// The listing is replaced wholesale via [`PathState::with_entries`] after
/// every navigation or mutation; it is never patched incrementally. Both
/// navigation methods clear it, so a state between navigation and re-list
/// never shows entries from the previous directory.
#[derive(Debug, Clone)]
pub struct PathState {
    root: PathBuf,
    current: PathBuf,
    entries: Vec<Entry>,
}

impl PathState {
    /// Creates a new state rooted (and currently positioned) at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            current: root.clone(),
            root,
            entries: Vec::new(),
        }
    }

    /// Returns the fixed root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory currently being browsed.
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Returns the current listing.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns `true` when the current directory is the root.
    pub fn is_at_root(&self) -> bool {
        self.current == self.root
    }

    /// Returns a new state with `entries` replacing the current listing.
    pub fn with_entries(self, entries: Vec<Entry>) -> Self {
        Self { entries, ..self }
    }

    /// Enters the directory `entry` points at.
    ///
    /// Callers must pass a directory entry; passing a file is a contract
    /// violation, not a runtime error.
    pub fn enter(self, entry: &Entry) -> Self {
        debug_assert!(entry.is_dir(), "enter() requires a directory entry");
        Self {
            current: entry.path().to_path_buf(),
            entries: Vec::new(),
            ..self
        }
    }

    /// Moves to the parent directory. No-op at the root.
    pub fn up(self) -> Self {
        if self.is_at_root() {
            return self;
        }
        let parent = match self.current.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return self,
        };
        Self {
            current: parent,
            entries: Vec::new(),
            ..self
        }
    }
}
