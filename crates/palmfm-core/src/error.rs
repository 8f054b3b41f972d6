//! Error types for `palmfm-core`.
//!
//! All fallible operations in the core library return [`ExplorerResult<T>`],
//! which is an alias for `Result<T, ExplorerError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the frontend to display
/// a meaningful notification. No error here crashes the process; the
/// session layer turns every failure into a user-facing event.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The target of a create operation already exists.
    #[error("already exists: {0}")]
    AlreadyExists(PathBuf),

    /// A user-supplied name is invalid (empty, whitespace-only, or
    /// containing path separators). Caught before any I/O happens.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// The entry cannot be opened in the viewer (not an image or text file).
    #[error("cannot open {0:?}: unsupported file type")]
    UnsupportedType(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `palmfm-core`.
pub type ExplorerResult<T> = Result<T, ExplorerError>;
