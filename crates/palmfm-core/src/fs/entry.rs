//! File entry representation and kind classification.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// Coarse classification of a file, derived from its extension only.
///
/// The viewer uses this to decide how an entry opens: images render
/// read-only, text files open in the editor, and everything else is
/// rejected. There is no content sniffing — a misnamed file classifies
/// by its name, not its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// jpg, jpeg, png, or gif.
    Image,
    /// txt, json, or xml.
    Text,
    /// Any other extension, or no extension at all.
    Other,
}

impl FileKind {
    /// Classifies a file name by its lowercased extension suffix.
    pub fn from_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg" | "jpeg" | "png" | "gif") => Self::Image,
            Some("txt" | "json" | "xml") => Self::Text,
            _ => Self::Other,
        }
    }

    /// Stable lowercase label, used by the bridge DTOs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

/// A single file or directory entry in a listing.
///
/// `Entry` is immutable and reflects the filesystem at the moment the
/// listing was produced; it is not kept in sync afterwards. Directories
/// have no kind.
///
/// # Examples
///
/// ```no_run
/// use palmfm_core::Entry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = Entry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    kind: Option<FileKind>,
}

impl Entry {
    /// Creates a new `Entry` from a path and its metadata.
    ///
    /// The name is NFC-normalized: mobile filesystems report NFD, which
    /// renders Korean Hangul as individual Jamo otherwise.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let is_dir = metadata.is_dir();
        let kind = if is_dir {
            None
        } else {
            Some(FileKind::from_name(&name))
        };

        Self {
            path,
            name,
            is_dir,
            kind,
        }
    }

    /// Returns the full path of this entry (parent directory + name).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns the file kind, or `None` for directories.
    pub fn kind(&self) -> Option<FileKind> {
        self.kind
    }
}
