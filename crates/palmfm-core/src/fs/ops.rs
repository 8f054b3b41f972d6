//! Directory listing and file operations.
//!
//! All operations are async and go through [`tokio::fs`]. They are issued
//! one at a time by the session; only the per-child metadata lookups inside
//! a single [`list_directory`] call run concurrently, and those are joined
//! before the listing is returned. Nothing here retries or caches.

use std::path::{Path, PathBuf};

use futures_util::future::join_all;
use tokio::io::AsyncWriteExt;

use crate::error::{ExplorerError, ExplorerResult};
use crate::fs::entry::{Entry, FileKind};

/// Initial content written into files created by [`create_file`].
pub const NEW_FILE_PLACEHOLDER: &str = "File content goes here";

/// Reads the immediate children of `path` and returns them as [`Entry`] values.
///
/// The listing is non-recursive and unsorted. A child whose metadata cannot
/// be resolved (broken symlink, deleted while listing) is dropped from the
/// result rather than failing the whole listing. An empty directory returns
/// an empty vector, not an error.
///
/// # Errors
///
/// - [`ExplorerError::NotFound`] — the path does not exist.
/// - [`ExplorerError::NotADirectory`] — the path is not a directory.
/// - [`ExplorerError::PermissionDenied`] — read access is denied.
/// - [`ExplorerError::Io`] — any other I/O error.
pub async fn list_directory(path: &Path) -> ExplorerResult<Vec<Entry>> {
    let meta = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ExplorerError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => ExplorerError::PermissionDenied(path.to_path_buf()),
        _ => ExplorerError::Io(e),
    })?;
    if !meta.is_dir() {
        return Err(ExplorerError::NotADirectory(path.to_path_buf()));
    }

    let mut read_dir = tokio::fs::read_dir(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ExplorerError::PermissionDenied(path.to_path_buf())
        } else {
            ExplorerError::Io(e)
        }
    })?;

    let mut children = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(child)) => children.push(child),
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("directory iteration ended early in {}: {e}", path.display());
                break;
            }
        }
    }

    // Metadata lookups run concurrently and are joined before the listing
    // is produced. They follow symlinks, so a dangling link fails to
    // resolve and is skipped like any other unreadable child.
    let lookups = join_all(children.iter().map(|child| tokio::fs::metadata(child.path()))).await;

    let mut entries = Vec::with_capacity(children.len());
    for (child, meta) in children.iter().zip(lookups) {
        match meta {
            Ok(meta) => entries.push(Entry::new(child.path(), &meta)),
            Err(e) => {
                tracing::warn!("skipping unreadable entry {:?}: {e}", child.file_name());
            }
        }
    }

    Ok(entries)
}

/// Creates the directory `parent/name`.
///
/// Existing targets are never overwritten or merged into.
///
/// # Errors
///
/// - [`ExplorerError::InvalidName`] if `name` is empty, whitespace-only, or
///   contains a path separator. Checked before any I/O.
/// - [`ExplorerError::AlreadyExists`] if the target already exists.
/// - [`ExplorerError::Io`] for any other filesystem rejection.
pub async fn create_folder(parent: &Path, name: &str) -> ExplorerResult<PathBuf> {
    let name = valid_entry_name(name)?;
    let target = parent.join(name);

    tokio::fs::create_dir(&target)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => ExplorerError::AlreadyExists(target.clone()),
            std::io::ErrorKind::PermissionDenied => ExplorerError::PermissionDenied(target.clone()),
            _ => ExplorerError::Io(e),
        })?;

    Ok(target)
}

/// Creates the text file `parent/name.txt` with placeholder content.
///
/// The `.txt` suffix is always appended, so new files classify as
/// [`FileKind::Text`] and open in the editor.
///
/// # Errors
///
/// - [`ExplorerError::InvalidName`] if `name` is empty, whitespace-only, or
///   contains a path separator. Checked before any I/O.
/// - [`ExplorerError::AlreadyExists`] if the target already exists.
/// - [`ExplorerError::Io`] for any other filesystem rejection.
pub async fn create_file(parent: &Path, name: &str) -> ExplorerResult<PathBuf> {
    let name = valid_entry_name(name)?;
    let target = parent.join(format!("{name}.txt"));

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => ExplorerError::AlreadyExists(target.clone()),
            std::io::ErrorKind::PermissionDenied => ExplorerError::PermissionDenied(target.clone()),
            _ => ExplorerError::Io(e),
        })?;
    file.write_all(NEW_FILE_PLACEHOLDER.as_bytes()).await?;
    file.flush().await?;

    Ok(target)
}

/// Reads the full content of a text entry into a string.
///
/// The whole file is loaded into memory; no size cap is applied.
///
/// # Errors
///
/// - [`ExplorerError::UnsupportedType`] if the entry is not a text file.
/// - [`ExplorerError::NotFound`] if the file vanished since listing.
/// - [`ExplorerError::Io`] on any other read failure.
pub async fn read_text(entry: &Entry) -> ExplorerResult<String> {
    if entry.kind() != Some(FileKind::Text) {
        return Err(ExplorerError::UnsupportedType(entry.name().to_string()));
    }

    tokio::fs::read_to_string(entry.path())
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExplorerError::NotFound(entry.path().to_path_buf()),
            _ => ExplorerError::Io(e),
        })
}

/// Overwrites the file at `path` with `content` in full.
///
/// There is no append mode and no atomic rename: a crash mid-write can
/// leave a truncated file behind.
///
/// # Errors
///
/// - [`ExplorerError::Io`] on any write failure.
pub async fn write_text(path: &Path, content: &str) -> ExplorerResult<()> {
    tokio::fs::write(path, content).await?;
    Ok(())
}

/// Deletes an entry: files directly, directories recursively.
///
/// Directory deletes are idempotent — removing an already-gone directory
/// succeeds. File deletes are strict — removing a missing file is an error.
/// The asymmetry mirrors the platform delete API and frontends rely on it.
///
/// # Errors
///
/// - [`ExplorerError::NotFound`] if a *file* entry no longer exists.
/// - [`ExplorerError::Io`] for any other deletion failure.
pub async fn delete_entry(entry: &Entry) -> ExplorerResult<()> {
    if entry.is_dir() {
        match tokio::fs::remove_dir_all(entry.path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ExplorerError::Io(e)),
        }
    } else {
        tokio::fs::remove_file(entry.path())
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    ExplorerError::NotFound(entry.path().to_path_buf())
                }
                std::io::ErrorKind::PermissionDenied => {
                    ExplorerError::PermissionDenied(entry.path().to_path_buf())
                }
                _ => ExplorerError::Io(e),
            })
    }
}

/// Copies a file from outside the managed tree into `target_dir`,
/// preserving its base name.
///
/// # Errors
///
/// - [`ExplorerError::InvalidName`] if `source` has no base name.
/// - [`ExplorerError::NotFound`] if `source` does not exist.
/// - [`ExplorerError::Io`] on any other copy failure.
pub async fn import_file(source: &Path, target_dir: &Path) -> ExplorerResult<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| ExplorerError::InvalidName(source.display().to_string()))?;
    let target = target_dir.join(name);

    tokio::fs::copy(source, &target)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExplorerError::NotFound(source.to_path_buf()),
            _ => ExplorerError::Io(e),
        })?;

    Ok(target)
}

/// Validates a user-supplied entry name before any I/O.
///
/// Whitespace-only names are rejected, but accepted names are used as
/// given, without trimming.
fn valid_entry_name(name: &str) -> ExplorerResult<&str> {
    if name.trim().is_empty() {
        return Err(ExplorerError::InvalidName(name.to_string()));
    }
    if name.contains('/') || name.contains('\0') {
        return Err(ExplorerError::InvalidName(name.to_string()));
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return Err(ExplorerError::InvalidName(name.to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry_for(path: &Path) -> Entry {
        let metadata = fs::metadata(path).unwrap();
        Entry::new(path.to_path_buf(), &metadata)
    }

    #[tokio::test]
    async fn list_directory_returns_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "hello").unwrap();
        fs::write(tmp.path().join("b.png"), "").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let entries = list_directory(tmp.path()).await.unwrap();

        assert_eq!(entries.len(), 3);
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert!(names.contains(&"a.txt"));
        assert!(names.contains(&"b.png"));
        assert!(names.contains(&"sub"));
    }

    #[tokio::test]
    async fn list_directory_uris_distinct_and_prefixed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("one.txt"), "").unwrap();
        fs::write(tmp.path().join("two.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("three")).unwrap();

        let entries = list_directory(tmp.path()).await.unwrap();

        let paths: Vec<&Path> = entries.iter().map(|e| e.path()).collect();
        for path in &paths {
            assert!(path.starts_with(tmp.path()));
        }
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[tokio::test]
    async fn list_directory_empty() {
        let tmp = TempDir::new().unwrap();

        let entries = list_directory(tmp.path()).await.unwrap();

        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn list_directory_nonexistent_returns_not_found() {
        let result = list_directory(Path::new("/nonexistent/path/nowhere")).await;

        assert!(matches!(result.unwrap_err(), ExplorerError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_directory_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "content").unwrap();

        let result = list_directory(&file).await;

        assert!(matches!(result.unwrap_err(), ExplorerError::NotADirectory(_)));
    }

    #[tokio::test]
    async fn list_directory_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("nested.txt"), "").unwrap();
        fs::write(tmp.path().join("top.txt"), "").unwrap();

        let entries = list_directory(tmp.path()).await.unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(entries.len(), 2);
        assert!(!names.contains(&"nested.txt"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn list_directory_drops_broken_symlink() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("real.txt"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dangling")).unwrap();

        let entries = list_directory(tmp.path()).await.unwrap();

        // The dangling link fails to resolve and is dropped without
        // failing the listing.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "real.txt");
    }

    #[tokio::test]
    async fn create_folder_succeeds() {
        let tmp = TempDir::new().unwrap();

        let created = create_folder(tmp.path(), "Photos").await.unwrap();

        assert_eq!(created, tmp.path().join("Photos"));
        assert!(created.is_dir());
    }

    #[tokio::test]
    async fn create_folder_empty_name_is_invalid() {
        let tmp = TempDir::new().unwrap();

        let result = create_folder(tmp.path(), "").await;

        assert!(matches!(result.unwrap_err(), ExplorerError::InvalidName(_)));
        assert!(list_directory(tmp.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_folder_whitespace_name_is_invalid() {
        let tmp = TempDir::new().unwrap();

        let result = create_folder(tmp.path(), "   ").await;

        assert!(matches!(result.unwrap_err(), ExplorerError::InvalidName(_)));
        assert!(list_directory(tmp.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_folder_name_with_slash_is_invalid() {
        let tmp = TempDir::new().unwrap();

        let result = create_folder(tmp.path(), "a/b").await;

        assert!(matches!(result.unwrap_err(), ExplorerError::InvalidName(_)));
    }

    #[tokio::test]
    async fn create_folder_duplicate_already_exists() {
        let tmp = TempDir::new().unwrap();
        create_folder(tmp.path(), "Photos").await.unwrap();

        let result = create_folder(tmp.path(), "Photos").await;

        assert!(matches!(result.unwrap_err(), ExplorerError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn create_file_appends_txt_and_writes_placeholder() {
        let tmp = TempDir::new().unwrap();

        let created = create_file(tmp.path(), "notes").await.unwrap();

        assert_eq!(created, tmp.path().join("notes.txt"));
        assert_eq!(fs::read_to_string(&created).unwrap(), NEW_FILE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn created_file_lists_as_text() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "notes").await.unwrap();

        let entries = list_directory(tmp.path()).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "notes.txt");
        assert_eq!(entries[0].kind(), Some(FileKind::Text));
    }

    #[tokio::test]
    async fn create_file_empty_name_is_invalid() {
        let tmp = TempDir::new().unwrap();

        let result = create_file(tmp.path(), "  ").await;

        assert!(matches!(result.unwrap_err(), ExplorerError::InvalidName(_)));
        assert!(list_directory(tmp.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_file_duplicate_already_exists() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "notes").await.unwrap();

        let result = create_file(tmp.path(), "notes").await;

        assert!(matches!(result.unwrap_err(), ExplorerError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn read_text_returns_content() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("memo.txt");
        fs::write(&file, "remember this").unwrap();

        let content = read_text(&entry_for(&file)).await.unwrap();

        assert_eq!(content, "remember this");
    }

    #[tokio::test]
    async fn read_text_rejects_non_text_entry() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("photo.jpg");
        fs::write(&file, [0u8; 8]).unwrap();

        let result = read_text(&entry_for(&file)).await;

        assert!(matches!(
            result.unwrap_err(),
            ExplorerError::UnsupportedType(_)
        ));
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("draft.txt");
        fs::write(&file, "old").unwrap();

        write_text(&file, "hello").await.unwrap();
        let content = read_text(&entry_for(&file)).await.unwrap();

        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn write_text_overwrites_in_full() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("draft.txt");
        fs::write(&file, "a much longer original body").unwrap();

        write_text(&file, "short").await.unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "short");
    }

    #[tokio::test]
    async fn delete_file_removes_it() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("bye.txt");
        fs::write(&file, "x").unwrap();
        let entry = entry_for(&file);

        delete_entry(&entry).await.unwrap();

        assert!(!file.exists());
    }

    #[tokio::test]
    async fn delete_directory_removes_contents() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("stuff");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inside.txt"), "").unwrap();
        let entry = entry_for(&dir);

        delete_entry(&entry).await.unwrap();

        assert!(!dir.exists());
    }

    // Directory deletes are idempotent, file deletes are not. The asymmetry
    // comes from the platform delete API and is deliberately preserved.
    #[tokio::test]
    async fn delete_directory_twice_is_ok() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("stuff");
        fs::create_dir(&dir).unwrap();
        let entry = entry_for(&dir);

        delete_entry(&entry).await.unwrap();
        delete_entry(&entry).await.unwrap();

        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn delete_missing_file_errors_every_time() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("fleeting.txt");
        fs::write(&file, "x").unwrap();
        let entry = entry_for(&file);
        delete_entry(&entry).await.unwrap();

        let first = delete_entry(&entry).await;
        let second = delete_entry(&entry).await;

        assert!(matches!(first.unwrap_err(), ExplorerError::NotFound(_)));
        assert!(matches!(second.unwrap_err(), ExplorerError::NotFound(_)));
    }

    #[tokio::test]
    async fn import_file_preserves_base_name() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let source = outside.path().join("IMG_0042.jpg");
        fs::write(&source, [1u8, 2, 3]).unwrap();

        let target = import_file(&source, tmp.path()).await.unwrap();

        assert_eq!(target, tmp.path().join("IMG_0042.jpg"));
        assert_eq!(fs::read(&target).unwrap(), vec![1u8, 2, 3]);
        assert!(source.exists());
    }

    #[tokio::test]
    async fn import_file_missing_source_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();

        let result = import_file(&outside.path().join("gone.jpg"), tmp.path()).await;

        assert!(matches!(result.unwrap_err(), ExplorerError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_root_scenario() {
        let tmp = TempDir::new().unwrap();
        assert!(list_directory(tmp.path()).await.unwrap().is_empty());

        create_folder(tmp.path(), "Photos").await.unwrap();
        create_file(tmp.path(), "todo").await.unwrap();

        let entries = list_directory(tmp.path()).await.unwrap();
        assert_eq!(entries.len(), 2);

        let dir = entries.iter().find(|e| e.is_dir()).unwrap();
        assert_eq!(dir.name(), "Photos");

        let file = entries.iter().find(|e| !e.is_dir()).unwrap();
        assert_eq!(file.name(), "todo.txt");
        assert_eq!(file.kind(), Some(FileKind::Text));
    }
}
