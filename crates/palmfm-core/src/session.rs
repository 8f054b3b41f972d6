//! The screen-level session tying navigation, operations, and selection
//! together.
//!
//! [`Session`] owns the [`PathState`], the viewer [`Selection`], and the
//! platform capabilities, and exposes the full surface a mobile frontend
//! needs. Every operation resolves to at most one [`Event`]:
//!
//! - `Some(Event::DirectoryLoaded)` — navigation or a mutation succeeded
//!   (mutations re-list the current directory; the fresh listing *is* the
//!   success signal, there is no separate completion notice).
//! - `Some(Event::FileOpened)` — a file entered the viewer.
//! - `Some(Event::OperationFailed)` — the user-facing notification for any
//!   failure. Errors never propagate out of the session as `Err`.
//! - `None` — nothing happened and nothing is reported: going up at the
//!   root, an import the user cancelled, draft edits, closing the viewer.
//!
//! Operations are awaited one at a time by the frontend; the session does
//! not guard against overlapping calls.

use std::path::{Path, PathBuf};

use crate::config::settings::Config;
use crate::error::ExplorerError;
use crate::event::{Command, Event};
use crate::fs::entry::{Entry, FileKind};
use crate::fs::ops;
use crate::nav::state::PathState;
use crate::platform::{MediaPicker, PermissionProbe, PermissionStatus, PickOutcome};
use crate::selection::Selection;

/// One browsing session over the application storage root.
pub struct Session {
    state: PathState,
    selection: Selection,
    picker: Box<dyn MediaPicker>,
    camera: PermissionStatus,
    config: Config,
}

impl Session {
    /// Creates a session rooted at the platform storage root (or the
    /// configured override), queries the camera permission once, and
    /// performs the initial listing.
    pub async fn new(
        platform_root: PathBuf,
        picker: Box<dyn MediaPicker>,
        permissions: &dyn PermissionProbe,
        config: Config,
    ) -> Self {
        let camera = permissions.camera_permission().await;
        let root = config.resolve_root(&platform_root);

        let mut session = Self {
            state: PathState::new(root),
            selection: Selection::Closed,
            picker,
            camera,
            config,
        };
        session.refresh().await;
        session
    }

    /// Returns the directory currently being browsed.
    pub fn current_path(&self) -> &Path {
        self.state.current()
    }

    /// Returns the fixed browsing root.
    pub fn root(&self) -> &Path {
        self.state.root()
    }

    /// Returns the current listing.
    pub fn entries(&self) -> &[Entry] {
        self.state.entries()
    }

    /// Returns the viewer state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns `true` when the capture affordance should be shown:
    /// configured on and camera permission granted.
    pub fn camera_enabled(&self) -> bool {
        self.config.import.camera_enabled && self.camera == PermissionStatus::Granted
    }

    /// Returns `true` when the frontend should confirm before deleting.
    pub fn confirm_delete(&self) -> bool {
        self.config.general.confirm_delete
    }

    /// Dispatches a [`Command`] to the matching operation.
    pub async fn handle(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::NavigateInto(entry) => self.navigate_into(&entry).await,
            Command::NavigateUp => self.navigate_up().await,
            Command::Refresh => self.refresh().await,
            Command::CreateFolder(name) => self.create_folder(&name).await,
            Command::CreateFile(name) => self.create_file(&name).await,
            Command::Delete(entry) => self.delete(&entry).await,
            Command::ImportExternal => self.import_external().await,
            Command::Open(entry) => self.open_entry(&entry).await,
            Command::UpdateDraft(content) => self.update_draft(content),
            Command::CommitEdit => self.commit_edit().await,
            Command::CloseSelection => self.close_selection(),
        }
    }

    /// Re-reads the current directory.
    ///
    /// On failure the listing is cleared — stale entries are never shown —
    /// and the current path stays where it was.
    pub async fn refresh(&mut self) -> Option<Event> {
        let path = self.state.current().to_path_buf();
        match ops::list_directory(&path).await {
            Ok(entries) => {
                self.state = self.state.clone().with_entries(entries.clone());
                Some(Event::DirectoryLoaded { path, entries })
            }
            Err(e) => {
                self.state = self.state.clone().with_entries(Vec::new());
                Some(fail("list directory", &e))
            }
        }
    }

    /// Enters the directory `entry` points at and lists it.
    ///
    /// Callers must pass a directory entry; passing a file is a contract
    /// violation, not a runtime error.
    pub async fn navigate_into(&mut self, entry: &Entry) -> Option<Event> {
        self.state = self.state.clone().enter(entry);
        self.refresh().await
    }

    /// Moves to the parent directory and lists it. At the root this is a
    /// no-op: the path does not change and nothing is re-listed.
    pub async fn navigate_up(&mut self) -> Option<Event> {
        if self.state.is_at_root() {
            return None;
        }
        self.state = self.state.clone().up();
        self.refresh().await
    }

    /// Creates a subfolder in the current directory and re-lists it.
    pub async fn create_folder(&mut self, name: &str) -> Option<Event> {
        match ops::create_folder(self.state.current(), name).await {
            Ok(_) => self.refresh().await,
            Err(e) => Some(fail(format!("create folder {name:?}"), &e)),
        }
    }

    /// Creates a text file in the current directory and re-lists it.
    pub async fn create_file(&mut self, name: &str) -> Option<Event> {
        match ops::create_file(self.state.current(), name).await {
            Ok(_) => self.refresh().await,
            Err(e) => Some(fail(format!("create file {name:?}"), &e)),
        }
    }

    /// Deletes the entry and re-lists the current directory.
    pub async fn delete(&mut self, entry: &Entry) -> Option<Event> {
        match ops::delete_entry(entry).await {
            Ok(()) => self.refresh().await,
            Err(e) => Some(fail(format!("delete {:?}", entry.name()), &e)),
        }
    }

    /// Asks the user to pick an image from the photo library and copies it
    /// into the current directory.
    ///
    /// A dismissed picker is a silent no-op: no event, no listing change.
    /// A failed copy is reported like any other failure.
    pub async fn import_external(&mut self) -> Option<Event> {
        let source = match self.picker.pick_image().await {
            PickOutcome::Picked(source) => source,
            PickOutcome::Cancelled => {
                tracing::debug!("image selection cancelled");
                return None;
            }
        };

        match ops::import_file(&source, self.state.current()).await {
            Ok(_) => self.refresh().await,
            Err(e) => Some(fail("import photo", &e)),
        }
    }

    /// Opens a file in the viewer.
    ///
    /// Images open read-only; text files load their content and open with
    /// an editable draft immediately. Anything else — including
    /// directories, which belong to [`Session::navigate_into`] — is
    /// rejected before any state transition, leaving the viewer closed.
    pub async fn open_entry(&mut self, entry: &Entry) -> Option<Event> {
        match entry.kind() {
            Some(FileKind::Image) => {
                self.selection = Selection::Viewing(entry.clone());
                Some(Event::FileOpened {
                    entry: entry.clone(),
                })
            }
            Some(FileKind::Text) => match ops::read_text(entry).await {
                Ok(content) => {
                    self.selection = Selection::Editing {
                        entry: entry.clone(),
                        draft: content,
                    };
                    Some(Event::FileOpened {
                        entry: entry.clone(),
                    })
                }
                Err(e) => Some(fail(format!("open {:?}", entry.name()), &e)),
            },
            Some(FileKind::Other) | None => {
                let error = ExplorerError::UnsupportedType(entry.name().to_string());
                Some(fail(format!("open {:?}", entry.name()), &error))
            }
        }
    }

    /// Replaces the unsaved draft of the open text file. Ignored unless a
    /// text file is open.
    pub fn update_draft(&mut self, content: String) -> Option<Event> {
        match &mut self.selection {
            Selection::Editing { draft, .. } => *draft = content,
            _ => tracing::debug!("draft update with no editable file open"),
        }
        None
    }

    /// Persists the draft, closes the viewer, and re-lists.
    ///
    /// On a failed write the viewer stays open so the draft is not lost.
    /// Returns `None` when no editable file is open.
    pub async fn commit_edit(&mut self) -> Option<Event> {
        let (entry, draft) = match &self.selection {
            Selection::Editing { entry, draft } => (entry.clone(), draft.clone()),
            _ => return None,
        };

        match ops::write_text(entry.path(), &draft).await {
            Ok(()) => {
                self.selection = Selection::Closed;
                self.refresh().await
            }
            Err(e) => Some(fail(format!("update {:?}", entry.name()), &e)),
        }
    }

    /// Closes the viewer, discarding any unsaved draft.
    pub fn close_selection(&mut self) -> Option<Event> {
        self.selection = Selection::Closed;
        None
    }
}

fn fail(operation: impl Into<String>, error: &ExplorerError) -> Event {
    let operation = operation.into();
    tracing::warn!("{operation} failed: {error}");
    Event::OperationFailed {
        operation,
        error: error.to_string(),
    }
}
