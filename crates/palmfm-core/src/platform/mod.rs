//! Platform capability traits.
//!
//! The core never talks to a concrete photo picker or permission API.
//! Frontends supply implementations of these seams at session start, which
//! keeps the core portable and testable with in-memory doubles.

use std::path::PathBuf;

use async_trait::async_trait;

/// Outcome of asking the user to pick a file from the photo library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user picked the file at the given locator.
    Picked(PathBuf),
    /// The user dismissed the picker without choosing anything.
    Cancelled,
}

/// Presents the platform photo-library picker.
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Asks the user to select an image. Dismissal is an ordinary outcome,
    /// not an error.
    async fn pick_image(&self) -> PickOutcome;
}

/// Result of a camera permission query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Access was granted.
    Granted,
    /// Access was denied.
    Denied,
    /// The user has not answered the prompt yet.
    Pending,
}

/// Queries platform permissions.
///
/// The camera status only gates whether the capture affordance is shown;
/// no other core logic depends on it.
#[async_trait]
pub trait PermissionProbe: Send + Sync {
    /// Returns the current camera permission status.
    async fn camera_permission(&self) -> PermissionStatus;
}
