//! File system abstractions for PalmFM.
//!
//! This module provides the core types for representing listed entries
//! ([`entry::Entry`], [`entry::FileKind`]) and the async directory and file
//! operations ([`ops`]) built on `tokio::fs`.

pub mod entry;
pub mod ops;

pub use entry::{Entry, FileKind};
