//! Navigation logic for PalmFM.
//!
//! This module contains [`state::PathState`], the single source of truth for
//! the directory currently being browsed and its listing.

pub mod state;

pub use state::PathState;
