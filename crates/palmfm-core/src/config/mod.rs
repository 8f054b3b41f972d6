//! Configuration management for PalmFM.
//!
//! User preferences ([`settings::Config`]) are stored as a TOML file and
//! loaded at startup.

pub mod settings;

pub use settings::Config;
