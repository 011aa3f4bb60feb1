//! Shared types, error model, and settings for docnav.
//!
//! This crate is the foundation depended on by all other docnav crates.
//! It provides:
//! - [`DocNavError`]: the unified error type
//! - Domain types ([`NavLayout`], [`Document`], [`NavOutline`])
//! - Settings ([`Settings`], settings loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    SETTINGS_FILE_NAME, Settings, init_settings, load_settings, load_settings_from, resolve,
};
pub use error::{DocNavError, Result};
pub use types::{Document, NavEntry, NavLayout, NavOutline, NavSection, PageSpec, SectionSpec};
