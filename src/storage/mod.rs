//! # Storage Layer
//!
//! Persistence for the book catalog.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Library | JSON object keyed by title | `library.text` (configurable) |
//! | Config | TOML | `~/.config/bookshelf/config.toml` |
//!
//! Saves always rewrite the whole library (temp file + rename).
//!
//! ## Key Types
//!
//! - [`LibraryStorage`] - Load/save interface used by catalog operations
//! - [`JsonStore`] - File-backed [`LibraryStorage`]
//! - [`Config`] - User configuration

mod config;
mod error;
mod json;
mod traits;

pub use config::{Config, ConfigError, GlobalConfig};
pub use error::StoreError;
pub use json::{JsonStore, DEFAULT_FILE_NAME};
pub use traits::LibraryStorage;
