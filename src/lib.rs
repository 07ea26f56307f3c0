//! Bookshelf - a personal book catalog for the terminal
//!
//! Books are kept in a title-keyed [`Library`] that is loaded from a JSON
//! file at startup and written back after every change. The [`catalog`]
//! operations take the library and its store explicitly; the [`cli`]
//! module wraps them in an interactive menu and one-shot commands.

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Book, Library, SearchField, Statistics};
pub use storage::{JsonStore, LibraryStorage, StoreError};
