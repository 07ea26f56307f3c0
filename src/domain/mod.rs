//! Domain models for the book catalog
//!
//! Contains the catalog data types and queries without any I/O concerns.

mod book;
mod library;
mod search;
mod stats;

pub use book::{Book, ReadStatus};
pub use library::Library;
pub use search::{ParseFieldError, SearchField};
pub use stats::Statistics;
