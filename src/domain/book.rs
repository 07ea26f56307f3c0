//! Book domain model
//!
//! A book is one catalog entry. The title doubles as its key in the
//! [`Library`](super::Library).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived reading status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    Read,
    Unread,
}

impl ReadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadStatus::Read => "read",
            ReadStatus::Unread => "unread",
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,

    /// Publication year, kept verbatim as entered
    pub year: String,

    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    /// Creates a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Returns the read/unread label derived from the `read` flag
    pub fn status(&self) -> ReadStatus {
        if self.read {
            ReadStatus::Read
        } else {
            ReadStatus::Unread
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} - {} - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status()
        )
    }
}
