//! Reading statistics
//!
//! Always derived from the current library contents, never stored.

use std::fmt;

use serde::Serialize;

use super::Library;

/// Summary of read progress across a library
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub read: usize,
    pub unread: usize,

    /// Share of read books in percent, `0.0` for an empty library
    pub read_percentage: f64,
}

impl Statistics {
    /// Computes statistics for `library`
    pub fn compute(library: &Library) -> Self {
        let total = library.len();
        let read = library.iter().filter(|book| book.read).count();
        let read_percentage = if total > 0 {
            100.0 * read as f64 / total as f64
        } else {
            0.0
        };

        Self {
            total,
            read,
            unread: total - read,
            read_percentage,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total books: {}", self.total)?;
        writeln!(f, "Total read: {}", self.read)?;
        writeln!(f, "Total unread: {}", self.unread)?;
        write!(f, "Percentage read: {:.2}%", self.read_percentage)
    }
}
