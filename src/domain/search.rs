//! Search field selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Book;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid search option '{0}'. Please search by 'title' or 'author'.")]
pub struct ParseFieldError(pub String);

/// Book attribute a search is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }

    /// Returns the value of this field on `book`
    pub fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }

    /// Case-insensitive substring match of `term` against this field
    pub fn matches(&self, book: &Book, term: &str) -> bool {
        self.value_of(book)
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            _ => Err(ParseFieldError(s.trim().to_string())),
        }
    }
}
