//! The in-memory book collection
//!
//! Books are keyed by title. Iteration is in ascending title order so
//! listings and the persisted file are stable between runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Book, SearchField, Statistics};

/// All books in the catalog, keyed by title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: BTreeMap<String, Book>,
}

impl Library {
    /// Creates an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the library holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks up a book by exact title
    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.get(title)
    }

    /// Returns true if a book with this exact title exists
    pub fn contains(&self, title: &str) -> bool {
        self.books.contains_key(title)
    }

    /// Inserts a book under its title, returning the record it replaced
    pub fn insert(&mut self, book: Book) -> Option<Book> {
        self.books.insert(book.title.clone(), book)
    }

    /// Removes the book with this exact title
    pub fn remove(&mut self, title: &str) -> Option<Book> {
        self.books.remove(title)
    }

    /// Iterates over all books
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Returns books whose `field` contains `term`, ignoring case
    pub fn search(&self, field: SearchField, term: &str) -> impl Iterator<Item = &Book> + '_ {
        let term = term.to_string();
        self.iter().filter(move |book| field.matches(book, &term))
    }

    /// Computes read statistics
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(self)
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut library = Library::new();
        for book in iter {
            library.insert(book);
        }
        library
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::collections::btree_map::Values<'a, String, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.values()
    }
}
