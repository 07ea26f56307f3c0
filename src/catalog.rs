//! Catalog operations
//!
//! Each operation works on a [`Library`] passed in by the caller. Mutating
//! operations persist the full library through the given [`LibraryStorage`]
//! before returning; queries never touch storage.

use crate::domain::{Book, Library, SearchField, Statistics};
use crate::storage::{LibraryStorage, StoreError};

/// Result of [`add_book`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The title was new
    Added,
    /// A book with the same title existed and was replaced
    Replaced(Book),
}

/// Result of [`remove_book`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Book),
    NotFound,
}

/// Adds `book`, silently replacing any book with the same title, then saves
pub fn add_book<S>(library: &mut Library, store: &S, book: Book) -> Result<AddOutcome, StoreError>
where
    S: LibraryStorage + ?Sized,
{
    let outcome = match library.insert(book) {
        Some(previous) => AddOutcome::Replaced(previous),
        None => AddOutcome::Added,
    };
    store.save(library)?;
    Ok(outcome)
}

/// Removes the book titled `title`.
///
/// Storage is only written when a book was actually removed.
pub fn remove_book<S>(
    library: &mut Library,
    store: &S,
    title: &str,
) -> Result<RemoveOutcome, StoreError>
where
    S: LibraryStorage + ?Sized,
{
    match library.remove(title) {
        Some(book) => {
            store.save(library)?;
            Ok(RemoveOutcome::Removed(book))
        }
        None => Ok(RemoveOutcome::NotFound),
    }
}

/// Returns books whose `field` contains `term`, ignoring case
pub fn search_books<'a>(library: &'a Library, field: SearchField, term: &str) -> Vec<&'a Book> {
    library.search(field, term).collect()
}

/// Returns every book in iteration order
pub fn list_books(library: &Library) -> Vec<&Book> {
    library.iter().collect()
}

/// Computes fresh statistics for `library`
pub fn statistics(library: &Library) -> Statistics {
    library.statistics()
}
