//! One-shot book commands
//!
//! Each command runs a single catalog operation against the loaded library
//! and exits. The interactive menu in [`super::menu`] drives the same
//! operations.

use anyhow::{bail, Result};

use super::output::Output;
use crate::catalog::{self, AddOutcome, RemoveOutcome};
use crate::domain::{Book, Library, SearchField};
use crate::storage::LibraryStorage;

/// Fields for a new book as given on the command line
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    /// Rejects blank fields before the book reaches the catalog
    fn into_book(self) -> Result<Book> {
        for (name, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("year", &self.year),
            ("genre", &self.genre),
        ] {
            if value.trim().is_empty() {
                bail!("The {} must not be empty", name);
            }
        }

        Ok(Book::new(self.title, self.author, self.year, self.genre, self.read))
    }
}

pub fn add(
    output: &Output,
    library: &mut Library,
    store: &dyn LibraryStorage,
    new_book: NewBook,
) -> Result<()> {
    let book = new_book.into_book()?;
    let title = book.title.clone();

    let outcome = catalog::add_book(library, store, book)?;
    let replaced = matches!(outcome, AddOutcome::Replaced(_));
    if replaced {
        output.verbose_ctx("add", &format!("Replaced existing record for '{}'", title));
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": title,
            "replaced": replaced,
            "total": library.len(),
        }))?;
    } else {
        output.line(format_args!("Book {} has been added to the library.", title));
    }

    Ok(())
}

pub fn remove(
    output: &Output,
    library: &mut Library,
    store: &dyn LibraryStorage,
    title: &str,
) -> Result<()> {
    let removed = match catalog::remove_book(library, store, title)? {
        RemoveOutcome::Removed(_) => true,
        RemoveOutcome::NotFound => {
            output.verbose_ctx("remove", "No matching title, library left untouched");
            false
        }
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": title,
            "removed": removed,
        }))?;
    } else if removed {
        output.line(format_args!("Book {} has been removed from the library.", title));
    } else {
        output.line(format_args!("Book {} was not found in the library.", title));
    }

    Ok(())
}

pub fn search(output: &Output, library: &Library, field: SearchField, term: &str) -> Result<()> {
    let results = catalog::search_books(library, field, term);
    output.verbose_ctx("search", &format!("Found {} results", results.len()));

    if output.is_json() {
        output.data(&results)?;
    } else if results.is_empty() {
        output.line(format_args!(
            "No books found for \"{}\" in the {} field.",
            term.to_lowercase(),
            field
        ));
    } else {
        for book in results {
            output.line(book);
        }
    }

    Ok(())
}

pub fn list(output: &Output, library: &Library) -> Result<()> {
    let books = catalog::list_books(library);

    if output.is_json() {
        output.data(&books)?;
    } else if books.is_empty() {
        output.line("Library is empty");
    } else {
        for book in books {
            output.line(book);
        }
    }

    Ok(())
}

pub fn stats(output: &Output, library: &Library) -> Result<()> {
    let stats = catalog::statistics(library);

    if output.is_json() {
        output.data(&stats)?;
    } else {
        output.line(stats);
    }

    Ok(())
}
