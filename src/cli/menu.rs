//! Interactive menu
//!
//! Reads one numbered choice at a time and runs the matching catalog
//! operation until the user exits or input ends. On a terminal, answers
//! are read with `dialoguer`; otherwise lines come from the generic reader,
//! so piped input and tests can script a session.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use dialoguer::Input;
use thiserror::Error;

use super::output::Output;
use crate::catalog::{self, RemoveOutcome};
use crate::domain::{Book, Library, SearchField};
use crate::storage::LibraryStorage;

const MENU: &str = "Welcome to the library system.
    1. Add a new book
    2. Remove a book
    3. Search the library
    4. Display all books
    5. View statistics
    6. Exit";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid choice '{0}'")]
pub struct ParseMenuChoiceError(pub String);

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    List,
    Statistics,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ParseMenuChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Remove),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::List),
            "5" => Ok(MenuChoice::Statistics),
            "6" => Ok(MenuChoice::Exit),
            other => Err(ParseMenuChoiceError(other.to_string())),
        }
    }
}

/// An interactive session over one library
pub struct Menu<'a, R, W, S: ?Sized> {
    input: R,
    out: W,
    library: &'a mut Library,
    store: &'a S,
    output: &'a Output,
    interactive: bool,
}

impl<'a, R, W, S> Menu<'a, R, W, S>
where
    R: BufRead,
    W: Write,
    S: LibraryStorage + ?Sized,
{
    pub fn new(
        input: R,
        out: W,
        library: &'a mut Library,
        store: &'a S,
        output: &'a Output,
    ) -> Self {
        Self {
            input,
            out,
            library,
            store,
            output,
            interactive: false,
        }
    }

    /// Reads answers through terminal prompts instead of the reader
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Runs the loop until the user picks Exit or input ends.
    ///
    /// Mutations are persisted as they happen, so nothing is written on exit.
    pub fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                self.output.verbose_ctx("menu", "Input closed, leaving menu");
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    self.output.verbose_ctx("menu", &e.to_string());
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            let keep_going = match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::Remove => self.remove()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Statistics => self.statistics()?,
                MenuChoice::Exit => false,
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Asks `message` and returns the answer, `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.ask(message, false)
    }

    /// Like [`Self::prompt`], asking again until the answer is not blank
    fn prompt_required(&mut self, message: &str) -> Result<Option<String>> {
        self.ask(message, true)
    }

    fn ask(&mut self, message: &str, required: bool) -> Result<Option<String>> {
        if self.interactive {
            return self.ask_terminal(message, required);
        }

        loop {
            write!(self.out, "{}", message)?;
            self.out.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                writeln!(self.out)?;
                return Ok(None);
            }

            let value = line.trim_end_matches(['\r', '\n']).to_string();
            if required && value.trim().is_empty() {
                writeln!(self.out, "This field cannot be empty.")?;
                continue;
            }
            return Ok(Some(value));
        }
    }

    fn ask_terminal(&mut self, message: &str, required: bool) -> Result<Option<String>> {
        // Menu text goes to `out`; make sure it is visible before dialoguer draws
        self.out.flush()?;

        let mut input = Input::<String>::new()
            .with_prompt(message.trim_end().trim_end_matches(':'))
            .allow_empty(!required);
        if required {
            input = input.validate_with(|value: &String| -> Result<(), &str> {
                if value.trim().is_empty() {
                    Err("This field cannot be empty.")
                } else {
                    Ok(())
                }
            });
        }

        match input.interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }

    fn add(&mut self) -> Result<bool> {
        let Some(title) = self.prompt_required("Enter the title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.prompt_required("Enter the author: ")? else {
            return Ok(false);
        };
        let Some(year) = self.prompt_required("Enter the year: ")? else {
            return Ok(false);
        };
        let Some(genre) = self.prompt_required("Enter the genre: ")? else {
            return Ok(false);
        };
        let Some(answer) = self.prompt("Have you read the book? (yes/no): ")? else {
            return Ok(false);
        };
        let read = answer.trim().eq_ignore_ascii_case("yes");

        let book = Book::new(title.clone(), author, year, genre, read);
        let outcome = catalog::add_book(self.library, self.store, book)?;
        self.output
            .verbose_ctx("add", &format!("{:?} '{}'", outcome, title));

        writeln!(self.out, "Book {} has been added to the library.", title)?;
        Ok(true)
    }

    fn remove(&mut self) -> Result<bool> {
        let Some(title) = self.prompt("Enter the title of the book you want to remove: ")? else {
            return Ok(false);
        };

        match catalog::remove_book(self.library, self.store, &title)? {
            RemoveOutcome::Removed(_) => {
                writeln!(self.out, "Book {} has been removed from the library.", title)?
            }
            RemoveOutcome::NotFound => {
                writeln!(self.out, "Book {} was not found in the library.", title)?
            }
        }
        Ok(true)
    }

    fn search(&mut self) -> Result<bool> {
        let Some(selector) = self.prompt("Search by title or author: ")? else {
            return Ok(false);
        };

        let field = match selector.parse::<SearchField>() {
            Ok(field) => field,
            Err(e) => {
                self.output.verbose_ctx("search", &e.to_string());
                writeln!(
                    self.out,
                    "Invalid search option. Please search by 'title' or 'author'."
                )?;
                return Ok(true);
            }
        };

        let Some(term) = self.prompt(&format!("Enter the {}: ", field))? else {
            return Ok(false);
        };

        let results = catalog::search_books(self.library, field, &term);
        if results.is_empty() {
            writeln!(
                self.out,
                "No books found for \"{}\" in the {} field.",
                term.to_lowercase(),
                field
            )?;
        } else {
            for book in results {
                writeln!(self.out, "{}", book)?;
            }
        }
        Ok(true)
    }

    fn list(&mut self) -> Result<bool> {
        let books = catalog::list_books(self.library);
        if books.is_empty() {
            writeln!(self.out, "Library is empty")?;
        } else {
            for book in books {
                writeln!(self.out, "{}", book)?;
            }
        }
        Ok(true)
    }

    fn statistics(&mut self) -> Result<bool> {
        writeln!(self.out, "{}", catalog::statistics(self.library))?;
        Ok(true)
    }
}
