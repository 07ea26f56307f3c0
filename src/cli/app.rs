//! Main CLI application structure

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::books::{self, NewBook};
use super::menu::Menu;
use super::output::{Output, OutputFormat};
use crate::domain::SearchField;
use crate::storage::{Config, JsonStore, LibraryStorage};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about = "A personal book catalog for the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Library data file
    #[arg(long, global = true, env = "BOOKSHELF_FILE")]
    pub file: Option<PathBuf>,

    /// Output format for one-shot commands
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu
    Menu,

    /// Add a book, replacing any book with the same title
    Add {
        /// Book title
        title: String,

        /// Author name
        #[arg(long, short)]
        author: String,

        /// Publication year
        #[arg(long, short)]
        year: String,

        /// Genre
        #[arg(long, short)]
        genre: String,

        /// Mark the book as read
        #[arg(long, short)]
        read: bool,
    },

    /// Remove a book by exact title
    Remove {
        /// Book title
        title: String,
    },

    /// Search books by title or author (case-insensitive)
    Search {
        /// Field to search: title or author
        field: SearchField,

        /// Text to look for
        term: String,
    },

    /// List all books
    List,

    /// Show reading statistics
    Stats,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let output = Output::new(config.format(cli.format), cli.verbose);

    output.verbose("Bookshelf starting");
    if let Some(source) = &config.source {
        output.verbose_ctx("config", &format!("Loaded config from: {}", source.display()));
    }

    let store = JsonStore::new(config.data_file(cli.file.as_deref()));
    output.verbose_ctx("store", &format!("Using library file: {}", store.path().display()));

    let mut library = store
        .load()
        .with_context(|| format!("Failed to load library from {}", store.path().display()))?;
    output.verbose_ctx("store", &format!("Loaded {} books", library.len()));

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal() && io::stdout().is_terminal();
            output.verbose_ctx("menu", &format!("Terminal prompts: {}", interactive));
            Menu::new(stdin.lock(), io::stdout(), &mut library, &store, &output)
                .interactive(interactive)
                .run()?
        }

        Commands::Add { title, author, year, genre, read } => books::add(
            &output,
            &mut library,
            &store,
            NewBook { title, author, year, genre, read },
        )?,

        Commands::Remove { title } => books::remove(&output, &mut library, &store, &title)?,

        Commands::Search { field, term } => {
            output.verbose_ctx("search", &format!("Searching {} for: {}", field, term));
            books::search(&output, &library, field, &term)?
        }

        Commands::List => books::list(&output, &library)?,
        Commands::Stats => books::stats(&output, &library)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
