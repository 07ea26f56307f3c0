//! # Command-Line Interface
//!
//! The interactive menu plus one-shot commands for scripting.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `menu` (default) | Interactive add/remove/search/list/statistics loop |
//! | `add`, `remove` | Change the catalog |
//! | `search`, `list`, `stats` | Query the catalog |
//!
//! ## Output Formats
//!
//! One-shot commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! bookshelf --verbose list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod books;
mod menu;
mod output;

pub use app::{run, Cli, Commands};
pub use menu::{Menu, MenuChoice, ParseMenuChoiceError};
pub use output::{Output, OutputFormat};
