//! Output formatting for CLI commands

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints one line of human-readable output
    pub fn line(&self, message: impl fmt::Display) {
        println!("{}", message);
    }

    /// Prints structured data as JSON
    pub fn data<T: Serialize>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string(data).context("Failed to serialize output")?;
        println!("{}", json);
        Ok(())
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
