//! JSON file storage for the library
//!
//! The whole library lives in one file as a JSON object keyed by title.
//! Every save rewrites the file completely.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::Library;

use super::{LibraryStorage, StoreError};

/// File name used when no other location is configured
pub const DEFAULT_FILE_NAME: &str = "library.text";

/// Store for the library in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a new store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl LibraryStorage for JsonStore {
    fn load(&self) -> Result<Library, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Library::new()),
            Err(e) => return Err(StoreError::io("read", &self.path, e)),
        };

        // A freshly created, still empty file holds no books yet
        if content.trim().is_empty() {
            return Ok(Library::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, library: &Library) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::io("create directory for", &self.path, e))?;
        }

        let content = serde_json::to_string_pretty(library).map_err(StoreError::Serialize)?;

        // Write to temp file first, then swap it in
        let temp_path = self.temp_path();
        let result = write_file(&temp_path, &content)
            .map_err(|e| StoreError::io("write", &temp_path, e))
            .and_then(|()| {
                fs::rename(&temp_path, &self.path)
                    .map_err(|e| StoreError::io("replace", &self.path, e))
            });

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", content)?;
    writer.flush()
}
