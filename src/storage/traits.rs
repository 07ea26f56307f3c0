//! Storage interface for the library
//!
//! Catalog operations depend on [`LibraryStorage`] rather than a concrete
//! file store, so the persistence boundary can be swapped in tests.

use crate::domain::Library;

use super::StoreError;

/// Whole-library persistence.
///
/// Implementations never merge: `save` replaces everything previously
/// stored with the given library.
pub trait LibraryStorage {
    /// Loads the stored library.
    ///
    /// Returns an empty library when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if stored data exists but cannot be
    /// parsed, or [`StoreError::Io`] if it cannot be read.
    fn load(&self) -> Result<Library, StoreError>;

    /// Replaces the stored library with `library`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the write fails.
    fn save(&self, library: &Library) -> Result<(), StoreError>;
}
