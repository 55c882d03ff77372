//! # Storage Layer
//!
//! The catalog lives in memory; storage is only a durability sink. The
//! [`DataStore`] trait is the seam between the two so commands can be tested
//! without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - Snapshot of every book in `books.json` (JSON array, rewritten whole)
//!   - One-shot CSV export in `books.csv`
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! The free functions in [`fs`] (`save_json`, `load_json`, `save_csv`) hold
//! no state between calls; `FileStore` only remembers which paths to use.
//!
//! ## Snapshot Format
//!
//! ```text
//! [
//!   {
//!     "Id": 0,
//!     "Title": "Мастер и Маргарита",
//!     "Author": "Михаил Булгаков",
//!     "Year": 1967
//!   }
//! ]
//! ```
//!
//! Basic Latin and Cyrillic text is written as-is; anything else is escaped
//! as `\uXXXX`.

use crate::error::Result;
use crate::model::Book;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for book persistence.
pub trait DataStore {
    /// Load the last saved snapshot. A missing or unreadable snapshot is an
    /// empty catalog, not an error.
    fn load_books(&self) -> Result<Vec<Book>>;

    /// Replace the snapshot with `books`.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;

    /// Write the CSV export and return where it went.
    fn export_books(&mut self, books: &[Book]) -> Result<PathBuf>;
}
