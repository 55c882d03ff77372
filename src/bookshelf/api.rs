//! # API Facade
//!
//! The single entry point for bookshelf operations, whatever the UI. It owns
//! the catalog and the store, turns raw user text into typed arguments, and
//! dispatches to [`crate::commands`]. It never writes to stdout or stderr.
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`
//!
//! The catalog is read from the store exactly once, in [`ShelfApi::open`].
//! After that, every read is served from memory and the store only receives
//! writes.

use crate::catalog::{Catalog, SearchField};
use crate::commands;
use crate::error::Result;
use crate::model::{parse_number, BookId};
use crate::store::DataStore;
use tracing::debug;

pub struct ShelfApi<S: DataStore> {
    store: S,
    catalog: Catalog,
}

impl<S: DataStore> ShelfApi<S> {
    /// Loads the catalog from `store`.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load_books()?;
        debug!(count = books.len(), "catalog loaded");
        Ok(Self {
            catalog: Catalog::from_books(books),
            store,
        })
    }

    /// `year` is the text the user typed; it must be an integer.
    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: &str,
    ) -> Result<commands::CmdResult> {
        let year: i32 = parse_number(year)?;
        commands::add::run(&mut self.catalog, &mut self.store, title, author, year)
    }

    pub fn remove_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id: BookId = parse_number(id)?;
        commands::remove::run(&mut self.catalog, &mut self.store, id)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    /// `mode` is the search menu digit; see [`SearchField::from_choice`].
    pub fn search_books(&self, mode: &str, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, SearchField::from_choice(mode), keyword)
    }

    pub fn export(&mut self) -> Result<commands::CmdResult> {
        commands::export::run(&self.catalog, &mut self.store)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
