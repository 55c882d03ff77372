//! # Catalog
//!
//! The in-memory collection of books, keyed by id. It is loaded once at
//! startup and is the only place the running program reads books from; the
//! snapshot on disk is written after changes but never read back.
//!
//! Ids are assigned as one past the largest id present (zero for an empty
//! catalog), so iteration order by id is also insertion order. Removal looks
//! the id up as a key: removing a book never changes the ids of the others.

use crate::error::{Result, ShelfError};
use crate::model::{parse_number, Book, BookId};
use std::collections::btree_map::{BTreeMap, Values};
use tracing::debug;

/// Which attribute a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Exact id match
    Id,
    /// Case-insensitive title prefix
    Title,
    /// Case-insensitive author prefix
    Author,
    /// Exact year match
    Year,
    /// No filter
    All,
}

impl SearchField {
    /// Maps the search menu digit to a field. Anything unrecognized searches
    /// nothing in particular and matches every book.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => SearchField::Id,
            "2" => SearchField::Title,
            "3" => SearchField::Author,
            "4" => SearchField::Year,
            _ => SearchField::All,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: BTreeMap<BookId, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a loaded snapshot. On a repeated id the later
    /// record wins.
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut catalog = Self::new();
        for book in books {
            if let Some(previous) = catalog.insert(book) {
                debug!(
                    id = previous.id,
                    title = %previous.title,
                    "duplicate id in snapshot, keeping the later record"
                );
            }
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn next_id(&self) -> Result<BookId> {
        match self.books.last_key_value() {
            None => Ok(0),
            Some((&last, _)) => last.checked_add(1).ok_or(ShelfError::IdExhausted),
        }
    }

    /// Adds a new book under the next free id.
    pub fn add(&mut self, title: String, author: String, year: i32) -> Result<&Book> {
        let id = self.next_id()?;
        Ok(self
            .books
            .entry(id)
            .or_insert_with(|| Book::new(id, title, author, year)))
    }

    /// Inserts a complete record, returning any record it replaced.
    pub fn insert(&mut self, book: Book) -> Option<Book> {
        self.books.insert(book.id, book)
    }

    pub fn remove(&mut self, id: BookId) -> Result<Book> {
        self.books.remove(&id).ok_or(ShelfError::BookNotFound(id))
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    /// Every book, by id.
    pub fn get_all(&self) -> Values<'_, BookId, Book> {
        self.books.values()
    }

    /// Owned copy of every book, by id, for persisting.
    pub fn snapshot(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// Books matching `keyword` on `field`, in catalog order.
    ///
    /// Id and year searches need an integer keyword and fail with
    /// [`ShelfError::InvalidNumber`] otherwise.
    pub fn search(&self, field: SearchField, keyword: &str) -> Result<Vec<Book>> {
        let matches: Vec<Book> = match field {
            SearchField::Id => {
                let id: BookId = parse_number(keyword)?;
                self.get(id).cloned().into_iter().collect()
            }
            SearchField::Year => {
                let year: i32 = parse_number(keyword)?;
                self.filter(|b| b.year == year)
            }
            SearchField::Title => self.filter(|b| starts_with_ignore_case(&b.title, keyword)),
            SearchField::Author => self.filter(|b| starts_with_ignore_case(&b.author, keyword)),
            SearchField::All => self.snapshot(),
        };
        Ok(matches)
    }

    fn filter<F: Fn(&Book) -> bool>(&self, predicate: F) -> Vec<Book> {
        self.books
            .values()
            .filter(|b| predicate(*b))
            .cloned()
            .collect()
    }
}

/// Prefix match that folds case one character at a time, so a letter's
/// match never depends on its neighbours (e.g. Greek final sigma).
fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars();
    prefix.chars().all(|p| {
        text.next()
            .is_some_and(|t| t == p || t.to_lowercase().eq(p.to_lowercase()))
    })
}
