use super::DataStore;
use crate::error::Result;
use crate::model::Book;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Vec<Book>,
    exported: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(books: Vec<Book>) -> Self {
        Self {
            snapshot: books,
            ..Self::default()
        }
    }

    /// What the last save wrote.
    pub fn snapshot(&self) -> &[Book] {
        &self.snapshot
    }

    /// The rendered CSV, if an export happened.
    pub fn exported(&self) -> Option<&str> {
        self.exported.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.snapshot.clone())
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.snapshot = books.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn export_books(&mut self, books: &[Book]) -> Result<PathBuf> {
        self.exported = Some(super::fs::render_csv(books));
        Ok(PathBuf::from("memory.csv"))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Appends a book with the next sequential id.
        pub fn with_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let id = self.store.snapshot.len() as i64;
            self.store
                .snapshot
                .push(Book::new(id, title, author, year));
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Book {}", i + 1);
                let author = format!("Author {}", i + 1);
                self = self.with_book(&title, &author, 2000 + i as i32);
            }
            self
        }
    }
}
