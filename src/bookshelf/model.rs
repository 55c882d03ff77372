use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type BookId = i64;

/// One catalog entry.
///
/// Keys are written in PascalCase so snapshots from older versions of the
/// tool keep loading; lowercase keys are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    #[serde(alias = "id")]
    pub id: BookId,
    #[serde(alias = "title")]
    pub title: String,
    #[serde(alias = "author")]
    pub author: String,
    #[serde(alias = "year")]
    pub year: i32,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({}, {})", self.id, self.title, self.author, self.year)
    }
}

/// Parses user-typed integers. Surrounding whitespace and a leading sign are
/// allowed.
pub fn parse_number<T: FromStr>(input: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| ShelfError::InvalidNumber(input.to_string()))
}
