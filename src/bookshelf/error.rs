use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book not found: {0}")]
    BookNotFound(i64),

    #[error("Not a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("No ids left to assign")]
    IdExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Failures of a single menu action. The menu reports these and keeps
    /// running; storage failures end the session.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ShelfError::BookNotFound(_) | ShelfError::InvalidNumber(_) | ShelfError::IdExhausted
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
