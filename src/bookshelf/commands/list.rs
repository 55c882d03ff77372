use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_books(catalog.snapshot());
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result)
}
