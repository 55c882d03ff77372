use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::persist;

pub fn run<S: DataStore>(
    catalog: &mut Catalog,
    store: &mut S,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdResult> {
    let book = catalog.add(title, author, year)?.clone();
    persist(catalog, store)?;
    debug!(id = book.id, "book added");

    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(CmdMessage::success("Book added!")))
}
