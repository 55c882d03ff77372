use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::persist;

pub fn run<S: DataStore>(catalog: &mut Catalog, store: &mut S, id: BookId) -> Result<CmdResult> {
    let book = catalog.remove(id)?;
    persist(catalog, store)?;
    debug!(id, "book removed");

    let message = CmdMessage::success(format!("Book removed: {}", book.title));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}
