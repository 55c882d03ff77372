use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &Catalog, store: &mut S) -> Result<CmdResult> {
    let path = store.export_books(&catalog.snapshot())?;
    let noun = if catalog.len() == 1 { "book" } else { "books" };
    let message = CmdMessage::success(format!(
        "Exported {} {} to {}",
        catalog.len(),
        noun,
        path.display()
    ));
    Ok(CmdResult::default()
        .with_export_path(path)
        .with_message(message))
}
