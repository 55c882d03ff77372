use crate::catalog::Catalog;
use crate::error::Result;
use crate::store::DataStore;

/// Writes the whole catalog back to the store.
pub fn persist<S: DataStore>(catalog: &Catalog, store: &mut S) -> Result<()> {
    store.save_books(&catalog.snapshot())
}
