use crate::backend::Backend;
use crate::error::{LookupError, Result};
use crate::types::{titles_match, Item};

/// Find the first item titled `name` (ignoring case) and fetch its fields.
///
/// Vaults are scanned in listing order, items in listing order within each
/// vault; the first match wins and nothing after it is listed. A vault whose
/// items cannot be listed is skipped. Failure to list the vaults themselves
/// is an error.
pub fn resolve_item<B: Backend + ?Sized>(backend: &B, name: &str) -> Result<Item> {
    let vaults = backend.list_vaults()?;

    for vault in &vaults {
        let items = match backend.list_items(&vault.id) {
            Ok(items) => items,
            Err(e) => {
                tracing::debug!(vault = %vault.title, error = %e, "skipping unreadable vault");
                continue;
            }
        };

        if let Some(overview) = items.iter().find(|i| titles_match(&i.title, name)) {
            tracing::debug!(vault = %vault.id, item = %overview.id, "resolved item");
            return backend.get_item(&vault.id, &overview.id);
        }
    }

    Err(LookupError::ItemNotFound(name.to_string()))
}
