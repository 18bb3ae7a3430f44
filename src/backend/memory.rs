//! In-memory [`Backend`] holding a fixed, ordered set of vaults.
//!
//! Vaults and items are returned in insertion order. Individual vaults can be
//! marked unreadable, single item fetches and the vault listing itself can be
//! made to fail, so callers can exercise partial-access behavior without a
//! live account.

use std::cell::RefCell;

use super::Backend;
use crate::error::{LookupError, Result};
use crate::types::{Field, Item, ItemOverview, Vault};

#[derive(Debug, Clone)]
struct MemoryVault {
    vault: Vault,
    contents: std::result::Result<Vec<Item>, String>,
    overviews: Vec<ItemOverview>,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    vaults: Vec<MemoryVault>,
    vault_listing_error: Option<String>,
    item_fetch_errors: Vec<(String, String)>,
    calls: RefCell<Vec<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a readable vault whose items are listed in the given order.
    pub fn with_vault(mut self, vault: Vault, items: Vec<(ItemOverview, Vec<Field>)>) -> Self {
        let mut overviews = Vec::with_capacity(items.len());
        let mut full = Vec::with_capacity(items.len());
        for (overview, fields) in items {
            full.push(Item {
                id: overview.id.clone(),
                title: overview.title.clone(),
                category: overview.category.clone(),
                fields,
            });
            overviews.push(overview);
        }
        self.vaults.push(MemoryVault {
            vault,
            contents: Ok(full),
            overviews,
        });
        self
    }

    /// Append a vault that shows up in listings but whose items cannot be read.
    pub fn with_unreadable_vault(mut self, vault: Vault, message: impl Into<String>) -> Self {
        self.vaults.push(MemoryVault {
            vault,
            contents: Err(message.into()),
            overviews: Vec::new(),
        });
        self
    }

    /// Make `list_vaults` fail with `message`.
    pub fn with_vault_listing_error(mut self, message: impl Into<String>) -> Self {
        self.vault_listing_error = Some(message.into());
        self
    }

    /// Make `get_item` fail with `message` for the item with id `item_id`.
    /// The item still appears in its vault's listing.
    pub fn with_item_fetch_error(
        mut self,
        item_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.item_fetch_errors.push((item_id.into(), message.into()));
        self
    }

    /// Calls made so far, e.g. `list_items(v1)`, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn find_vault(&self, vault_id: &str) -> Result<&MemoryVault> {
        self.vaults
            .iter()
            .find(|v| v.vault.id == vault_id)
            .ok_or_else(|| LookupError::Backend(format!("vault {} does not exist", vault_id)))
    }
}

impl Backend for MemoryBackend {
    fn list_vaults(&self) -> Result<Vec<Vault>> {
        self.record("list_vaults".to_string());
        if let Some(ref msg) = self.vault_listing_error {
            return Err(LookupError::Backend(format!("failed to list vaults: {}", msg)));
        }
        Ok(self.vaults.iter().map(|v| v.vault.clone()).collect())
    }

    fn list_items(&self, vault_id: &str) -> Result<Vec<ItemOverview>> {
        self.record(format!("list_items({})", vault_id));
        let vault = self.find_vault(vault_id)?;
        match vault.contents {
            Ok(_) => Ok(vault.overviews.clone()),
            Err(ref msg) => Err(LookupError::Backend(format!("failed to list items: {}", msg))),
        }
    }

    fn get_item(&self, vault_id: &str, item_id: &str) -> Result<Item> {
        self.record(format!("get_item({}, {})", vault_id, item_id));
        if let Some((_, msg)) = self.item_fetch_errors.iter().find(|(id, _)| id == item_id) {
            return Err(LookupError::Backend(format!(
                "failed to get item details: {}",
                msg
            )));
        }
        let vault = self.find_vault(vault_id)?;
        let items = vault
            .contents
            .as_ref()
            .map_err(|msg| LookupError::Backend(format!("failed to get item details: {}", msg)))?;
        items
            .iter()
            .find(|i| i.id == item_id)
            .cloned()
            .ok_or_else(|| {
                LookupError::Backend(format!(
                    "failed to get item details: item {} does not exist in vault {}",
                    item_id, vault_id
                ))
            })
    }
}
