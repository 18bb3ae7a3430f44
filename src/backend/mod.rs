//! Access to the secrets backend.
//!
//! [`Backend`] is the read-only capability set the lookups need: list
//! vaults, list the items of one vault, and fetch one item with its fields.
//! [`connect`] builds the production implementation on top of the `op` CLI;
//! [`memory::MemoryBackend`] is an in-process stand-in.

pub mod memory;
pub mod op_cli;

use secrecy::SecretString;

use crate::config::Config;
use crate::error::Result;
use crate::types::{Item, ItemOverview, Vault};

/// Read operations against a secrets backend.
///
/// Listing order is significant: callers scan vaults and items in the order
/// returned here and take the first match.
pub trait Backend {
    fn list_vaults(&self) -> Result<Vec<Vault>>;

    /// Items in one vault. May fail for a single vault (e.g. access denied)
    /// while other vaults remain readable.
    fn list_items(&self, vault_id: &str) -> Result<Vec<ItemOverview>>;

    fn get_item(&self, vault_id: &str, item_id: &str) -> Result<Item>;
}

impl<T: Backend + ?Sized> Backend for &T {
    fn list_vaults(&self) -> Result<Vec<Vault>> {
        (**self).list_vaults()
    }

    fn list_items(&self, vault_id: &str) -> Result<Vec<ItemOverview>> {
        (**self).list_items(vault_id)
    }

    fn get_item(&self, vault_id: &str, item_id: &str) -> Result<Item> {
        (**self).get_item(vault_id, item_id)
    }
}

impl<T: Backend + ?Sized> Backend for Box<T> {
    fn list_vaults(&self) -> Result<Vec<Vault>> {
        (**self).list_vaults()
    }

    fn list_items(&self, vault_id: &str) -> Result<Vec<ItemOverview>> {
        (**self).list_items(vault_id)
    }

    fn get_item(&self, vault_id: &str, item_id: &str) -> Result<Item> {
        (**self).get_item(vault_id, item_id)
    }
}

/// Build an authenticated client for the configured backend.
///
/// Fails with [`crate::error::LookupError::Auth`] when the token is rejected
/// or the backend cannot be reached.
pub fn connect(config: &Config, token: SecretString) -> Result<Box<dyn Backend>> {
    let client = op_cli::OpCliBackend::connect(config, token)?;
    Ok(Box::new(client))
}
