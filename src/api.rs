//! High-level programmatic API for credential lookups.
//!
//! [`Lookup`] wraps a [`Backend`] and exposes the three read operations as
//! data-returning methods. Every call goes to the backend; nothing is cached.

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::auth;
use crate::backend::{self, Backend};
use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::resolve;
use crate::types::{Item, ItemOverview, Vault};

/// A vault together with the outcome of listing its items.
#[derive(Debug, Clone, Serialize)]
pub struct VaultListing {
    #[serde(flatten)]
    pub vault: Vault,
    /// `None` when the items could not be listed; see `error`.
    pub items: Option<Vec<ItemOverview>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Field titles of one item, without values.
#[derive(Debug, Clone, Serialize)]
pub struct ItemFields {
    pub item: String,
    pub fields: Vec<String>,
}

/// One field value read from an item.
#[derive(Debug, Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct FieldValue {
    pub item: String,
    pub field: String,
    pub value: String,
}

pub struct Lookup<B> {
    backend: B,
}

impl Lookup<Box<dyn Backend>> {
    /// Load the token named by `config` and connect to the live backend.
    pub fn connect(config: &Config) -> Result<Self> {
        let token = auth::load_token(&config.token_path)?;
        let client = backend::connect(config, token)?;
        Ok(Self::new(client))
    }
}

impl<B: Backend> Lookup<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Every accessible vault with its items. A vault whose items cannot be
    /// listed is reported with its error instead of failing the whole call.
    pub fn vaults_with_items(&self) -> Result<Vec<VaultListing>> {
        let vaults = self.backend.list_vaults()?;

        let listings = vaults
            .into_iter()
            .map(|vault| match self.backend.list_items(&vault.id) {
                Ok(items) => VaultListing {
                    vault,
                    items: Some(items),
                    error: None,
                },
                Err(e) => {
                    tracing::debug!(vault = %vault.title, error = %e, "could not list items");
                    VaultListing {
                        vault,
                        items: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();

        Ok(listings)
    }

    /// Resolve an item by title, scanning vaults in listing order.
    pub fn item(&self, name: &str) -> Result<Item> {
        resolve::resolve_item(&self.backend, name)
    }

    pub fn field_titles(&self, item_name: &str) -> Result<ItemFields> {
        let item = self.item(item_name)?;
        Ok(ItemFields {
            fields: item.fields.iter().map(|f| f.title.clone()).collect(),
            item: item.title.clone(),
        })
    }

    /// Value of the first field titled `field_name` (ignoring case).
    pub fn field_value(&self, item_name: &str, field_name: &str) -> Result<FieldValue> {
        let item = self.item(item_name)?;
        let field = item
            .field(field_name)
            .ok_or_else(|| LookupError::FieldNotFound {
                field: field_name.to_string(),
                item: item_name.to_string(),
            })?;

        Ok(FieldValue {
            item: item.title.clone(),
            field: field.title.clone(),
            value: field.value.clone(),
        })
    }
}
