//! Backend driven by the 1Password CLI (`op`) in service account mode.
//!
//! The token reaches each child process through `OP_SERVICE_ACCOUNT_TOKEN`
//! and never appears on a command line. Inherited variables that select a
//! Connect server or a signed-in account are removed from the child. Every call is a blocking `op`
//! invocation with `--format json` output.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::{Config, IntegrationInfo};
use crate::error::{LookupError, Result};
use crate::types::{Field, Item, ItemOverview, Vault};

const SERVICE_ACCOUNT_TOKEN_ENV: &str = "OP_SERVICE_ACCOUNT_TOKEN";
const INTEGRATION_NAME_ENV: &str = "OP_INTEGRATION_NAME";
const INTEGRATION_VERSION_ENV: &str = "OP_INTEGRATION_VERSION";

/// Inherited variables that would point `op` at another account or a
/// Connect server instead of the service account.
const OVERRIDING_ENV: &[&str] = &["OP_CONNECT_HOST", "OP_CONNECT_TOKEN", "OP_ACCOUNT"];
const SESSION_ENV_PREFIX: &str = "OP_SESSION_";

/// Failure of a single `op` invocation, before it is classified.
#[derive(Debug, thiserror::Error)]
enum OpCliError {
    #[error("could not run {0}: {1}")]
    Spawn(String, std::io::Error),

    #[error("{0}")]
    CommandFailed(String),

    #[error("failed to parse op output: {0}")]
    Parse(String),
}

/// Client that shells out to the `op` binary for every call.
pub struct OpCliBackend {
    op_binary: PathBuf,
    token: SecretString,
    integration: IntegrationInfo,
}

impl std::fmt::Debug for OpCliBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpCliBackend")
            .field("op_binary", &self.op_binary)
            .field("integration", &self.integration)
            .finish_non_exhaustive()
    }
}

impl OpCliBackend {
    /// Check that `op` runs and that the token is accepted.
    pub fn connect(config: &Config, token: SecretString) -> Result<Self> {
        // An empty OP_SERVICE_ACCOUNT_TOKEN makes `op` fall back to a signed-in user.
        if token.expose_secret().is_empty() {
            return Err(LookupError::Auth(format!(
                "service account token in {} is empty",
                config.token_path.display()
            )));
        }

        let client = Self {
            op_binary: config.op_binary.clone(),
            token,
            integration: config.integration.clone(),
        };

        client.run(&["--version"]).map_err(|e| {
            LookupError::Auth(format!("1Password CLI is not available: {}", e))
        })?;

        client
            .run(&["whoami", "--format", "json"])
            .map_err(|e| LookupError::Auth(format!("failed to create client: {}", e)))?;

        tracing::debug!(
            integration = %client.integration.name,
            version = %client.integration.version,
            "authenticated service account"
        );
        Ok(client)
    }

    fn run(&self, args: &[&str]) -> std::result::Result<Vec<u8>, OpCliError> {
        tracing::debug!(args = ?args, "running op");
        let mut cmd = Command::new(&self.op_binary);
        for key in OVERRIDING_ENV {
            cmd.env_remove(key);
        }
        for (key, _) in std::env::vars_os() {
            if key
                .to_str()
                .map_or(false, |k| k.starts_with(SESSION_ENV_PREFIX))
            {
                cmd.env_remove(&key);
            }
        }

        let output = cmd
            .args(args)
            .env(SERVICE_ACCOUNT_TOKEN_ENV, self.token.expose_secret())
            .env(INTEGRATION_NAME_ENV, &self.integration.name)
            .env(INTEGRATION_VERSION_ENV, &self.integration.version)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| OpCliError::Spawn(self.op_binary.display().to_string(), e))?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let msg = stderr
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| match output.status.code() {
                Some(code) => format!("op exited with status {}", code),
                None => "op terminated by signal".to_string(),
            });
        Err(OpCliError::CommandFailed(msg))
    }

    fn run_json<T: for<'de> Deserialize<'de>>(
        &self,
        args: &[&str],
    ) -> std::result::Result<T, OpCliError> {
        let stdout = self.run(args)?;
        serde_json::from_slice(&stdout).map_err(|e| OpCliError::Parse(e.to_string()))
    }
}

impl super::Backend for OpCliBackend {
    fn list_vaults(&self) -> Result<Vec<Vault>> {
        let raw: Vec<CliVault> = self
            .run_json(&["vault", "list", "--format", "json"])
            .map_err(|e| LookupError::Backend(format!("failed to list vaults: {}", e)))?;
        Ok(raw.into_iter().map(Into::into).collect())
    }

    fn list_items(&self, vault_id: &str) -> Result<Vec<ItemOverview>> {
        let raw: Vec<CliItemOverview> = self
            .run_json(&["item", "list", "--vault", vault_id, "--format", "json"])
            .map_err(|e| LookupError::Backend(format!("failed to list items: {}", e)))?;
        Ok(raw.into_iter().map(Into::into).collect())
    }

    fn get_item(&self, vault_id: &str, item_id: &str) -> Result<Item> {
        let raw: CliItem = self
            .run_json(&["item", "get", item_id, "--vault", vault_id, "--format", "json"])
            .map_err(|e| LookupError::Backend(format!("failed to get item details: {}", e)))?;
        Ok(raw.into())
    }
}

// ---------------------------------------------------------------------------
// op JSON shapes
// ---------------------------------------------------------------------------

/// Vault as returned by `op vault list --format json`.
#[derive(Debug, Deserialize)]
struct CliVault {
    id: String,
    #[serde(default)]
    name: String,
}

impl From<CliVault> for Vault {
    fn from(v: CliVault) -> Self {
        Vault {
            id: v.id,
            title: v.name,
        }
    }
}

/// Item as returned by `op item list --format json`.
#[derive(Debug, Deserialize)]
struct CliItemOverview {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<CliItemOverview> for ItemOverview {
    fn from(i: CliItemOverview) -> Self {
        ItemOverview {
            id: i.id,
            title: i.title,
            category: i.category.filter(|c| !c.is_empty()),
            tags: i.tags,
        }
    }
}

/// Item as returned by `op item get --format json`.
#[derive(Debug, Deserialize)]
struct CliItem {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    fields: Vec<CliField>,
}

impl From<CliItem> for Item {
    fn from(i: CliItem) -> Self {
        Item {
            id: i.id,
            title: i.title,
            category: i.category.filter(|c| !c.is_empty()),
            fields: i.fields.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CliField {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

impl From<CliField> for Field {
    fn from(f: CliField) -> Self {
        Field::new(f.label.unwrap_or_default(), f.value.unwrap_or_default())
    }
}
