use std::path::PathBuf;

use crate::error::{LookupError, Result};

/// File under the home directory holding the service account token.
pub const TOKEN_FILE_NAME: &str = ".1psa";

/// Integration name reported to 1Password.
pub const INTEGRATION_NAME: &str = "1psa";

/// Integration version reported to 1Password.
pub const INTEGRATION_VERSION: &str = "v1.0.0";

/// Name of the 1Password CLI binary, resolved through `PATH`.
pub const OP_BINARY: &str = "op";

/// Static settings for one invocation. Nothing here is read from a file;
/// the defaults are fixed and the struct exists so tests can substitute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the service account token file.
    pub token_path: PathBuf,
    pub integration: IntegrationInfo,
    /// The `op` executable used by the CLI backend.
    pub op_binary: PathBuf,
}

/// Name and version identifying this program to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationInfo {
    pub name: String,
    pub version: String,
}

impl Default for IntegrationInfo {
    fn default() -> Self {
        Self {
            name: INTEGRATION_NAME.to_string(),
            version: INTEGRATION_VERSION.to_string(),
        }
    }
}

impl Config {
    /// Default configuration rooted at the current user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            LookupError::Config("failed to get user home directory".to_string())
        })?;
        Ok(Self::with_token_path(home.join(TOKEN_FILE_NAME)))
    }

    pub fn with_token_path(token_path: impl Into<PathBuf>) -> Self {
        Self {
            token_path: token_path.into(),
            integration: IntegrationInfo::default(),
            op_binary: PathBuf::from(OP_BINARY),
        }
    }

    pub fn with_op_binary(mut self, op_binary: impl Into<PathBuf>) -> Self {
        self.op_binary = op_binary.into();
        self
    }
}
