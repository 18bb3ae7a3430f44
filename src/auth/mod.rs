use std::fs;
use std::path::Path;

use secrecy::SecretString;

use crate::error::{LookupError, Result};

/// Read the service account token from `path`, trimming surrounding
/// whitespace. A blank file yields an empty token.
pub fn load_token(path: &Path) -> Result<SecretString> {
    let raw = fs::read(path).map_err(|e| {
        LookupError::Config(format!(
            "failed to read service account token from {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut content = String::from_utf8(raw).map_err(|_| {
        LookupError::Config(format!(
            "service account token in {} is not valid UTF-8",
            path.display()
        ))
    })?;

    let token = content.trim().to_string();
    zeroize::Zeroize::zeroize(&mut content);

    tracing::debug!(path = %path.display(), "loaded service account token");
    Ok(SecretString::new(token))
}
