use std::io::Write;

use serde::Serialize;

use onepsa::api::VaultListing;
use onepsa::error::{LookupError, Result};

/// JSON response for `1psa -l --json`.
#[derive(Serialize)]
pub struct ListResponse {
    pub vaults: Vec<VaultListing>,
}

/// Write `value` as one line of JSON.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)
        .map_err(|e| LookupError::Serialization(e.to_string()))?;
    writeln!(out)?;
    Ok(())
}
