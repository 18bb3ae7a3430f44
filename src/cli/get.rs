use std::io::Write;

use crate::cli::json_output::write_json;
use onepsa::api::Lookup;
use onepsa::backend::Backend;
use onepsa::error::Result;

/// `-f item field`, `-u item`, `-p item`: print one field value, unmasked.
pub fn run<B: Backend, W: Write>(
    lookup: &Lookup<B>,
    item_name: &str,
    field_name: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let field = lookup.field_value(item_name, field_name)?;

    if json {
        write_json(out, &field)
    } else {
        writeln!(out, "{}", field.value)?;
        Ok(())
    }
}
