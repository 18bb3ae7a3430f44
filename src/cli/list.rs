use std::io::Write;

use crate::cli::json_output::{write_json, ListResponse};
use onepsa::api::Lookup;
use onepsa::backend::Backend;
use onepsa::error::Result;

/// `-l [item]`: list every vault and its items, or the field titles of one item.
pub fn run<B: Backend, W: Write>(
    lookup: &Lookup<B>,
    item_name: Option<&str>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    match item_name {
        Some(name) if !name.is_empty() => list_fields(lookup, name, json, out),
        _ => list_all(lookup, json, out),
    }
}

fn list_all<B: Backend, W: Write>(lookup: &Lookup<B>, json: bool, out: &mut W) -> Result<()> {
    let listings = lookup.vaults_with_items()?;

    if json {
        return write_json(out, &ListResponse { vaults: listings });
    }

    if listings.is_empty() {
        writeln!(out, "No vaults accessible to this service account")?;
        return Ok(());
    }

    writeln!(
        out,
        "Found {} vault(s) accessible to the service account:\n",
        listings.len()
    )?;

    for listing in &listings {
        let vault = &listing.vault;
        writeln!(out, "Vault: {} (ID: {})", vault.title, vault.id)?;
        writeln!(out, "{}", rule(&vault.title))?;

        let items = match (&listing.items, &listing.error) {
            (Some(items), _) => items,
            (None, error) => {
                writeln!(
                    out,
                    "  Error listing items in vault {}: {}\n",
                    vault.title,
                    error.as_deref().unwrap_or("unknown error")
                )?;
                continue;
            }
        };

        if items.is_empty() {
            writeln!(out, "  No items found in this vault")?;
        } else {
            writeln!(out, "  Found {} item(s):", items.len())?;
            for (i, item) in items.iter().enumerate() {
                let category = item
                    .category
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .map(|c| format!(" Category: {}", c))
                    .unwrap_or_default();
                let tags = if item.tags.is_empty() {
                    String::new()
                } else {
                    format!(" Tags: {}", item.tags.join(", "))
                };
                writeln!(
                    out,
                    "  {}. {} (ID: {}){}{}",
                    i + 1,
                    item.title,
                    item.id,
                    category,
                    tags
                )?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn list_fields<B: Backend, W: Write>(
    lookup: &Lookup<B>,
    item_name: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let fields = lookup.field_titles(item_name)?;

    if json {
        return write_json(out, &fields);
    }

    writeln!(out, "Fields for item '{}':", fields.item)?;
    writeln!(out, "{}", rule(&fields.item))?;

    if fields.fields.is_empty() {
        writeln!(out, "No fields found in this item")?;
        return Ok(());
    }

    for (i, title) in fields.fields.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, title)?;
    }

    Ok(())
}

/// Underline sized to the heading's title.
fn rule(title: &str) -> String {
    "-".repeat(title.len() + 20)
}
