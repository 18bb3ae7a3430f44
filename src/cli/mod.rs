pub mod get;
pub mod json_output;
pub mod list;

use std::io::Write;

use clap::Parser;

use onepsa::api::Lookup;
use onepsa::backend::Backend;
use onepsa::error::Result;

pub const USAGE: &str = "\
Usage:
  1psa -l [item_name]         List credentials (optionally for specific item)
  1psa -f item_name field     Get specific field value from item
  1psa -u item_name           Get username from item
  1psa -p item_name           Get password from item";

#[derive(Parser, Debug)]
#[command(
    name = "1psa",
    version,
    about = "Look up 1Password credentials with a service account token",
    args_override_self = true
)]
pub struct Cli {
    /// List credentials available in vaults (optionally specify item name)
    #[arg(short = 'l')]
    pub list: bool,

    /// Get specific field value from item (requires item and field name)
    #[arg(short = 'f')]
    pub field: bool,

    /// Get username field from item
    #[arg(short = 'u', value_name = "ITEM")]
    pub username: Option<String>,

    /// Get password field from item
    #[arg(short = 'p', value_name = "ITEM")]
    pub password: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Item name, and field name for -f
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// The single lookup selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    List(Option<&'a str>),
    Field { item: &'a str, field: &'a str },
}

/// Command lines that are rejected before any backend access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("No flag given")]
    NoMode,

    #[error("Only one flag can be used at a time")]
    TooManyModes,

    #[error("-f flag requires both item name and field name")]
    FieldArgsMissing,
}

impl Cli {
    /// Validate the flag combination and pick the mode to run.
    pub fn mode(&self) -> std::result::Result<Mode<'_>, UsageError> {
        let username = self.username.as_deref().filter(|s| !s.is_empty());
        let password = self.password.as_deref().filter(|s| !s.is_empty());

        let active = [self.list, self.field, username.is_some(), password.is_some()]
            .iter()
            .filter(|on| **on)
            .count();

        match active {
            0 => return Err(UsageError::NoMode),
            1 => {}
            _ => return Err(UsageError::TooManyModes),
        }

        if self.list {
            return Ok(Mode::List(self.args.first().map(String::as_str)));
        }
        if self.field {
            return match self.args.as_slice() {
                [item, field, ..] => Ok(Mode::Field { item, field }),
                _ => Err(UsageError::FieldArgsMissing),
            };
        }
        if let Some(item) = username {
            return Ok(Mode::Field {
                item,
                field: "username",
            });
        }
        match password {
            Some(item) => Ok(Mode::Field {
                item,
                field: "password",
            }),
            None => Err(UsageError::NoMode),
        }
    }
}

pub fn print_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", USAGE)
}

/// Run the selected mode against `lookup`, writing results to `out`.
pub fn run<B: Backend, W: Write>(
    mode: &Mode<'_>,
    lookup: &Lookup<B>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    match *mode {
        Mode::List(item) => list::run(lookup, item, json, out),
        Mode::Field { item, field } => get::run(lookup, item, field, json, out),
    }
}
