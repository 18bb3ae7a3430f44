//! 1psa: look up 1Password credentials with a service account token.
//!
//! The library exposes the token loader, the backend abstraction with its
//! `op` CLI and in-memory implementations, the item resolver, and the
//! [`api::Lookup`] facade. Argument parsing and output formatting live in the
//! binary behind the `cli` feature.
//!
//! # Quick start
//!
//! ```no_run
//! use onepsa::api::Lookup;
//! use onepsa::config::Config;
//!
//! let lookup = Lookup::connect(&Config::from_home()?)?;
//! let password = lookup.field_value("My Login", "password")?;
//! println!("{}", password.value);
//! # Ok::<(), onepsa::error::LookupError>(())
//! ```

pub mod api;
pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod resolve;
pub mod types;
