mod cli;

use std::io::{self, Write};

use clap::Parser;
use cli::{Cli, UsageError};
use onepsa::api::Lookup;
use onepsa::config::Config;
use onepsa::error::{JsonError, LookupError};

fn main() {
    init_logging();
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(UsageError::NoMode) => {
            let _ = cli::print_usage(&mut stdout);
            return;
        }
        Err(e) => {
            let _ = writeln!(stdout, "Error: {}", e);
            let _ = cli::print_usage(&mut stdout);
            return;
        }
    };

    let lookup = match Config::from_home().and_then(|config| Lookup::connect(&config)) {
        Ok(lookup) => lookup,
        Err(e) => fatal(&mut stdout, "Failed to create 1Password client", &e, cli.json),
    };

    if let Err(e) = cli::run(&mode, &lookup, cli.json, &mut stdout) {
        fatal(&mut stdout, "Command failed", &e, cli.json);
    }
    let _ = stdout.flush();
}

fn fatal<W: Write>(stdout: &mut W, context: &str, e: &LookupError, json: bool) -> ! {
    let _ = stdout.flush();
    tracing::debug!(error = ?e, "{}", context);
    if json {
        match serde_json::to_string(&JsonError::from_error(e)) {
            Ok(body) => eprintln!("{}", body),
            Err(_) => eprintln!("{}: {}", context, e),
        }
    } else {
        eprintln!("{}: {}", context, e);
    }
    std::process::exit(e.exit_code());
}

/// Diagnostics go to stderr; `RUST_LOG` raises the level above `warn`.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
