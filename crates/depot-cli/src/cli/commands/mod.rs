//! Command handlers.

pub mod auth;
pub mod categories;
pub mod config;
pub mod orders;
pub mod products;
pub mod reports;
pub mod stock;
pub mod suppliers;

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use comfy_table::{Table, presets};
use depot_core::api::ApiClient;
use depot_core::auth::AuthSession;
use depot_core::config::Config;

/// Builds the API client over the default session store.
pub(crate) fn client(config: &Config) -> ApiClient {
    ApiClient::from_config(config, AuthSession::open_default())
}

/// A bordered table with the given header row.
pub(crate) fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_header(headers.to_vec());
    table
}

/// Guards destructive commands. `--yes` skips the prompt; interactive runs
/// ask on the terminal; scripted runs (no tty on stdin) must pass `--yes`.
pub(crate) fn ensure_confirmed(yes: bool, action: &str) -> Result<()> {
    if yes {
        return Ok(());
    }
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        anyhow::bail!("refusing to {action} without --yes");
    }
    eprint!("Really {action}? [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    stdin
        .lock()
        .read_line(&mut answer)
        .context("read confirmation from stdin")?;
    if is_affirmative(&answer) {
        Ok(())
    } else {
        anyhow::bail!("aborted")
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
