//! Full-screen TUI dashboard for depot.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
use depot_core::api::ApiClient;
use depot_core::auth::AuthSession;
use depot_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive dashboard.
pub async fn run_dashboard(config: &Config) -> Result<()> {
    // The dashboard needs a terminal to render into.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use the depot subcommands for non-interactive use."
        );
    }

    let auth = AuthSession::open_default();
    let client = Arc::new(ApiClient::from_config(config, auth));

    let mut runtime = TuiRuntime::new(config.clone(), client)?;
    runtime.run()?;

    Ok(())
}
