//! Prospect browser and cold-email review tool.
//!
//! ```text
//! backend (GET leads) → workflow::ProspectPage → display (sections)
//!                               ↓ generate / feedback
//!                        SessionContext (email_id, draft)
//! ```

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod logging;
pub mod prospect;
pub mod ui;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

use crate::backend::{HttpBackend, ProspectBackend};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::display::{HtmlRenderer, SectionRenderer, TerminalRenderer};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = &cli.backend_url {
        config.set_backend_url(url)?;
    }
    info!(backend = %config.backend.base_url, "Configuration loaded");
    for var in config.missing_credentials() {
        warn!("{} is not set; the page does not need it but the backend may", var);
    }

    let backend: Arc<dyn ProspectBackend> = Arc::new(HttpBackend::new(&config.backend)?);
    dispatch(cli.command.unwrap_or(Commands::Browse), backend, &config).await
}

/// Runs one command. A prospect list that cannot be fetched fails every
/// command the same way.
async fn dispatch(
    command: Commands,
    backend: Arc<dyn ProspectBackend>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut state = commands::open_page(backend, config)
        .await
        .map_err(anyhow::Error::msg)?;

    match command {
        Commands::Browse => ui::run_page(state).await?,
        Commands::List => {
            if !state.has_prospects() {
                println!("{}", commands::NO_PROSPECTS_MESSAGE);
            }
            for entry in state.page.index().entries() {
                println!("{}\t{}", entry.id, entry.label);
            }
        }
        Commands::Show { id, html } => {
            let formatted = state.page.select(&id)?;
            if html {
                println!("{}", HtmlRenderer.render(&formatted));
            } else {
                println!("{}", TerminalRenderer.render(&formatted));
            }
        }
    }

    Ok(())
}
