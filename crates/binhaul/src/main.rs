use anyhow::Result;
use binhaul_platform::Host;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod actions;
mod cli;
mod error;
mod install_dir;
mod manifest;
mod place;
mod resolve;

use cli::{App, Commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BINHAUL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let app = App::parse();
    let host = Host::detect();
    let manifest_dir = std::env::current_dir()?;

    match app.cmd {
        Commands::Install => actions::install(&host, &manifest_dir).await?,
        Commands::Uninstall => actions::uninstall(&host, &manifest_dir).await?,
    }

    Ok(())
}
