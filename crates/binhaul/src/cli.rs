use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[command(name = "binhaul", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "i", about = "Download the configured binary and place it on the bin path")]
    Install,
    #[command(alias = "rm", about = "Remove the installed binary")]
    Uninstall,
}
