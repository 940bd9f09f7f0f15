//! Status command - show project and infrastructure status.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct StatusArgs {
    /// Show status for specific project
    #[arg(short, long)]
    project: Option<String>,

    /// Show status for specific environment
    #[arg(short, long)]
    env: Option<String>,
}

pub fn execute(_args: StatusArgs) -> Result<()> {
    println!("Showing status...");
    Ok(())
}
