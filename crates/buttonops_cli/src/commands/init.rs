//! Init command - initialize workspace configuration.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct InitArgs {
    /// Azure subscription ID
    #[arg(long)]
    azure_subscription: Option<String>,

    /// Azure DevOps organization
    #[arg(long)]
    azure_devops_org: Option<String>,

    /// Terraform backend configuration
    #[arg(long)]
    terraform_backend: Option<String>,
}

pub fn execute(_args: InitArgs) -> Result<()> {
    println!("Initializing ButtonOps workspace...");
    // TODO: persist workspace defaults once the config file format is settled
    Ok(())
}
