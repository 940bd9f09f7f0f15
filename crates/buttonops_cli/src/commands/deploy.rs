//! Deploy command - deploy a project to an environment.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct DeployArgs {
    /// Project name to deploy
    #[arg(short, long)]
    project: String,

    /// Target environment
    #[arg(short, long, default_value = "dev")]
    env: String,

    /// Force deployment even if checks fail
    #[arg(long)]
    force: bool,
}

pub fn execute(args: DeployArgs) -> Result<()> {
    println!("Deploying '{}' to {}...", args.project, args.env);
    println!("Run ./scripts/deploy.sh from the project directory to deploy.");
    Ok(())
}
