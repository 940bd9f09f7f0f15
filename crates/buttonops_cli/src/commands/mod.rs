//! CLI command definitions.
//!
//! This module defines the command structure for the ButtonOps CLI.
//! Each subcommand maps to one generation workflow.

use clap::{Parser, Subcommand};

pub mod create;
pub mod deploy;
pub mod init;
pub mod status;

/// ButtonOps - Internal Developer Platform CLI
#[derive(Parser)]
#[command(name = "buttonops")]
#[command(version, about = "ButtonOps - Internal Developer Platform CLI")]
#[command(long_about = r#"
ButtonOps scaffolds microservice projects: application skeleton,
containerization, Kubernetes/Helm manifests, CI/CD pipelines, and Terraform
infrastructure, generated from a single project description.

WORKFLOWS:
  create project    → Scaffold a project tree with infrastructure + pipelines
  create servicebus → Generate Service Bus messaging infrastructure
  init              → Initialize workspace configuration
  status            → Show status of projects and infrastructure
  deploy            → Deploy a project to an environment

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  4 - Template error
  5 - IaC error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create new projects and resources
    #[command(subcommand)]
    Create(CreateCommands),

    /// Initialize ButtonOps workspace configuration
    Init(init::InitArgs),

    /// Show status of projects and infrastructure
    Status(status::StatusArgs),

    /// Deploy projects to environments
    Deploy(deploy::DeployArgs),
}

#[derive(Subcommand)]
pub enum CreateCommands {
    /// Create a new microservice project with infrastructure
    Project(create::CreateProjectArgs),

    /// Generate Service Bus messaging infrastructure for a project
    Servicebus(create::CreateServiceBusArgs),
}
