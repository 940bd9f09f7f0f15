//! Create commands - scaffold projects and messaging infrastructure.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use buttonops_core::{ProjectMaterializer, ProjectSpec};
use buttonops_iac::{InfrastructureScaffold, MessagingTopology, ServiceBusScaffold, SkuTier};
use buttonops_pipeline::PipelineScaffold;
use buttonops_templates::{ProjectType, TemplateRegistry};

#[derive(Args)]
pub struct CreateProjectArgs {
    /// Project name
    #[arg(short, long)]
    name: String,

    /// Project type (rest-api, graphql, worker, frontend)
    #[arg(short = 't', long = "type", default_value = "rest-api")]
    project_type: String,

    /// Target environment (dev, qa, staging, prod)
    #[arg(short, long, default_value = "dev")]
    env: String,

    /// Git repository URL
    #[arg(long)]
    repo_url: Option<String>,

    /// Skip infrastructure creation
    #[arg(long)]
    no_infrastructure: bool,

    /// Skip pipeline creation
    #[arg(long)]
    no_pipeline: bool,
}

pub fn execute_project(args: CreateProjectArgs) -> Result<()> {
    let project_type = ProjectType::parse(&args.project_type)?;

    let mut spec = ProjectSpec::new(&args.name, project_type, &args.env)
        .with_infrastructure(!args.no_infrastructure)
        .with_pipeline(!args.no_pipeline);
    if let Some(repo_url) = &args.repo_url {
        spec = spec.with_repo_url(repo_url);
    }

    info!("Creating {} project '{}'", spec.project_type, spec.name);

    let parent_dir = std::env::current_dir()?;
    let project_root = parent_dir.join(&spec.name);

    let materializer = ProjectMaterializer::new(TemplateRegistry::builtin());
    materializer
        .materialize(&parent_dir, &spec)
        .context("Failed to materialize project")?;

    if spec.infrastructure {
        InfrastructureScaffold::new()
            .generate(&project_root, &spec)
            .context("Failed to generate infrastructure")?;
    }

    if spec.pipeline {
        PipelineScaffold::new()
            .generate(&project_root, &spec)
            .context("Failed to generate pipelines")?;
    }

    println!("✅ Project '{}' created successfully!", spec.name);
    println!();
    println!("Location: {:?}", project_root);
    println!();
    println!("Next steps:");
    println!("  cd {}", spec.name);
    println!("  # Review the generated code and configurations");
    println!("  # Commit and push your changes");

    Ok(())
}

#[derive(Args)]
pub struct CreateServiceBusArgs {
    /// Project name the namespace belongs to
    #[arg(short, long)]
    project: String,

    /// Target environment
    #[arg(short, long, default_value = "dev")]
    env: String,

    /// Service Bus namespace (defaults to {project}-{env}-servicebus)
    #[arg(long)]
    namespace: Option<String>,

    /// Resource group (defaults to {project}-{env}-rg)
    #[arg(long)]
    resource_group: Option<String>,

    /// Azure region
    #[arg(long, default_value = "westeurope")]
    location: String,

    /// Namespace SKU (Basic, Standard, Premium)
    #[arg(long, default_value = "Standard")]
    sku: String,

    /// Comma-separated queue names
    #[arg(long, default_value = MessagingTopology::DEFAULT_QUEUES)]
    queues: String,

    /// Comma-separated topic names
    #[arg(long, default_value = MessagingTopology::DEFAULT_TOPICS)]
    topics: String,
}

pub fn execute_servicebus(args: CreateServiceBusArgs) -> Result<()> {
    let sku = SkuTier::from_str(&args.sku)?;

    // The servicebus scaffold only needs the project name and environment;
    // the project type has no bearing on messaging resources.
    let spec = ProjectSpec::new(&args.project, ProjectType::RestApi, &args.env);

    let namespace = args
        .namespace
        .unwrap_or_else(|| format!("{}-{}-servicebus", args.project, args.env));
    let resource_group = args
        .resource_group
        .unwrap_or_else(|| format!("{}-{}-rg", args.project, args.env));

    let topology = MessagingTopology::new(namespace, resource_group, &args.location, sku)
        .with_queues(&args.queues)
        .with_topics(&args.topics);

    info!(
        "Creating Service Bus namespace '{}' ({} tier)",
        topology.namespace, topology.sku
    );

    let project_root = std::env::current_dir()?.join(&args.project);
    ServiceBusScaffold::new()
        .generate(&project_root, &spec, &topology)
        .context("Failed to generate Service Bus infrastructure")?;

    println!("✅ Service Bus scaffold for '{}' created!", args.project);
    println!();
    println!("Next steps:");
    println!("  cd {}", args.project);
    println!("  ./scripts/deploy-servicebus.sh");

    Ok(())
}
