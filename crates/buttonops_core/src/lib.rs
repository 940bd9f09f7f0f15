//! # buttonops_core
//!
//! Project materialization engine for ButtonOps.
//!
//! This crate turns a [`ProjectSpec`] into a scaffolded project directory:
//! it resolves the project type's template, renders every file against the
//! project variables, writes the tree, and emits the `buttonops.yaml`
//! manifest describing what was generated.
//!
//! ## Example
//!
//! ```rust,no_run
//! use buttonops_core::{ProjectMaterializer, ProjectSpec};
//! use buttonops_templates::{ProjectType, TemplateRegistry};
//! use std::path::Path;
//!
//! let spec = ProjectSpec::new("orders-api", ProjectType::RestApi, "dev");
//! let materializer = ProjectMaterializer::new(TemplateRegistry::builtin());
//! let manifest = materializer.materialize(Path::new("."), &spec).unwrap();
//! assert_eq!(manifest.name, "orders-api");
//! ```

pub mod error;
pub mod manifest;
pub mod materializer;
pub mod project;

pub use error::{CoreError, CoreResult};
pub use manifest::{
    EnvironmentConfig, InfrastructureConfig, KubernetesConfig, MonitoringConfig, ProjectManifest,
    RedisConfig,
};
pub use materializer::{ProjectMaterializer, MANIFEST_FILE, SCAFFOLD_DIRS};
pub use project::ProjectSpec;
