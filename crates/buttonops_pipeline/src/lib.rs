//! # buttonops_pipeline
//!
//! CI/CD pipeline definition generation for ButtonOps.
//!
//! Emits two independently complete definitions of the same
//! build → deploy → test flow, one per pipeline dialect (Azure DevOps and
//! GitHub Actions), plus the kubectl/helm deployment script they both defer
//! to. The dialects agree on the `{name}-{environment}` namespace and the
//! `values-{environment}.yaml` chart-values convention, so either can drive
//! the same deployment.

pub mod error;
pub mod generator;

pub use error::{PipelineError, PipelineResult};
pub use generator::PipelineScaffold;
