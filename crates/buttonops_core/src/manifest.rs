//! Project manifest model.
//!
//! The manifest is the single source of truth for what a scaffolding run
//! generated. It is written to `buttonops.yaml` in JSON form (the extension
//! is historical; downstream tooling parses it as JSON) and is not read back
//! by this engine.

use std::collections::BTreeMap;

use buttonops_templates::ProjectType;
use serde::{Deserialize, Serialize};

use crate::project::ProjectSpec;

/// Per-environment generation flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub enabled: bool,
    pub infrastructure: bool,
    pub pipeline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesConfig {
    pub enabled: bool,
    pub cluster: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub enabled: bool,
    pub sku: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

/// Infrastructure summary recorded in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfrastructureConfig {
    pub provider: String,
    pub region: String,
    pub kubernetes: KubernetesConfig,
    pub redis: RedisConfig,
    pub monitoring: MonitoringConfig,
}

/// Generated summary of a scaffolding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub version: String,
    pub environments: BTreeMap<String, EnvironmentConfig>,
    pub infrastructure: InfrastructureConfig,
}

impl ProjectManifest {
    /// Derive the manifest for a project spec.
    pub fn for_spec(spec: &ProjectSpec) -> Self {
        let mut environments = BTreeMap::new();
        environments.insert(
            spec.environment.clone(),
            EnvironmentConfig {
                enabled: true,
                infrastructure: spec.infrastructure,
                pipeline: spec.pipeline,
            },
        );

        Self {
            name: spec.name.clone(),
            project_type: spec.project_type,
            version: "1.0.0".to_string(),
            environments,
            infrastructure: InfrastructureConfig {
                provider: "azure".to_string(),
                region: "westeurope".to_string(),
                kubernetes: KubernetesConfig {
                    enabled: true,
                    cluster: format!("{}-{}-aks", spec.name, spec.environment),
                },
                redis: RedisConfig {
                    enabled: true,
                    sku: "Basic".to_string(),
                },
                monitoring: MonitoringConfig { enabled: true },
            },
        }
    }
}
