//! Project specification.

use buttonops_templates::ProjectType;

/// Input describing the project to scaffold.
///
/// Created once from user input and immutable for the scaffolding run; the
/// materializer owns it and generators borrow it.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    pub name: String,
    pub project_type: ProjectType,
    pub environment: String,
    pub repo_url: Option<String>,
    pub infrastructure: bool,
    pub pipeline: bool,
}

impl ProjectSpec {
    /// Build a spec with infrastructure and pipeline generation enabled.
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            project_type,
            environment: environment.into(),
            repo_url: None,
            infrastructure: true,
            pipeline: true,
        }
    }

    pub fn with_repo_url(mut self, repo_url: impl Into<String>) -> Self {
        self.repo_url = Some(repo_url.into());
        self
    }

    pub fn with_infrastructure(mut self, enabled: bool) -> Self {
        self.infrastructure = enabled;
        self
    }

    pub fn with_pipeline(mut self, enabled: bool) -> Self {
        self.pipeline = enabled;
        self
    }

    /// Kubernetes namespace convention shared by every generated artifact.
    pub fn namespace(&self) -> String {
        format!("{}-{}", self.name, self.environment)
    }
}
