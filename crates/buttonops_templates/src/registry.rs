//! Project-type template registry.
//!
//! The registry maps each [`ProjectType`] to its [`Template`], an ordered set
//! of output files. It is built once via [`TemplateRegistry::builtin`] and
//! injected into the materializer; the value is immutable after construction
//! and safe to share across threads by reference.

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::error::{TemplateError, TemplateResult};

/// Supported project types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    RestApi,
    Graphql,
    Worker,
    Frontend,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::RestApi => "rest-api",
            ProjectType::Graphql => "graphql",
            ProjectType::Worker => "worker",
            ProjectType::Frontend => "frontend",
        }
    }

    /// Parse a user-supplied type string.
    ///
    /// Unknown strings fail with [`TemplateError::NotFound`] so that typos
    /// surface at the input boundary rather than mid-scaffold.
    pub fn parse(s: &str) -> TemplateResult<Self> {
        match s {
            "rest-api" => Ok(ProjectType::RestApi),
            "graphql" => Ok(ProjectType::Graphql),
            "worker" => Ok(ProjectType::Worker),
            "frontend" => Ok(ProjectType::Frontend),
            other => Err(TemplateError::NotFound(other.to_string())),
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            ProjectType::RestApi,
            ProjectType::Graphql,
            ProjectType::Worker,
            ProjectType::Frontend,
        ]
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One output file of a template: relative path plus template body.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub path: &'static str,
    pub body: &'static str,
}

/// A named project template.
///
/// `files` is ordered; generation follows registration order so repeated runs
/// produce the file tree in the same sequence.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub files: Vec<TemplateFile>,
}

/// Registry of project-type templates.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    entries: Vec<(ProjectType, Template)>,
}

impl TemplateRegistry {
    /// Build the registry of builtin templates.
    ///
    /// Registration order is `rest-api`, `graphql`, `worker`, `frontend`;
    /// [`TemplateRegistry::list_types`] reports the same order.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                (ProjectType::RestApi, builtin::rest_api()),
                (ProjectType::Graphql, builtin::graphql()),
                (ProjectType::Worker, builtin::worker()),
                (ProjectType::Frontend, builtin::frontend()),
            ],
        }
    }

    /// Build an empty registry. Useful for tests exercising missing types.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look up the template for a project type.
    pub fn get(&self, project_type: ProjectType) -> TemplateResult<&Template> {
        self.entries
            .iter()
            .find(|(ty, _)| *ty == project_type)
            .map(|(_, template)| template)
            .ok_or_else(|| TemplateError::NotFound(project_type.as_str().to_string()))
    }

    /// List registered project types in registration order.
    pub fn list_types(&self) -> Vec<ProjectType> {
        self.entries.iter().map(|(ty, _)| *ty).collect()
    }
}
