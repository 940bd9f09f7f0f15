//! Project materialization.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use buttonops_templates::{RenderContext, TemplateRegistry, TemplateRenderer};

use crate::error::CoreResult;
use crate::manifest::ProjectManifest;
use crate::project::ProjectSpec;

/// Manifest file name. JSON content; the extension is historical.
pub const MANIFEST_FILE: &str = "buttonops.yaml";

/// Auxiliary directories every project gets, whether or not the template
/// populated them.
pub const SCAFFOLD_DIRS: [&str; 6] = [
    "src",
    "tests",
    "docs",
    "deploy",
    "scripts",
    ".github/workflows",
];

/// Materializes a project directory from a template.
pub struct ProjectMaterializer {
    registry: TemplateRegistry,
    renderer: TemplateRenderer,
}

impl ProjectMaterializer {
    /// Build a materializer around an injected registry.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Scaffold the project under `parent_dir/{spec.name}`.
    ///
    /// The whole file set is rendered in memory before the first write, so a
    /// template-resolution failure touches nothing on disk. The commit phase
    /// is not transactional: an I/O failure mid-commit aborts the remaining
    /// writes but leaves earlier files in place. Callers observing an error
    /// must treat the project directory as possibly partial and either
    /// delete-and-retry or resume.
    ///
    /// Re-running with the same spec overwrites prior output in place
    /// (last-writer-wins); existing directories are never an error.
    pub fn materialize(&self, parent_dir: &Path, spec: &ProjectSpec) -> CoreResult<ProjectManifest> {
        let template = self.registry.get(spec.project_type)?;
        let project_path = parent_dir.join(&spec.name);

        info!(
            "Materializing {} project '{}' at {:?}",
            spec.project_type, spec.name, project_path
        );

        // Render phase: resolve every file before touching the filesystem.
        let context = RenderContext::new(&spec.name, spec.project_type, &spec.environment);
        let plan: Vec<(PathBuf, String)> = template
            .files
            .iter()
            .map(|file| {
                (
                    project_path.join(file.path),
                    self.renderer.render(file.body, &context),
                )
            })
            .collect();

        // Commit phase.
        fs::create_dir_all(&project_path)?;

        for (path, contents) in &plan {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)?;
            debug!("Wrote {:?}", path);
        }

        for dir in SCAFFOLD_DIRS {
            fs::create_dir_all(project_path.join(dir))?;
        }

        let manifest = ProjectManifest::for_spec(spec);
        fs::write(
            project_path.join(MANIFEST_FILE),
            serde_json::to_string_pretty(&manifest)?,
        )?;

        info!("Project '{}' materialized ({} files)", spec.name, plan.len());
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buttonops_templates::ProjectType;
    use tempfile::tempdir;

    #[test]
    fn test_materialize_writes_every_template_file() {
        let dir = tempdir().unwrap();
        let spec = ProjectSpec::new("orders-api", ProjectType::RestApi, "dev");
        let materializer = ProjectMaterializer::new(TemplateRegistry::builtin());

        materializer.materialize(dir.path(), &spec).unwrap();

        let registry = TemplateRegistry::builtin();
        let template = registry.get(ProjectType::RestApi).unwrap();
        let project = dir.path().join("orders-api");
        for file in &template.files {
            let path = project.join(file.path);
            assert!(path.exists(), "{} missing", file.path);
            assert!(!fs::read_to_string(&path).unwrap().is_empty());
        }
    }

    #[test]
    fn test_materialize_creates_scaffold_dirs() {
        let dir = tempdir().unwrap();
        let spec = ProjectSpec::new("orders-api", ProjectType::Worker, "dev");
        let materializer = ProjectMaterializer::new(TemplateRegistry::builtin());

        materializer.materialize(dir.path(), &spec).unwrap();

        let project = dir.path().join("orders-api");
        for scaffold in SCAFFOLD_DIRS {
            assert!(project.join(scaffold).is_dir(), "{scaffold} missing");
        }
    }

    #[test]
    fn test_materialize_is_idempotent() {
        let dir = tempdir().unwrap();
        let spec = ProjectSpec::new("orders-api", ProjectType::RestApi, "dev");
        let materializer = ProjectMaterializer::new(TemplateRegistry::builtin());

        materializer.materialize(dir.path(), &spec).unwrap();
        let first = fs::read_to_string(dir.path().join("orders-api/package.json")).unwrap();

        materializer.materialize(dir.path(), &spec).unwrap();
        let second = fs::read_to_string(dir.path().join("orders-api/package.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let dir = tempdir().unwrap();
        let spec = ProjectSpec::new("orders-api", ProjectType::RestApi, "dev");
        let materializer = ProjectMaterializer::new(TemplateRegistry::empty());

        let err = materializer.materialize(dir.path(), &spec).unwrap_err();
        assert!(matches!(err, crate::CoreError::Template(_)));
        assert!(!dir.path().join("orders-api").exists());
    }
}
