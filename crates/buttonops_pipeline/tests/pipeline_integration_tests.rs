//! Integration tests for pipeline generation.

use std::fs;

use buttonops_core::ProjectSpec;
use buttonops_pipeline::PipelineScaffold;
use buttonops_templates::ProjectType;
use tempfile::tempdir;

fn spec() -> ProjectSpec {
    ProjectSpec::new("orders-api", ProjectType::RestApi, "qa")
}

#[test]
fn test_generate_writes_both_dialects_and_script() {
    let dir = tempdir().unwrap();
    PipelineScaffold::new().generate(dir.path(), &spec()).unwrap();

    assert!(dir.path().join(".azure-pipelines/azure-pipelines.yml").exists());
    assert!(dir.path().join(".github/workflows/ci-cd.yml").exists());
    assert!(dir.path().join("scripts/deploy.sh").exists());
}

#[test]
fn test_emitted_documents_parse_as_yaml() {
    let dir = tempdir().unwrap();
    PipelineScaffold::new().generate(dir.path(), &spec()).unwrap();

    for relative in [".azure-pipelines/azure-pipelines.yml", ".github/workflows/ci-cd.yml"] {
        let raw = fs::read_to_string(dir.path().join(relative)).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&raw).unwrap();
        assert!(parsed.is_mapping(), "{relative} is not a YAML mapping");
    }
}

#[test]
fn test_environment_threads_through_every_artifact() {
    let dir = tempdir().unwrap();
    PipelineScaffold::new().generate(dir.path(), &spec()).unwrap();

    let azure =
        fs::read_to_string(dir.path().join(".azure-pipelines/azure-pipelines.yml")).unwrap();
    assert!(azure.contains("environment: 'qa'"));

    let github = fs::read_to_string(dir.path().join(".github/workflows/ci-cd.yml")).unwrap();
    assert!(github.contains("ENVIRONMENT: qa"));

    let script = fs::read_to_string(dir.path().join("scripts/deploy.sh")).unwrap();
    assert!(script.contains(r#"ENVIRONMENT="qa""#));
}

#[cfg(unix)]
#[test]
fn test_deploy_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    PipelineScaffold::new().generate(dir.path(), &spec()).unwrap();

    let mode = fs::metadata(dir.path().join("scripts/deploy.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o111, 0o111);
}
