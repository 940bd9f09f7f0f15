//! Integration tests for infrastructure generation.

use std::fs;
use std::str::FromStr;

use buttonops_core::ProjectSpec;
use buttonops_iac::{
    IacError, InfrastructureScaffold, MessagingTopology, ServiceBusRuntimeConfig,
    ServiceBusScaffold, SkuTier,
};
use buttonops_templates::ProjectType;
use tempfile::tempdir;

fn spec() -> ProjectSpec {
    ProjectSpec::new("orders-api", ProjectType::RestApi, "dev")
}

#[test]
fn test_base_infrastructure_files_on_disk() {
    let dir = tempdir().unwrap();
    InfrastructureScaffold::new().generate(dir.path(), &spec()).unwrap();

    let main_tf = fs::read_to_string(dir.path().join("terraform/main.tf")).unwrap();
    assert!(main_tf.contains("orders-api-dev.tfstate"));

    let outputs = fs::read_to_string(dir.path().join("terraform/outputs.tf")).unwrap();
    assert!(outputs.contains("aks_cluster_endpoint"));
}

#[test]
fn test_servicebus_generation_end_to_end() {
    let dir = tempdir().unwrap();
    let topology = MessagingTopology::new("orders-api-dev-servicebus", "orders-api-dev-rg", "westeurope", SkuTier::Standard)
        .with_queues("order.created,order-updated")
        .with_topics("events");

    ServiceBusScaffold::new().generate(dir.path(), &spec(), &topology).unwrap();

    let sb_tf =
        fs::read_to_string(dir.path().join("terraform/servicebus/servicebus.tf")).unwrap();
    assert!(sb_tf.contains(r#"resource "azurerm_servicebus_queue" "order_created""#));
    assert!(sb_tf.contains(r#"resource "azurerm_servicebus_queue" "order_updated""#));
    assert!(sb_tf.contains("enable_partitioning = false"));

    let raw = fs::read_to_string(dir.path().join("config/servicebus.json")).unwrap();
    let config: ServiceBusRuntimeConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(config.servicebus.namespace, "orders-api-dev-servicebus");
    assert_eq!(config.servicebus.queues, vec!["order.created", "order-updated"]);
    assert_eq!(
        config.servicebus.endpoint,
        "https://orders-api-dev-servicebus.servicebus.windows.net/"
    );

    let env_file = fs::read_to_string(dir.path().join("config/servicebus.dev.env")).unwrap();
    assert!(env_file.contains("SERVICEBUS_NAMESPACE=orders-api-dev-servicebus"));
    assert!(env_file.contains("SERVICEBUS_CONNECTION_STRING=${servicebus_connection_string}"));
}

#[test]
fn test_invalid_tier_fails_before_generation() {
    let err = SkuTier::from_str("Invalid").unwrap_err();
    assert!(matches!(err, IacError::InvalidTier(_)));
}

#[test]
fn test_identifier_collision_writes_no_files() {
    let dir = tempdir().unwrap();
    let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Standard)
        .with_queues("order.created,order-created");

    let err = ServiceBusScaffold::new()
        .generate(dir.path(), &spec(), &topology)
        .unwrap_err();
    assert!(matches!(err, IacError::DuplicateIdentifier { .. }));

    assert!(!dir.path().join("terraform").exists());
    assert!(!dir.path().join("config").exists());
    assert!(!dir.path().join("scripts").exists());
}

#[cfg(unix)]
#[test]
fn test_deploy_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    InfrastructureScaffold::new().generate(dir.path(), &spec()).unwrap();

    let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Basic);
    ServiceBusScaffold::new().generate(dir.path(), &spec(), &topology).unwrap();

    for script in ["deploy-infrastructure.sh", "deploy-servicebus.sh"] {
        let mode = fs::metadata(dir.path().join("scripts").join(script))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111, "{script} not executable");
    }
}

#[test]
fn test_deploy_script_passes_topology_vars() {
    let dir = tempdir().unwrap();
    let topology = MessagingTopology::new("orders-api-dev-servicebus", "orders-api-dev-rg", "westeurope", SkuTier::Premium);
    ServiceBusScaffold::new().generate(dir.path(), &spec(), &topology).unwrap();

    let script = fs::read_to_string(dir.path().join("scripts/deploy-servicebus.sh")).unwrap();
    assert!(script.contains(r#"-var="resource_group_name=orders-api-dev-rg""#));
    assert!(script.contains(r#"-var="servicebus_sku=Premium""#));
}
