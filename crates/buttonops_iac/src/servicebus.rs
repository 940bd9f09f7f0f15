//! Service Bus scaffold generation.
//!
//! Unlike the base stack, the shape of these documents follows the input:
//! one queue resource per queue name and one topic-plus-subscription pair per
//! topic name, each keyed by the sanitized identifier derived from the raw
//! name. Emission order matches input order, queues first, so repeated runs
//! diff cleanly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use buttonops_core::ProjectSpec;

use crate::error::IacResult;
use crate::script;
use crate::topology::{sanitize, MessagingTopology};

/// Runtime configuration emitted as `config/servicebus.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBusRuntimeConfig {
    pub servicebus: ServiceBusSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBusSettings {
    pub namespace: String,
    pub sku: String,
    pub location: String,
    pub queues: Vec<String>,
    pub topics: Vec<String>,
    pub connection_string: String,
    pub endpoint: String,
}

/// Generator for the variable-shape messaging infrastructure.
#[derive(Debug, Default)]
pub struct ServiceBusScaffold;

impl ServiceBusScaffold {
    pub fn new() -> Self {
        Self
    }

    /// Write the Service Bus Terraform documents, deployment script, and
    /// runtime configuration under the project root.
    ///
    /// The topology is validated first; a sanitized-identifier collision
    /// fails the whole run before any file is written.
    pub fn generate(
        &self,
        project_root: &Path,
        spec: &ProjectSpec,
        topology: &MessagingTopology,
    ) -> IacResult<()> {
        topology.validate()?;

        info!(
            "Generating Service Bus scaffold for namespace '{}' ({} queues, {} topics, {} tier)",
            topology.namespace,
            topology.queues.len(),
            topology.topics.len(),
            topology.sku
        );

        let terraform_dir = project_root.join("terraform").join("servicebus");
        fs::create_dir_all(&terraform_dir)?;

        fs::write(
            terraform_dir.join("servicebus.tf"),
            self.namespace_document(spec, topology),
        )?;
        fs::write(
            terraform_dir.join("servicebus-variables.tf"),
            self.variables_document(topology),
        )?;
        fs::write(terraform_dir.join("servicebus-outputs.tf"), OUTPUTS_TF)?;

        script::write_executable(
            &project_root.join("scripts").join("deploy-servicebus.sh"),
            &self.deploy_script(spec, topology),
        )?;

        self.write_runtime_config(project_root, spec, topology)?;

        info!("Service Bus scaffold written to {:?}", terraform_dir);
        Ok(())
    }

    fn namespace_name(&self, spec: &ProjectSpec) -> String {
        format!("{}-{}-servicebus", spec.name, spec.environment)
    }

    /// The namespace document: fixed namespace + authorization blocks, then
    /// one block per queue and one pair per topic, in input order.
    fn namespace_document(&self, spec: &ProjectSpec, topology: &MessagingTopology) -> String {
        let capacity = if topology.sku.is_premium() {
            "capacity = 1"
        } else {
            ""
        };

        let mut document = format!(
            r#"# ServiceBus Infrastructure for {name}

# ServiceBus Namespace
resource "azurerm_servicebus_namespace" "main" {{
  name                = "${{var.project_name}}-${{var.environment}}-servicebus"
  location            = var.location
  resource_group_name = var.resource_group_name
  sku                 = var.servicebus_sku

  {capacity}

  tags = {{
    Environment = var.environment
    Project     = var.project_name
    ManagedBy   = "ButtonOps"
  }}
}}

# ServiceBus Authorization Rule
resource "azurerm_servicebus_namespace_authorization_rule" "main" {{
  name         = "RootManageSharedAccessKey"
  namespace_id = azurerm_servicebus_namespace.main.id

  listen = true
  send   = true
  manage = true
}}
"#,
            name = spec.name,
            capacity = capacity,
        );

        let partitioning = topology.sku.is_premium();

        for queue in &topology.queues {
            document.push_str(&self.queue_block(queue, partitioning));
        }
        for topic in &topology.topics {
            document.push_str(&self.topic_block(topic, partitioning));
        }

        document
    }

    fn queue_block(&self, queue: &str, partitioning: bool) -> String {
        format!(
            r#"
resource "azurerm_servicebus_queue" "{id}" {{
  name         = "{queue}"
  namespace_id = azurerm_servicebus_namespace.main.id

  enable_partitioning = {partitioning}
  max_delivery_count  = 10

  tags = {{
    Environment = var.environment
    Project     = var.project_name
    ManagedBy   = "ButtonOps"
  }}
}}
"#,
            id = sanitize(queue),
        )
    }

    fn topic_block(&self, topic: &str, partitioning: bool) -> String {
        let id = sanitize(topic);
        format!(
            r#"
resource "azurerm_servicebus_topic" "{id}" {{
  name         = "{topic}"
  namespace_id = azurerm_servicebus_namespace.main.id

  enable_partitioning = {partitioning}
  max_size_in_megabytes = 1024

  tags = {{
    Environment = var.environment
    Project     = var.project_name
    ManagedBy   = "ButtonOps"
  }}
}}

resource "azurerm_servicebus_subscription" "{id}_subscription" {{
  name               = "{topic}-subscription"
  topic_id           = azurerm_servicebus_topic.{id}.id
  max_delivery_count = 10
}}
"#,
        )
    }

    fn variables_document(&self, topology: &MessagingTopology) -> String {
        format!(
            r#"variable "project_name" {{
  description = "Name of the project"
  type        = string
}}

variable "environment" {{
  description = "Environment name"
  type        = string
}}

variable "location" {{
  description = "Azure region"
  type        = string
  default     = "{location}"
}}

variable "resource_group_name" {{
  description = "Name of the resource group"
  type        = string
}}

variable "servicebus_sku" {{
  description = "ServiceBus namespace SKU"
  type        = string
  default     = "{sku}"
  validation {{
    condition     = contains(["Basic", "Standard", "Premium"], var.servicebus_sku)
    error_message = "ServiceBus SKU must be Basic, Standard, or Premium."
  }}
}}
"#,
            location = topology.location,
            sku = topology.sku,
        )
    }

    fn deploy_script(&self, spec: &ProjectSpec, topology: &MessagingTopology) -> String {
        format!(
            r#"#!/bin/bash
# ServiceBus deployment script for {name}

echo "Deploying ServiceBus infrastructure..."

# Navigate to ServiceBus terraform directory
cd terraform/servicebus

echo "Initializing Terraform for ServiceBus..."
terraform init

echo "Planning ServiceBus infrastructure..."
terraform plan \
  -var="project_name={name}" \
  -var="environment={env}" \
  -var="resource_group_name={resource_group}" \
  -var="servicebus_sku={sku}"

echo "Applying ServiceBus infrastructure..."
terraform apply -auto-approve \
  -var="project_name={name}" \
  -var="environment={env}" \
  -var="resource_group_name={resource_group}" \
  -var="servicebus_sku={sku}"

echo "ServiceBus infrastructure deployed successfully!"

# Get ServiceBus connection string
CONNECTION_STRING=$(terraform output -raw servicebus_connection_string)
echo "ServiceBus connection string: $CONNECTION_STRING"

cd ../..
"#,
            name = spec.name,
            env = spec.environment,
            resource_group = topology.resource_group,
            sku = topology.sku,
        )
    }

    fn write_runtime_config(
        &self,
        project_root: &Path,
        spec: &ProjectSpec,
        topology: &MessagingTopology,
    ) -> IacResult<()> {
        let config_dir = project_root.join("config");
        fs::create_dir_all(&config_dir)?;

        // Mirrors the var-derived name in the Terraform documents so runtime
        // config and IaC stay in lockstep.
        let namespace = self.namespace_name(spec);
        let endpoint = format!("https://{namespace}.servicebus.windows.net/");

        let config = ServiceBusRuntimeConfig {
            servicebus: ServiceBusSettings {
                namespace: namespace.clone(),
                sku: topology.sku.to_string(),
                location: topology.location.clone(),
                queues: topology.queues.clone(),
                topics: topology.topics.clone(),
                // Resolved from the environment at application startup.
                connection_string: "${SERVICEBUS_CONNECTION_STRING}".to_string(),
                endpoint: endpoint.clone(),
            },
        };

        fs::write(
            config_dir.join("servicebus.json"),
            serde_json::to_string_pretty(&config)?,
        )?;

        let env_file = format!(
            "# ServiceBus Configuration for {env}\n\
             SERVICEBUS_NAMESPACE={namespace}\n\
             SERVICEBUS_CONNECTION_STRING=${{servicebus_connection_string}}\n\
             SERVICEBUS_ENDPOINT={endpoint}\n",
            env = spec.environment,
        );
        fs::write(
            config_dir.join(format!("servicebus.{}.env", spec.environment)),
            env_file,
        )?;

        Ok(())
    }
}

const OUTPUTS_TF: &str = r#"output "servicebus_namespace_name" {
  description = "Name of the ServiceBus namespace"
  value       = azurerm_servicebus_namespace.main.name
}

output "servicebus_namespace_id" {
  description = "ID of the ServiceBus namespace"
  value       = azurerm_servicebus_namespace.main.id
}

output "servicebus_connection_string" {
  description = "ServiceBus connection string"
  value       = azurerm_servicebus_namespace_authorization_rule.main.primary_connection_string
  sensitive   = true
}

output "servicebus_endpoint" {
  description = "ServiceBus namespace endpoint"
  value       = "https://${azurerm_servicebus_namespace.main.name}.servicebus.windows.net/"
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::SkuTier;
    use buttonops_templates::ProjectType;

    fn spec() -> ProjectSpec {
        ProjectSpec::new("orders-api", ProjectType::RestApi, "dev")
    }

    #[test]
    fn test_namespace_document_emits_one_block_per_queue() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Standard)
            .with_queues("order.created,order-updated")
            .with_topics("");
        let document = ServiceBusScaffold::new().namespace_document(&spec(), &topology);

        assert!(document.contains(r#"resource "azurerm_servicebus_queue" "order_created""#));
        assert!(document.contains(r#"resource "azurerm_servicebus_queue" "order_updated""#));
        assert_eq!(document.matches("azurerm_servicebus_queue").count(), 2);
        assert!(!document.contains("azurerm_servicebus_topic"));
    }

    #[test]
    fn test_topics_get_a_subscription_each() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Standard)
            .with_queues("")
            .with_topics("events,updates");
        let document = ServiceBusScaffold::new().namespace_document(&spec(), &topology);

        assert!(document.contains(r#"resource "azurerm_servicebus_topic" "events""#));
        assert!(document.contains(r#"resource "azurerm_servicebus_subscription" "events_subscription""#));
        assert!(document.contains(r#"name               = "events-subscription""#));
        assert!(document.contains(r#"resource "azurerm_servicebus_subscription" "updates_subscription""#));
    }

    #[test]
    fn test_queues_precede_topics_in_input_order() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Basic)
            .with_queues("zeta,alpha")
            .with_topics("omega");
        let document = ServiceBusScaffold::new().namespace_document(&spec(), &topology);

        let zeta = document.find(r#""zeta""#).unwrap();
        let alpha = document.find(r#""alpha""#).unwrap();
        let omega = document.find(r#""omega""#).unwrap();
        assert!(zeta < alpha, "queue order must follow input order");
        assert!(alpha < omega, "queues must be emitted before topics");
    }

    #[test]
    fn test_non_premium_disables_partitioning_and_capacity() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Standard);
        let document = ServiceBusScaffold::new().namespace_document(&spec(), &topology);

        assert!(document.contains("enable_partitioning = false"));
        assert!(!document.contains("enable_partitioning = true"));
        assert!(!document.contains("capacity = 1"));
    }

    #[test]
    fn test_premium_enables_partitioning_and_capacity() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Premium);
        let document = ServiceBusScaffold::new().namespace_document(&spec(), &topology);

        assert!(document.contains("capacity = 1"));
        assert!(document.contains("enable_partitioning = true"));
        assert!(!document.contains("enable_partitioning = false"));
    }

    #[test]
    fn test_variables_document_carries_sku_validation() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Standard);
        let document = ServiceBusScaffold::new().variables_document(&topology);

        assert!(document.contains(r#"contains(["Basic", "Standard", "Premium"], var.servicebus_sku)"#));
        assert!(document.contains(r#"default     = "Standard""#));
    }
}
