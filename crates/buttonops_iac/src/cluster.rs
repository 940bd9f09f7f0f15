//! Base infrastructure scaffold generation.
//!
//! Fixed-shape Terraform for the project's compute stack: resource group,
//! AKS cluster, Redis cache, and Application Gateway. Only the project name
//! and environment vary; same spec, byte-identical output.

use std::fs;
use std::path::Path;

use tracing::info;

use buttonops_core::ProjectSpec;

use crate::error::IacResult;
use crate::script;

/// Generator for the fixed-shape base infrastructure.
#[derive(Debug, Default)]
pub struct InfrastructureScaffold;

impl InfrastructureScaffold {
    pub fn new() -> Self {
        Self
    }

    /// Write the Terraform documents and deployment script under the
    /// project root.
    pub fn generate(&self, project_root: &Path, spec: &ProjectSpec) -> IacResult<()> {
        info!(
            "Generating base infrastructure for '{}' ({})",
            spec.name, spec.environment
        );

        let terraform_dir = project_root.join("terraform");
        fs::create_dir_all(&terraform_dir)?;

        fs::write(terraform_dir.join("main.tf"), self.main_tf(spec))?;
        fs::write(terraform_dir.join("variables.tf"), self.variables_tf(spec))?;
        fs::write(terraform_dir.join("outputs.tf"), OUTPUTS_TF)?;

        script::write_executable(
            &project_root.join("scripts").join("deploy-infrastructure.sh"),
            &self.deploy_script(spec),
        )?;

        info!("Base infrastructure scaffold written to {:?}", terraform_dir);
        Ok(())
    }

    fn main_tf(&self, spec: &ProjectSpec) -> String {
        let mut tf = format!(
            r#"# ButtonOps infrastructure for {name}
terraform {{
  required_version = ">= 1.0"
  required_providers {{
    azurerm = {{
      source  = "hashicorp/azurerm"
      version = "~> 3.0"
    }}
  }}

  backend "azurerm" {{
    resource_group_name  = "buttonops-tfstate-rg"
    storage_account_name = "buttonopstfstate"
    container_name       = "tfstate"
    key                  = "{name}-{env}.tfstate"
  }}
}}

provider "azurerm" {{
  features {{}}
}}
"#,
            name = spec.name,
            env = spec.environment,
        );
        tf.push_str(BASE_RESOURCES);
        tf
    }

    fn variables_tf(&self, spec: &ProjectSpec) -> String {
        format!(
            r#"variable "project_name" {{
  description = "Name of the project"
  type        = string
  default     = "{name}"
}}

variable "environment" {{
  description = "Environment name"
  type        = string
  default     = "{env}"
}}

variable "location" {{
  description = "Azure region"
  type        = string
  default     = "West Europe"
}}

variable "node_count" {{
  description = "Number of nodes in AKS cluster"
  type        = number
  default     = 2
}}

variable "vm_size" {{
  description = "Size of the Virtual Machine"
  type        = string
  default     = "Standard_D2s_v3"
}}
"#,
            name = spec.name,
            env = spec.environment,
        )
    }

    fn deploy_script(&self, spec: &ProjectSpec) -> String {
        format!(
            r#"#!/bin/bash
# Terraform execution script for {name}

echo "Initializing Terraform..."
terraform init

echo "Planning infrastructure..."
terraform plan

echo "Applying infrastructure..."
terraform apply -auto-approve

echo "Infrastructure provisioned successfully!"
"#,
            name = spec.name,
        )
    }
}

const BASE_RESOURCES: &str = r#"
# Resource Group
resource "azurerm_resource_group" "main" {
  name     = "${var.project_name}-${var.environment}-rg"
  location = var.location

  tags = {
    Environment = var.environment
    Project     = var.project_name
    ManagedBy   = "ButtonOps"
  }
}

# AKS Cluster
resource "azurerm_kubernetes_cluster" "main" {
  name                = "${var.project_name}-${var.environment}-aks"
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name
  dns_prefix          = "${var.project_name}-${var.environment}"

  default_node_pool {
    name       = "default"
    node_count = var.node_count
    vm_size    = var.vm_size
  }

  identity {
    type = "SystemAssigned"
  }

  tags = {
    Environment = var.environment
    Project     = var.project_name
    ManagedBy   = "ButtonOps"
  }
}

# Redis Cache
resource "azurerm_redis_cache" "main" {
  name                = "${var.project_name}-${var.environment}-redis"
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name
  capacity            = 0
  family              = "C"
  sku_name            = "Basic"
  enable_non_ssl_port = false
  minimum_tls_version = "1.2"

  tags = {
    Environment = var.environment
    Project     = var.project_name
    ManagedBy   = "ButtonOps"
  }
}

# Application Gateway
resource "azurerm_virtual_network" "main" {
  name                = "${var.project_name}-${var.environment}-vnet"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name
}

resource "azurerm_subnet" "gateway" {
  name                 = "gateway-subnet"
  resource_group_name  = azurerm_resource_group.main.name
  virtual_network_name = azurerm_virtual_network.main.name
  address_prefixes     = ["10.0.1.0/24"]
}

resource "azurerm_public_ip" "gateway" {
  name                = "${var.project_name}-${var.environment}-gateway-pip"
  resource_group_name = azurerm_resource_group.main.name
  location            = azurerm_resource_group.main.location
  allocation_method   = "Static"
  sku                 = "Standard"
}

resource "azurerm_application_gateway" "main" {
  name                = "${var.project_name}-${var.environment}-appgw"
  resource_group_name = azurerm_resource_group.main.name
  location            = azurerm_resource_group.main.location

  sku {
    name     = "Standard_v2"
    tier     = "Standard_v2"
    capacity = 2
  }

  gateway_ip_configuration {
    name      = "gateway-ip-configuration"
    subnet_id = azurerm_subnet.gateway.id
  }

  frontend_port {
    name = "frontend-port"
    port = 80
  }

  frontend_ip_configuration {
    name                 = "frontend-ip-configuration"
    public_ip_address_id = azurerm_public_ip.gateway.id
  }

  backend_address_pool {
    name = "backend-pool"
  }

  backend_http_settings {
    name                  = "backend-http-settings"
    cookie_based_affinity = "Disabled"
    port                  = 80
    protocol              = "Http"
    request_timeout       = 60
  }

  http_listener {
    name                           = "http-listener"
    frontend_ip_configuration_name = "frontend-ip-configuration"
    frontend_port_name             = "frontend-port"
    protocol                       = "Http"
  }

  request_routing_rule {
    name                       = "routing-rule"
    rule_type                  = "Basic"
    http_listener_name         = "http-listener"
    backend_address_pool_name  = "backend-pool"
    backend_http_settings_name = "backend-http-settings"
    priority                   = 100
  }
}
"#;

const OUTPUTS_TF: &str = r#"output "resource_group_name" {
  description = "Name of the resource group"
  value       = azurerm_resource_group.main.name
}

output "aks_cluster_name" {
  description = "Name of the AKS cluster"
  value       = azurerm_kubernetes_cluster.main.name
}

output "aks_cluster_endpoint" {
  description = "Endpoint for the AKS cluster"
  value       = azurerm_kubernetes_cluster.main.kube_config.0.host
}

output "redis_hostname" {
  description = "Redis cache hostname"
  value       = azurerm_redis_cache.main.hostname
}

output "redis_port" {
  description = "Redis cache port"
  value       = azurerm_redis_cache.main.port
}

output "application_gateway_ip" {
  description = "Public IP of the Application Gateway"
  value       = azurerm_public_ip.gateway.ip_address
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use buttonops_templates::ProjectType;
    use tempfile::tempdir;

    fn spec() -> ProjectSpec {
        ProjectSpec::new("orders-api", ProjectType::RestApi, "dev")
    }

    #[test]
    fn test_generate_writes_all_documents() {
        let dir = tempdir().unwrap();
        InfrastructureScaffold::new().generate(dir.path(), &spec()).unwrap();

        assert!(dir.path().join("terraform/main.tf").exists());
        assert!(dir.path().join("terraform/variables.tf").exists());
        assert!(dir.path().join("terraform/outputs.tf").exists());
        assert!(dir.path().join("scripts/deploy-infrastructure.sh").exists());
    }

    #[test]
    fn test_main_tf_keys_state_by_name_and_environment() {
        let tf = InfrastructureScaffold::new().main_tf(&spec());
        assert!(tf.contains(r#"key                  = "orders-api-dev.tfstate""#));
        assert!(tf.contains(r#"resource "azurerm_kubernetes_cluster" "main""#));
        assert!(tf.contains(r#"resource "azurerm_redis_cache" "main""#));
        assert!(tf.contains(r#"resource "azurerm_application_gateway" "main""#));
    }

    #[test]
    fn test_variables_default_to_spec_values() {
        let tf = InfrastructureScaffold::new().variables_tf(&spec());
        assert!(tf.contains(r#"default     = "orders-api""#));
        assert!(tf.contains(r#"default     = "dev""#));
        assert!(tf.contains(r#"default     = "West Europe""#));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let scaffold = InfrastructureScaffold::new();
        assert_eq!(scaffold.main_tf(&spec()), scaffold.main_tf(&spec()));
    }
}
