//! # buttonops_iac
//!
//! Terraform scaffold generation for ButtonOps infrastructure.
//!
//! Two generators live here:
//!
//! - [`InfrastructureScaffold`] emits the fixed-shape base stack (resource
//!   group, AKS cluster, Redis cache, Application Gateway) parameterized only
//!   by project name and environment.
//! - [`ServiceBusScaffold`] emits the variable-shape messaging stack whose
//!   resource count and identifiers follow the caller's queue/topic lists.
//!
//! Both write into subdirectories of an already-materialized project tree and
//! emit deployment scripts; neither executes terraform itself.
//!
//! ## Example
//!
//! ```rust,no_run
//! use buttonops_core::ProjectSpec;
//! use buttonops_iac::{InfrastructureScaffold, MessagingTopology, ServiceBusScaffold, SkuTier};
//! use buttonops_templates::ProjectType;
//! use std::path::Path;
//!
//! let spec = ProjectSpec::new("orders-api", ProjectType::RestApi, "dev");
//! let project = Path::new("./orders-api");
//!
//! InfrastructureScaffold::new().generate(project, &spec).unwrap();
//!
//! let topology = MessagingTopology::new(
//!     "orders-api-dev-servicebus",
//!     "orders-api-dev-rg",
//!     "westeurope",
//!     SkuTier::Standard,
//! );
//! ServiceBusScaffold::new().generate(project, &spec, &topology).unwrap();
//! ```

pub mod cluster;
pub mod error;
pub mod script;
pub mod servicebus;
pub mod topology;

pub use cluster::InfrastructureScaffold;
pub use error::{IacError, IacResult};
pub use servicebus::{ServiceBusRuntimeConfig, ServiceBusScaffold};
pub use topology::{MessagingTopology, SkuTier};
