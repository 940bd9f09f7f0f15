//! # buttonops_templates
//!
//! Project-type template registry and rendering for ButtonOps.
//!
//! This crate holds the builtin project templates (one per project type) and
//! the placeholder renderer that substitutes project variables into template
//! bodies. The registry is an explicitly constructed, immutable value that
//! callers inject where needed; there is no process-global template state.
//!
//! ## Example
//!
//! ```rust
//! use buttonops_templates::{ProjectType, RenderContext, TemplateRegistry, TemplateRenderer};
//!
//! let registry = TemplateRegistry::builtin();
//! let template = registry.get(ProjectType::RestApi).unwrap();
//!
//! let context = RenderContext::new("orders-api", ProjectType::RestApi, "dev");
//! let renderer = TemplateRenderer::new();
//! let package_json = renderer.render(template.files[0].body, &context);
//! assert!(package_json.contains("orders-api"));
//! ```

pub mod builtin;
pub mod error;
pub mod registry;
pub mod renderer;

pub use error::{TemplateError, TemplateResult};
pub use registry::{ProjectType, Template, TemplateFile, TemplateRegistry};
pub use renderer::{RenderContext, TemplateRenderer};
