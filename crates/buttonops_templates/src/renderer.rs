//! Placeholder rendering for template bodies.

use chrono::Utc;
use regex::Regex;

use crate::registry::ProjectType;

/// Variable bindings available to every template body.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub project_name: String,
    pub project_type: ProjectType,
    pub environment: String,
    pub timestamp: String,
}

impl RenderContext {
    /// Build a context stamped with the current UTC time.
    pub fn new(
        project_name: impl Into<String>,
        project_type: ProjectType,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            project_type,
            environment: environment.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Override the timestamp binding. Useful for reproducible output.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    fn lookup(&self, identifier: &str) -> Option<&str> {
        match identifier {
            "projectName" => Some(&self.project_name),
            "projectType" => Some(self.project_type.as_str()),
            "environment" => Some(&self.environment),
            "timestamp" => Some(&self.timestamp),
            _ => None,
        }
    }
}

/// Template renderer substituting `{{identifier}}` placeholders.
pub struct TemplateRenderer {
    variable_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self {
            // Match {{identifier}} placeholders
            variable_pattern: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Render a template body against a context.
    ///
    /// Every `{{identifier}}` occurrence with a binding in the context is
    /// replaced by the binding's value; occurrences without a binding are
    /// left verbatim. Rendering is pure and total: the same body and context
    /// always yield the same output, and no input can make it fail.
    ///
    /// The renderer cannot tell its own placeholders apart from identical
    /// double-brace syntax owned by a downstream dialect (Helm chart
    /// directives in particular), so bodies carrying such syntax are
    /// substituted wherever the identifier matches a binding.
    pub fn render(&self, body: &str, context: &RenderContext) -> String {
        self.variable_pattern
            .replace_all(body, |caps: &regex::Captures| {
                let identifier = &caps[1];
                context
                    .lookup(identifier)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{{{{{identifier}}}}}"))
            })
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RenderContext {
        RenderContext::new("orders-api", ProjectType::RestApi, "dev")
            .with_timestamp("2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_render_substitutes_bindings() {
        let renderer = TemplateRenderer::new();
        let body = "name: {{projectName}}, type: {{projectType}}, env: {{environment}}";
        assert_eq!(
            renderer.render(body, &context()),
            "name: orders-api, type: rest-api, env: dev"
        );
    }

    #[test]
    fn test_render_preserves_unknown_placeholders() {
        let renderer = TemplateRenderer::new();
        assert_eq!(
            renderer.render("Hello {{missing}}", &context()),
            "Hello {{missing}}"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = TemplateRenderer::new();
        let body = "{{projectName}} built at {{timestamp}}";
        let first = renderer.render(body, &context());
        let second = renderer.render(body, &context());
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_ignores_malformed_placeholders() {
        let renderer = TemplateRenderer::new();
        let body = "{{ spaced }} {{-dash}} {{}} {{1digit}}";
        assert_eq!(renderer.render(body, &context()), body);
    }

    // The renderer shares its double-brace syntax with Helm's chart dialect.
    // A chart body that embeds {{projectName}} inside a Helm directive gets
    // substituted here even though the surrounding braces belong to Helm.
    // Known tension: either a disjoint placeholder syntax or an escape marker
    // would be needed to emit such identifiers untouched.
    #[test]
    fn test_render_substitutes_inside_downstream_dialect() {
        let renderer = TemplateRenderer::new();
        let body = r#"{{- include "{{projectName}}.deployment" . -}}"#;
        assert_eq!(
            renderer.render(body, &context()),
            r#"{{- include "orders-api.deployment" . -}}"#
        );
    }

    #[test]
    fn test_render_leaves_pure_helm_directives_alone() {
        let renderer = TemplateRenderer::new();
        // Helm value references use spaces and dots, which the identifier
        // pattern does not match.
        let body = "image: {{ .Values.image.repository }}";
        assert_eq!(renderer.render(body, &context()), body);
    }
}
