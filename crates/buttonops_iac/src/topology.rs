//! Messaging topology model.
//!
//! A [`MessagingTopology`] describes the Service Bus namespace layout driving
//! dynamic generation: the SKU tier plus the ordered queue and topic name
//! lists. Raw names are kept verbatim for the provisioned entity names; the
//! Terraform resource keys use sanitized identifiers, and two raw names that
//! sanitize to the same identifier are rejected before anything is written.

use std::str::FromStr;

use crate::error::{IacError, IacResult};

/// Service Bus namespace SKU tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkuTier {
    Basic,
    Standard,
    Premium,
}

impl SkuTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkuTier::Basic => "Basic",
            SkuTier::Standard => "Standard",
            SkuTier::Premium => "Premium",
        }
    }

    /// Premium namespaces get partitioned entities and explicit capacity.
    pub fn is_premium(&self) -> bool {
        matches!(self, SkuTier::Premium)
    }
}

impl FromStr for SkuTier {
    type Err = IacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(SkuTier::Basic),
            "Standard" => Ok(SkuTier::Standard),
            "Premium" => Ok(SkuTier::Premium),
            other => Err(IacError::InvalidTier(other.to_string())),
        }
    }
}

impl std::fmt::Display for SkuTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Queue/topic layout plus namespace parameters for one Service Bus.
#[derive(Debug, Clone)]
pub struct MessagingTopology {
    pub namespace: String,
    pub resource_group: String,
    pub location: String,
    pub sku: SkuTier,
    pub queues: Vec<String>,
    pub topics: Vec<String>,
}

impl MessagingTopology {
    pub const DEFAULT_QUEUES: &'static str = "orders,notifications";
    pub const DEFAULT_TOPICS: &'static str = "events,updates";

    /// Build a topology with the default queue and topic sets.
    pub fn new(
        namespace: impl Into<String>,
        resource_group: impl Into<String>,
        location: impl Into<String>,
        sku: SkuTier,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            resource_group: resource_group.into(),
            location: location.into(),
            sku,
            queues: parse_entity_list(Self::DEFAULT_QUEUES),
            topics: parse_entity_list(Self::DEFAULT_TOPICS),
        }
    }

    /// Replace the queue list from comma-separated input.
    pub fn with_queues(mut self, raw: &str) -> Self {
        self.queues = parse_entity_list(raw);
        self
    }

    /// Replace the topic list from comma-separated input.
    pub fn with_topics(mut self, raw: &str) -> Self {
        self.topics = parse_entity_list(raw);
        self
    }

    /// Check that sanitized identifiers are unique within the queue set and
    /// within the topic set independently.
    pub fn validate(&self) -> IacResult<()> {
        detect_collisions("queue", &self.queues)?;
        detect_collisions("topic", &self.topics)?;
        Ok(())
    }
}

/// Split comma-separated entity names, trimming whitespace and dropping
/// empty segments.
pub fn parse_entity_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map a raw entity name to a Terraform-safe resource identifier.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn detect_collisions(kind: &'static str, names: &[String]) -> IacResult<()> {
    for (i, name) in names.iter().enumerate() {
        let identifier = sanitize(name);
        let colliding: Vec<String> = names
            .iter()
            .filter(|other| sanitize(other) == identifier)
            .cloned()
            .collect();
        if colliding.len() > 1 {
            // Report on the first member of the colliding group only.
            if names[..i].iter().all(|prev| sanitize(prev) != identifier) {
                return Err(IacError::DuplicateIdentifier {
                    kind,
                    identifier,
                    names: colliding,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_round_trip() {
        for tier in [SkuTier::Basic, SkuTier::Standard, SkuTier::Premium] {
            assert_eq!(tier.as_str().parse::<SkuTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_tier_parse_rejects_unknown() {
        let err = "Invalid".parse::<SkuTier>().unwrap_err();
        assert!(matches!(err, IacError::InvalidTier(ref s) if s == "Invalid"));
        // Case matters: the IaC validation constraint is exact.
        assert!("premium".parse::<SkuTier>().is_err());
    }

    #[test]
    fn test_parse_entity_list_trims_and_drops_empties() {
        assert_eq!(
            parse_entity_list(" orders , notifications ,, "),
            vec!["orders", "notifications"]
        );
        assert!(parse_entity_list("").is_empty());
    }

    #[test]
    fn test_sanitize_replaces_non_alphanumerics() {
        assert_eq!(sanitize("order.created"), "order_created");
        assert_eq!(sanitize("order-updated"), "order_updated");
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn test_default_topology() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Basic);
        assert_eq!(topology.queues, vec!["orders", "notifications"]);
        assert_eq!(topology.topics, vec!["events", "updates"]);
        topology.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_queue_collisions() {
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Standard)
            .with_queues("order.created,order-created");

        let err = topology.validate().unwrap_err();
        match err {
            IacError::DuplicateIdentifier {
                kind,
                identifier,
                names,
            } => {
                assert_eq!(kind, "queue");
                assert_eq!(identifier, "order_created");
                assert_eq!(names, vec!["order.created", "order-created"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_queue_and_topic_sets_collide_independently() {
        // The same identifier may appear once as a queue and once as a topic.
        let topology = MessagingTopology::new("orders-api-dev-servicebus", "rg", "westeurope", SkuTier::Standard)
            .with_queues("audit")
            .with_topics("audit");
        topology.validate().unwrap();
    }
}
