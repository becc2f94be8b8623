//! Relationship (edge) between two entities.

use serde::{Deserialize, Serialize};
use super::EntityId;

/// A directed, labeled edge `source -[relationship]-> target`.
///
/// Endpoints are not checked against the entity list. An edge whose endpoint
/// is missing or filtered out is simply never visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: EntityId,
    pub target: EntityId,
    #[serde(rename = "relationship", default)]
    pub label: String,
}

impl Relationship {
    pub fn new(
        source: impl Into<EntityId>,
        target: impl Into<EntityId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}
