//! Graph filter: text query AND category membership.
//!
//! The visible view is always a pure function of
//! `(all nodes, all edges, FilterState)`. Nothing here is incremental.

use hashbrown::HashSet;
use crate::model::EntityId;
use crate::render::{EdgeRecord, NodeRecord};

/// Current search text and enabled categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Trimmed, lowercased query. Empty means "no text constraint".
    query: String,
    enabled: HashSet<String>,
}

impl FilterState {
    /// Empty query with every given category enabled.
    pub fn all<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("", categories)
    }

    pub fn new<I, S>(query: &str, enabled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            query: normalize_query(query),
            enabled: enabled.into_iter().map(Into::into).collect(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = normalize_query(query);
    }

    pub fn is_enabled(&self, category: &str) -> bool {
        self.enabled.contains(category)
    }

    /// Checkbox toggle.
    pub fn set_enabled(&mut self, category: &str, enabled: bool) {
        if enabled {
            self.enabled.insert(category.to_owned());
        } else {
            self.enabled.remove(category);
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }

    /// Does `node` pass both the category and the text constraint?
    ///
    /// The query is a case-insensitive substring of the label or of the
    /// tooltip as rendered rich text, markup included.
    pub fn matches(&self, node: &NodeRecord) -> bool {
        if !self.enabled.contains(&node.category) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        node.label.to_lowercase().contains(&self.query)
            || node.tooltip.to_lowercase().contains(&self.query)
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// The projection currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleSet {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl VisibleSet {
    pub fn contains_node(&self, id: &EntityId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }
}

/// Recompute the visible projection from scratch.
///
/// Edges survive only when both endpoints survive, so the result never
/// contains a dangling edge, including edges whose endpoint was never an
/// entity at all.
pub fn visible_set(nodes: &[NodeRecord], edges: &[EdgeRecord], state: &FilterState) -> VisibleSet {
    let nodes: Vec<NodeRecord> = nodes.iter().filter(|n| state.matches(n)).cloned().collect();

    let edges: Vec<EdgeRecord> = {
        let ids: HashSet<&EntityId> = nodes.iter().map(|n| &n.id).collect();
        edges
            .iter()
            .filter(|e| ids.contains(&e.source) && ids.contains(&e.target))
            .cloned()
            .collect()
    };

    VisibleSet { nodes, edges }
}
