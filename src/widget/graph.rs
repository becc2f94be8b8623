//! Relationship graph widget.
//!
//! ```text
//! GraphDataset → initialize() → GraphHandle ──set_data──▶ GraphRenderer
//!                                   ▲
//!        query input / checkbox ────┘ apply_filter() → full replace
//! ```
//!
//! The handle owns the original records, the filter state and the renderer.
//! Every event handler goes through it; there is no module-level state.

use crate::config::GraphConfig;
use crate::html;
use crate::model::{EntityId, GraphDataset};
use crate::render::{Document, EdgeRecord, GraphRenderer, NodeRecord};
use super::filter::{visible_set, FilterState, VisibleSet};

// ============================================================================
// Record construction
// ============================================================================

/// Renderer-ready node records, one per entity, in dataset order.
pub fn build_nodes(dataset: &GraphDataset) -> Vec<NodeRecord> {
    dataset
        .entities
        .iter()
        .map(|e| NodeRecord {
            id: e.id.clone(),
            label: e.name.clone(),
            tooltip: format!("<b>{}</b><br>{}<br>{}", e.name, e.category, e.description),
            category: e.category.clone(),
            group: e.category.clone(),
        })
        .collect()
}

/// Renderer-ready edge records, one per relationship, in dataset order.
pub fn build_edges(dataset: &GraphDataset) -> Vec<EdgeRecord> {
    dataset
        .relationships
        .iter()
        .map(|r| EdgeRecord {
            source: r.source.clone(),
            target: r.target.clone(),
            label: r.label.clone(),
        })
        .collect()
}

/// Build the records, draw the unfiltered view, and hand back the handle.
pub fn initialize(dataset: &GraphDataset, renderer: Box<dyn GraphRenderer>) -> GraphHandle {
    let nodes = build_nodes(dataset);
    let edges = build_edges(dataset);
    let categories = dataset.categories();

    let mut handle = GraphHandle {
        filter: FilterState::all(categories.iter().cloned()),
        visible: VisibleSet::default(),
        nodes,
        edges,
        categories,
        renderer,
    };
    handle.refresh();

    tracing::info!(
        nodes = handle.nodes.len(),
        edges = handle.edges.len(),
        categories = handle.categories.len(),
        "relationship graph rendered"
    );
    handle
}

// ============================================================================
// Detail view
// ============================================================================

/// What the detail modal shows for a selected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: EntityId,
    pub label: String,
    pub category: String,
    /// Tooltip text with markup stripped; lines separated by `\n`.
    pub body: String,
}

impl DetailView {
    fn from_node(node: &NodeRecord) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            category: node.category.clone(),
            body: html::strip_tags(&node.tooltip),
        }
    }

    /// Modal body markup. All text is escaped.
    pub fn to_html(&self) -> String {
        let body = self
            .body
            .lines()
            .map(html::escape)
            .collect::<Vec<_>>()
            .join("<br>");
        format!(
            concat!(
                r#"<div class="node-detail">"#,
                r#"<div class="node-detail-title">{}</div>"#,
                r#"<div class="node-detail-type">Type: {}</div>"#,
                r#"<div class="node-detail-body">{}</div>"#,
                "</div>",
            ),
            html::escape(&self.label),
            html::escape(&self.category),
            body,
        )
    }
}

// ============================================================================
// Handle
// ============================================================================

/// Counts for a summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub entities: usize,
    pub relationships: usize,
    pub visible_nodes: usize,
    pub visible_edges: usize,
}

/// A rendered relationship graph and its live filter.
pub struct GraphHandle {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    /// Every category in the dataset, first-seen order.
    categories: Vec<String>,
    filter: FilterState,
    visible: VisibleSet,
    renderer: Box<dyn GraphRenderer>,
}

impl std::fmt::Debug for GraphHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphHandle")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("filter", &self.filter)
            .field("visible_nodes", &self.visible.nodes.len())
            .field("visible_edges", &self.visible.edges.len())
            .finish_non_exhaustive()
    }
}

impl GraphHandle {
    /// Replace the filter and redraw.
    pub fn apply_filter<I, S>(&mut self, query: &str, enabled: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = FilterState::new(query, enabled);
        self.refresh();
    }

    /// Search-box input.
    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
        self.refresh();
    }

    /// Category checkbox change.
    pub fn set_category_enabled(&mut self, category: &str, enabled: bool) {
        self.filter.set_enabled(category, enabled);
        self.refresh();
    }

    /// Empty query, every category on, viewport refit.
    ///
    /// Shows every node and every edge whose endpoints both exist, the same
    /// projection `initialize` drew.
    pub fn reset(&mut self) {
        self.filter = FilterState::all(self.categories.iter().cloned());
        self.refresh();
        self.renderer.fit();
        tracing::debug!("relationship graph reset");
    }

    /// Look up a clicked node. Hidden nodes are still selectable by id.
    pub fn select(&self, id: &EntityId) -> Option<DetailView> {
        self.nodes.iter().find(|n| &n.id == id).map(DetailView::from_node)
    }

    /// Fill the modal body for `id` and show the modal.
    ///
    /// Returns `false` (and changes nothing) for an unknown id or when the
    /// page has no modal.
    pub fn open_detail(&self, document: &dyn Document, config: &GraphConfig, id: &EntityId) -> bool {
        let Some(detail) = self.select(id) else {
            return false;
        };
        if !document.has_element(&config.modal) || !document.has_element(&config.modal_body) {
            tracing::warn!(modal = %config.modal, "detail modal missing; selection ignored");
            return false;
        }
        document.set_inner_html(&config.modal_body, &detail.to_html());
        document.set_visible(&config.modal, true)
    }

    pub fn close_detail(&self, document: &dyn Document, config: &GraphConfig) -> bool {
        document.set_visible(&config.modal, false)
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            entities: self.nodes.len(),
            relationships: self.edges.len(),
            visible_nodes: self.visible.nodes.len(),
            visible_edges: self.visible.edges.len(),
        }
    }

    /// Recompute the projection and hand it to the renderer as a full replace.
    fn refresh(&mut self) {
        self.visible = visible_set(&self.nodes, &self.edges, &self.filter);
        self.renderer.set_data(&self.visible.nodes, &self.visible.edges);
        tracing::debug!(
            query = self.filter.query(),
            visible_nodes = self.visible.nodes.len(),
            visible_edges = self.visible.edges.len(),
            "graph filter applied"
        );
    }
}
