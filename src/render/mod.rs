//! # Rendering Capabilities
//!
//! The narrow contracts between the widgets and the outside world. The
//! widgets never touch a real graph library, chart library or DOM; they call
//! these traits.
//!
//! | Capability | Consumer | Contract |
//! |------------|----------|----------|
//! | `GraphRenderer` | graph widget | `set_data(nodes, edges)`, `fit()` |
//! | `RendererLoader` | site boot | loads a `GraphRenderer` on demand |
//! | `ChartEngine` | skills widget | `render(container, config)` |
//! | `Document` | every widget | container content + visibility |
//!
//! `memory` holds recording implementations for tests and headless use.

pub mod chart;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::model::EntityId;
use crate::Result;

pub use chart::{ChartConfig, ChartData, ChartDataset, ChartKind, ChartOptions, RadialScale, Scales};

// ============================================================================
// Renderer-ready records
// ============================================================================

/// A node as the graph renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: EntityId,
    pub label: String,
    /// Rich-text hover tooltip (`<b>name</b><br>category<br>description`).
    pub tooltip: String,
    pub category: String,
    /// Visual group. Same as the category.
    pub group: String,
}

/// A directed, labeled edge as the graph renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: EntityId,
    pub target: EntityId,
    pub label: String,
}

// ============================================================================
// Graph renderer
// ============================================================================

/// Physics parameters handed to the renderer at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub enabled: bool,
    pub gravitational_constant: f64,
    pub spring_length: f64,
    pub spring_constant: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            enabled: true,
            gravitational_constant: -25_000.0,
            spring_length: 180.0,
            spring_constant: 0.04,
        }
    }
}

/// Options for a graph renderer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Category names, one visual group each.
    pub groups: Vec<String>,
    pub physics: Physics,
    pub hover: bool,
    pub navigation_buttons: bool,
    pub tooltip_delay_ms: u32,
    pub directed_edges: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            physics: Physics::default(),
            hover: true,
            navigation_buttons: true,
            tooltip_delay_ms: 100,
            directed_edges: true,
        }
    }
}

/// A live graph view.
///
/// `set_data` is a full replace: whatever was displayed before is gone.
pub trait GraphRenderer: Send {
    /// Replace the displayed dataset.
    fn set_data(&mut self, nodes: &[NodeRecord], edges: &[EdgeRecord]);

    /// Refit the viewport to everything currently displayed.
    fn fit(&mut self);
}

/// Makes a graph renderer available, e.g. by loading its script on demand.
///
/// Failure is `Error::CapabilityUnavailable`.
#[async_trait]
pub trait RendererLoader: Send + Sync {
    async fn load_graph_renderer(
        &self,
        container: &str,
        options: &GraphOptions,
    ) -> Result<Box<dyn GraphRenderer>>;
}

// ============================================================================
// Chart engine
// ============================================================================

/// A charting library.
pub trait ChartEngine: Send + Sync {
    /// Draw `config` into `container`, replacing any earlier chart there.
    fn render(&self, container: &str, config: &ChartConfig) -> Result<()>;
}

// ============================================================================
// Document
// ============================================================================

/// The page: designated containers addressed by element id.
///
/// Methods take `&self` so independent widgets can write concurrently.
/// Every mutator returns `false` when the element does not exist, which the
/// widgets treat as "this page has no such view".
pub trait Document: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    /// Replace an element's content with trusted markup.
    fn set_inner_html(&self, id: &str, html: &str) -> bool;

    fn set_visible(&self, id: &str, visible: bool) -> bool;
}
