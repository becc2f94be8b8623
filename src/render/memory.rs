//! In-memory capability implementations.
//!
//! These are the reference implementations of the rendering traits. They
//! record what they are asked to draw instead of drawing it.
//!
//! Use them for:
//! - Testing the widget transforms without a browser
//! - Headless pre-rendering of the page fragments
//!
//! Handles are cheap clones over shared state, so a test can keep a probe
//! after the renderer itself has been moved into a widget.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use crate::{Error, Result};
use super::{
    ChartConfig, ChartEngine, Document, EdgeRecord, GraphOptions, GraphRenderer, NodeRecord,
    RendererLoader,
};

// ============================================================================
// MemoryDocument
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
struct Element {
    content: String,
    visible: bool,
}

/// A page made of named, initially empty and visible elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Arc<RwLock<HashMap<String, Element>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that contains exactly these element ids.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let doc = Self::new();
        for id in ids {
            doc.add_element(id);
        }
        doc
    }

    pub fn add_element(&self, id: impl Into<String>) {
        self.elements
            .write()
            .entry(id.into())
            .or_insert_with(|| Element { content: String::new(), visible: true });
    }

    /// Current content of an element, `None` if it does not exist.
    pub fn content(&self, id: &str) -> Option<String> {
        self.elements.read().get(id).map(|e| e.content.clone())
    }

    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.read().get(id).map(|e| e.visible)
    }

    fn with_element(&self, id: &str, f: impl FnOnce(&mut Element)) -> bool {
        match self.elements.write().get_mut(id) {
            Some(el) => {
                f(el);
                true
            }
            None => false,
        }
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.read().contains_key(id)
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        self.with_element(id, |el| el.content = html.to_owned())
    }

    fn set_visible(&self, id: &str, visible: bool) -> bool {
        self.with_element(id, |el| el.visible = visible)
    }
}

// ============================================================================
// Recording graph renderer
// ============================================================================

/// What a recording renderer has been asked to do so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RendererState {
    pub container: String,
    pub options: Option<GraphOptions>,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub set_data_calls: usize,
    pub fit_calls: usize,
}

/// Read side of a recording renderer.
#[derive(Debug, Clone, Default)]
pub struct RendererProbe {
    state: Arc<Mutex<RendererState>>,
}

impl RendererProbe {
    pub fn snapshot(&self) -> RendererState {
        self.state.lock().clone()
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.state.lock().nodes.iter().map(|n| n.id.to_string()).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.state.lock().edges.len()
    }
}

/// Graph renderer that records the last displayed dataset.
#[derive(Debug, Clone, Default)]
pub struct RecordingGraphRenderer {
    state: Arc<Mutex<RendererState>>,
}

impl RecordingGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&self) -> RendererProbe {
        RendererProbe { state: Arc::clone(&self.state) }
    }
}

impl GraphRenderer for RecordingGraphRenderer {
    fn set_data(&mut self, nodes: &[NodeRecord], edges: &[EdgeRecord]) {
        let mut state = self.state.lock();
        state.nodes = nodes.to_vec();
        state.edges = edges.to_vec();
        state.set_data_calls += 1;
    }

    fn fit(&mut self) {
        self.state.lock().fit_calls += 1;
    }
}

/// Hands out a `RecordingGraphRenderer`, or fails as if the renderer's
/// script never loaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryRendererLoader {
    renderer: RecordingGraphRenderer,
    unavailable: Option<String>,
}

impl MemoryRendererLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self { renderer: RecordingGraphRenderer::new(), unavailable: Some(reason.into()) }
    }

    /// Probe onto the renderer this loader hands out.
    pub fn probe(&self) -> RendererProbe {
        self.renderer.probe()
    }
}

#[async_trait]
impl RendererLoader for MemoryRendererLoader {
    async fn load_graph_renderer(
        &self,
        container: &str,
        options: &GraphOptions,
    ) -> Result<Box<dyn GraphRenderer>> {
        if let Some(reason) = &self.unavailable {
            return Err(Error::CapabilityUnavailable {
                capability: "graph renderer".into(),
                reason: reason.clone(),
            });
        }
        {
            let mut state = self.renderer.state.lock();
            state.container = container.to_owned();
            state.options = Some(options.clone());
        }
        Ok(Box::new(self.renderer.clone()))
    }
}

// ============================================================================
// Recording chart engine
// ============================================================================

/// Chart engine that keeps the last config per container.
#[derive(Debug, Clone, Default)]
pub struct RecordingChartEngine {
    charts: Arc<RwLock<HashMap<String, ChartConfig>>>,
    failure: Option<String>,
}

impl RecordingChartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose every `render` call fails with `Error::Render`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self { failure: Some(reason.into()), ..Self::default() }
    }

    pub fn chart(&self, container: &str) -> Option<ChartConfig> {
        self.charts.read().get(container).cloned()
    }
}

impl ChartEngine for RecordingChartEngine {
    fn render(&self, container: &str, config: &ChartConfig) -> Result<()> {
        if let Some(reason) = &self.failure {
            return Err(Error::Render(format!("{container}: {reason}")));
        }
        self.charts.write().insert(container.to_owned(), config.clone());
        Ok(())
    }
}
