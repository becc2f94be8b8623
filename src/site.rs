//! Composition root. Boots every widget against one page.
//!
//! The three widgets load independently: each one waits only on its own
//! fetch, and a failure in one is logged and contained while the others
//! still render.

use futures_util::future::join3;

use crate::config::SiteConfig;
use crate::loader::{load, MemorySource, ResourceSource};
use crate::model::{GraphDataset, HabitDataset, SkillsDataset};
use crate::render::{ChartEngine, Document, GraphOptions, RendererLoader};
use crate::widget::{graph, heatmap, skills, GraphHandle, HeatmapView, SkillsView};
use crate::{Error, Result};

/// Which widget a boot failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Graph,
    Skills,
    Habit,
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetKind::Graph => write!(f, "relationship graph"),
            WidgetKind::Skills => write!(f, "skills"),
            WidgetKind::Habit => write!(f, "writing habit"),
        }
    }
}

/// Outcome of booting the page.
///
/// A widget is `None` when it failed or its container is absent. Failures
/// are kept for inspection; they have already been logged.
#[derive(Debug, Default)]
pub struct Boot {
    pub graph: Option<GraphHandle>,
    pub skills: Option<SkillsView>,
    pub habit: Option<HeatmapView>,
    pub failures: Vec<(WidgetKind, Error)>,
}

impl Boot {
    pub fn failed(&self, kind: WidgetKind) -> bool {
        self.failures.iter().any(|(k, _)| *k == kind)
    }
}

/// A site wraps a resource source and the page configuration.
pub struct Site<S: ResourceSource> {
    source: S,
    config: SiteConfig,
}

impl<S: ResourceSource> Site<S> {
    pub fn with_source(source: S) -> Self {
        Self { source, config: SiteConfig::default() }
    }

    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the renderer, fetch the relationship dataset and draw it.
    ///
    /// `Ok(None)` when the page has no graph container.
    pub async fn load_graph(
        &self,
        document: &dyn Document,
        renderers: &dyn RendererLoader,
    ) -> Result<Option<GraphHandle>> {
        let cfg = &self.config.graph;
        if !document.has_element(&cfg.container) {
            tracing::warn!(container = %cfg.container, "graph container missing");
            return Ok(None);
        }

        let dataset: GraphDataset = load(&self.source, &cfg.resource).await?;
        let options = GraphOptions { groups: dataset.categories(), ..GraphOptions::default() };
        let renderer = renderers.load_graph_renderer(&cfg.container, &options).await?;
        Ok(Some(graph::initialize(&dataset, renderer)))
    }

    /// Fetch the skills dataset and draw the radar and list.
    pub async fn load_skills(
        &self,
        document: &dyn Document,
        chart: Option<&dyn ChartEngine>,
    ) -> Result<SkillsView> {
        let cfg = &self.config.skills;
        let dataset: SkillsDataset = load(&self.source, &cfg.resource).await?;
        skills::render(&dataset.skills, document, chart, cfg)
    }

    /// Fetch the habit dataset and draw the heatmap, summary and KPI.
    ///
    /// `Ok(None)` when the page has no heatmap container.
    pub async fn load_habit(&self, document: &dyn Document) -> Result<Option<HeatmapView>> {
        let cfg = &self.config.habit;
        let dataset: HabitDataset = load(&self.source, &cfg.resource).await?;
        Ok(heatmap::render(&dataset, document, cfg))
    }

    /// Boot all three widgets concurrently.
    pub async fn boot(
        &self,
        document: &dyn Document,
        renderers: &dyn RendererLoader,
        chart: Option<&dyn ChartEngine>,
    ) -> Boot {
        let (graph, skills, habit) = join3(
            self.load_graph(document, renderers),
            self.load_skills(document, chart),
            self.load_habit(document),
        )
        .await;

        let mut failures = Vec::new();
        let graph = contain(WidgetKind::Graph, graph, &mut failures).flatten();
        let skills = contain(WidgetKind::Skills, skills, &mut failures);
        let habit = contain(WidgetKind::Habit, habit, &mut failures).flatten();
        Boot { graph, skills, habit, failures }
    }
}

/// In-memory site for tests and embedding.
impl Site<MemorySource> {
    pub fn in_memory(source: MemorySource) -> Self {
        Self::with_source(source)
    }
}

fn contain<T>(kind: WidgetKind, result: Result<T>, failures: &mut Vec<(WidgetKind, Error)>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!(widget = %kind, %error, "widget failed to initialize");
            failures.push((kind, error));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::memory::{MemoryDocument, MemoryRendererLoader};

    #[tokio::test]
    async fn test_missing_graph_container_skips_fetch() {
        // No resources at all: a fetch would fail, so Ok(None) proves none happened.
        let site = Site::in_memory(MemorySource::new());
        let doc = MemoryDocument::new();
        let handle = site.load_graph(&doc, &MemoryRendererLoader::new()).await.unwrap();
        assert!(handle.is_none());
    }

    #[tokio::test]
    async fn test_capability_failure_is_contained() {
        let source = MemorySource::new()
            .with_resource("data/linkedin_kg.json", r#"{"entities": [], "relationships": []}"#);
        let site = Site::in_memory(source);
        let doc = MemoryDocument::with_elements([site.config().graph.container.clone()]);

        let boot = site
            .boot(&doc, &MemoryRendererLoader::unavailable("blocked"), None)
            .await;
        assert!(boot.graph.is_none());
        assert!(boot.failed(WidgetKind::Graph));
        assert!(matches!(
            boot.failures.iter().find(|(k, _)| *k == WidgetKind::Graph),
            Some((_, Error::CapabilityUnavailable { .. }))
        ));
    }

    #[test]
    fn test_widget_kind_display() {
        assert_eq!(WidgetKind::Habit.to_string(), "writing habit");
    }
}
