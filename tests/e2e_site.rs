//! End-to-end tests for booting the whole page.
//!
//! Each test exercises: fetch -> parse -> validate -> transform -> render
//! against the in-memory source, document, renderer and chart engine.

use folio_widgets::render::memory::{MemoryDocument, MemoryRendererLoader, RecordingChartEngine};
use folio_widgets::{ChartEngine, Error, LoadCause, MemorySource, Site, SiteConfig, WidgetKind};
use pretty_assertions::assert_eq;

// ============================================================================
// Helpers
// ============================================================================

const KG: &str = include_str!("fixtures/data/linkedin_kg.json");
const SKILLS: &str = include_str!("fixtures/data/matrices.json");
const HABIT: &str = include_str!("fixtures/data/writing_habit.json");

fn full_source() -> MemorySource {
    MemorySource::new()
        .with_resource("data/linkedin_kg.json", KG)
        .with_resource("data/matrices.json", SKILLS)
        .with_resource("data/writing_habit.json", HABIT)
}

fn full_page(config: &SiteConfig) -> MemoryDocument {
    MemoryDocument::with_elements([
        config.graph.container.clone(),
        config.graph.modal.clone(),
        config.graph.modal_body.clone(),
        config.skills.radar.clone(),
        config.skills.list.clone(),
        config.habit.heatmap.clone(),
        config.habit.summary.clone(),
        config.habit.kpi.clone(),
    ])
}

// ============================================================================
// 1. Everything present: all three widgets render
// ============================================================================

#[tokio::test]
async fn test_boot_renders_all_widgets() {
    let site = Site::in_memory(full_source());
    let page = full_page(site.config());
    let renderers = MemoryRendererLoader::new();
    let probe = renderers.probe();
    let charts = RecordingChartEngine::new();

    let boot = site
        .boot(&page, &renderers, Some(&charts as &dyn ChartEngine))
        .await;
    assert!(boot.failures.is_empty(), "unexpected failures: {:?}", boot.failures);

    // Graph: 6 nodes, 6 of 7 edges (one names a missing entity)
    let graph = boot.graph.expect("graph");
    assert_eq!(graph.stats().entities, 6);
    assert_eq!(graph.stats().relationships, 7);
    assert_eq!(probe.node_ids().len(), 6);
    assert_eq!(probe.edge_count(), 6);
    let state = probe.snapshot();
    assert_eq!(state.container, "career-graph");
    assert_eq!(
        state.options.unwrap().groups,
        vec!["Person", "Institution", "Skill", "Program", "Habit"]
    );

    // Skills: radar + list
    let chart = charts.chart("skills-radar").expect("radar drawn");
    assert_eq!(chart.data.labels.len(), 4);
    assert_eq!(chart.values(), &[8.0, 7.0, 9.0, 5.5]);
    let list = page.content("skills-list").unwrap();
    assert_eq!(list.matches("<li").count(), 4);
    assert!(list.contains("(Lv.5.5)"));

    // Habit: 1,1,1,1,0,1,1 → total 6, days 7, streak 4, rate 86
    let habit = boot.habit.expect("heatmap");
    assert_eq!(habit.stats.total, 6);
    assert_eq!(habit.stats.days, 7);
    assert_eq!(habit.stats.max_streak, 4);
    assert_eq!(habit.stats.completion_rate(), 86);
    let summary = page.content("writing-summary").unwrap();
    assert!(summary.contains("<b>86%</b>"));
    assert!(page.content("writing-project-kpi").unwrap().contains("<b>4</b>"));
}

// ============================================================================
// 2. One fetch failure does not stop the other widgets
// ============================================================================

#[tokio::test]
async fn test_fetch_failure_is_isolated() {
    for broken in ["data/linkedin_kg.json", "data/matrices.json", "data/writing_habit.json"] {
        let source = full_source();
        source.fail(broken, "connection reset");
        let site = Site::in_memory(source);
        let page = full_page(site.config());
        let charts = RecordingChartEngine::new();

        let boot = site
            .boot(&page, &MemoryRendererLoader::new(), Some(&charts as &dyn ChartEngine))
            .await;

        assert_eq!(boot.failures.len(), 1, "broken = {broken}");
        let (kind, error) = &boot.failures[0];
        match error {
            Error::Load(e) => {
                assert_eq!(e.path, format!("./{broken}"));
                assert!(matches!(e.cause, LoadCause::Fetch(_)));
            }
            other => panic!("expected load error, got {other:?}"),
        }

        assert_eq!(boot.graph.is_some(), *kind != WidgetKind::Graph);
        assert_eq!(boot.skills.is_some(), *kind != WidgetKind::Skills);
        assert_eq!(boot.habit.is_some(), *kind != WidgetKind::Habit);
    }
}

#[tokio::test]
async fn test_failed_widget_leaves_container_untouched() {
    let source = full_source();
    source.insert("data/writing_habit.json", "{ broken");
    let site = Site::in_memory(source);
    let page = full_page(site.config());

    let boot = site.boot(&page, &MemoryRendererLoader::new(), None).await;
    assert!(boot.failed(WidgetKind::Habit));
    assert_eq!(page.content("writing-heatmap").as_deref(), Some(""));
    assert_eq!(page.content("writing-summary").as_deref(), Some(""));
}

// ============================================================================
// 3. Missing capabilities / containers
// ============================================================================

#[tokio::test]
async fn test_renderer_unavailable_only_loses_graph() {
    let site = Site::in_memory(full_source());
    let page = full_page(site.config());

    let boot = site
        .boot(&page, &MemoryRendererLoader::unavailable("script blocked"), None)
        .await;

    assert!(boot.graph.is_none());
    assert!(boot.failed(WidgetKind::Graph));
    assert!(boot.skills.is_some());
    assert!(boot.habit.is_some());
}

#[tokio::test]
async fn test_chart_failure_only_loses_skills() {
    let site = Site::in_memory(full_source());
    let page = full_page(site.config());
    let charts = RecordingChartEngine::failing("canvas unsupported");

    let boot = site
        .boot(&page, &MemoryRendererLoader::new(), Some(&charts as &dyn ChartEngine))
        .await;

    assert!(boot.skills.is_none());
    assert!(matches!(
        boot.failures.as_slice(),
        [(WidgetKind::Skills, Error::Render(_))]
    ));
    assert_eq!(page.content("skills-list").as_deref(), Some(""));
    assert!(boot.graph.is_some());
    assert!(boot.habit.is_some());
}

#[tokio::test]
async fn test_page_without_widgets() {
    let site = Site::in_memory(full_source());
    let page = MemoryDocument::new();

    let boot = site.boot(&page, &MemoryRendererLoader::new(), None).await;
    assert!(boot.failures.is_empty());
    assert!(boot.graph.is_none());
    assert!(boot.habit.is_none());
    // The skills view is still computed; there is just nowhere to put it.
    assert!(boot.skills.is_some());
}

// ============================================================================
// 4. Configured paths and containers
// ============================================================================

#[tokio::test]
async fn test_custom_config() {
    let config = SiteConfig::from_json(
        r#"{
            "skills": {"resource": "/api/skills.json", "list": "my-skills"},
            "habit": {"heatmap": "my-heatmap"}
        }"#,
    )
    .unwrap();
    let source = full_source().with_resource("api/skills.json", SKILLS);
    let site = Site::in_memory(source).with_config(config);
    let page = MemoryDocument::with_elements(["my-skills", "my-heatmap"]);

    let boot = site.boot(&page, &MemoryRendererLoader::new(), None).await;
    assert!(boot.failures.is_empty());
    assert!(page.content("my-skills").unwrap().contains("Curriculum Design"));
    assert!(page.content("my-heatmap").unwrap().contains("heatmap-cell"));
}

// ============================================================================
// 5. Interaction after boot
// ============================================================================

#[tokio::test]
async fn test_search_select_reset_after_boot() {
    let site = Site::in_memory(full_source());
    let page = full_page(site.config());
    let renderers = MemoryRendererLoader::new();
    let probe = renderers.probe();

    let boot = site.boot(&page, &renderers, None).await;
    let mut graph = boot.graph.expect("graph");

    graph.set_query("machine learning");
    assert_eq!(probe.node_ids(), vec!["prog1"]);
    assert_eq!(probe.edge_count(), 0);

    assert!(graph.open_detail(&page, &site.config().graph, &"prog1".into()));
    let body = page.content("node-modal-body").unwrap();
    assert!(body.contains("AI Bootcamp"));
    assert!(body.contains("Type: Program"));
    assert!(body.contains("applied machine learning course"));

    graph.reset();
    assert_eq!(probe.node_ids().len(), 6);
    assert_eq!(probe.snapshot().fit_calls, 1);
}
