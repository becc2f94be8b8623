//! Skills widget: radar chart plus a textual list.
//!
//! One-shot: every call rebuilds both views from the given skills.

use crate::config::SkillsConfig;
use crate::html;
use crate::model::Skill;
use crate::render::{
    ChartConfig, ChartData, ChartDataset, ChartEngine, ChartKind, ChartOptions, Document,
    RadialScale, Scales,
};
use crate::Result;

/// One row of the skills list.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillItem {
    pub name: String,
    /// `Lv.7`
    pub level: String,
    /// Empty when the skill has no evidence.
    pub evidence: String,
}

/// Both projections of the skills dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsView {
    pub chart: ChartConfig,
    pub items: Vec<SkillItem>,
}

/// Radar config: one axis per skill name, one value per level.
pub fn chart_config(skills: &[Skill], dataset_label: &str) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Radar,
        data: ChartData {
            labels: skills.iter().map(|s| s.name.clone()).collect(),
            datasets: vec![ChartDataset {
                label: dataset_label.to_owned(),
                data: skills.iter().map(|s| s.level).collect(),
                fill: true,
                background_color: "rgba(63,81,181,0.15)".into(),
                border_color: "#3f51b5".into(),
                point_background_color: "#3f51b5".into(),
                point_border_color: "#fff".into(),
            }],
        },
        options: ChartOptions {
            responsive: true,
            scales: Scales {
                r: Some(RadialScale { suggested_min: 0.0, suggested_max: 10.0, step_size: 2.0 }),
            },
            show_legend: true,
        },
    }
}

pub fn build(skills: &[Skill], dataset_label: &str) -> SkillsView {
    SkillsView {
        chart: chart_config(skills, dataset_label),
        items: skills
            .iter()
            .map(|s| SkillItem {
                name: s.name.clone(),
                level: s.level_label(),
                evidence: s.evidence.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

impl SkillsView {
    /// `<li>` per skill, dataset order.
    pub fn list_html(&self) -> String {
        self.items
            .iter()
            .map(|item| {
                format!(
                    r#"<li class="skill-item"><div class="skill-name">{} <span class="skill-level">({})</span></div><div class="skill-evidence">{}</div></li>"#,
                    html::escape(&item.name),
                    html::escape(&item.level),
                    html::escape(&item.evidence),
                )
            })
            .collect()
    }
}

/// Build the view and write it to the page.
///
/// The chart is drawn only when both an engine and the radar element exist;
/// the list is written whenever the list element exists.
pub fn render(
    skills: &[Skill],
    document: &dyn Document,
    chart: Option<&dyn ChartEngine>,
    config: &SkillsConfig,
) -> Result<SkillsView> {
    let view = build(skills, &config.dataset_label);

    match chart {
        Some(engine) if document.has_element(&config.radar) => {
            engine.render(&config.radar, &view.chart)?;
        }
        Some(_) => tracing::warn!(container = %config.radar, "radar container missing"),
        None => tracing::warn!("no chart engine; skipping skills radar"),
    }

    if !document.set_inner_html(&config.list, &view.list_html()) {
        tracing::warn!(container = %config.list, "skills list container missing");
    }

    tracing::info!(skills = skills.len(), "skills rendered");
    Ok(view)
}
