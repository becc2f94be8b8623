//! Site configuration: where each dataset lives and which elements each
//! widget writes into.
//!
//! Defaults match the published site. Any subset can be overridden from
//! JSON; missing fields keep their defaults.
//!
//! ```
//! use folio_widgets::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{"skills": {"resource": "./skills.json"}}"#).unwrap();
//! assert_eq!(config.skills.resource, "./skills.json");
//! assert_eq!(config.skills.list, "skills-list");
//! ```

use serde::{Deserialize, Serialize};

/// Relationship graph widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub resource: String,
    pub container: String,
    pub modal: String,
    pub modal_body: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            resource: "./data/linkedin_kg.json".into(),
            container: "career-graph".into(),
            modal: "node-modal".into(),
            modal_body: "node-modal-body".into(),
        }
    }
}

/// Skills radar + list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub resource: String,
    pub radar: String,
    pub list: String,
    /// Legend text of the radar dataset.
    pub dataset_label: String,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            resource: "./data/matrices.json".into(),
            radar: "skills-radar".into(),
            list: "skills-list".into(),
            dataset_label: "Proficiency (out of 10)".into(),
        }
    }
}

/// Writing-habit heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitConfig {
    pub resource: String,
    pub heatmap: String,
    pub summary: String,
    /// KPI line on the project card.
    pub kpi: String,
}

impl Default for HabitConfig {
    fn default() -> Self {
        Self {
            resource: "./data/writing_habit.json".into(),
            heatmap: "writing-heatmap".into(),
            summary: "writing-summary".into(),
            kpi: "writing-project-kpi".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub graph: GraphConfig,
    pub skills: SkillsConfig,
    pub habit: HabitConfig,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
