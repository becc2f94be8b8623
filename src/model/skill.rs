//! Skill records for the radar chart.

use serde::{Deserialize, Serialize};

/// A single skill with a proficiency level.
///
/// `level` is on a 0–10 scale by convention. Nothing clamps it; an
/// out-of-range level is drawn wherever the chart engine puts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: f64) -> Self {
        Self { name: name.into(), level, evidence: None }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// `Lv.7`, `Lv.7.5`.
    pub fn level_label(&self) -> String {
        format!("Lv.{}", self.level)
    }
}
