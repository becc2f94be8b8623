//! # Dataset Model
//!
//! Typed schemas for the three JSON documents the site loads.
//! These types cross every boundary: loader ↔ widget ↔ renderer.
//!
//! Design rule: this module is pure data: no I/O, no state, no async.
//! Shape mismatches are rejected by serde at the load boundary; the
//! [`Dataset::validate`] hook catches what serde cannot express.

pub mod entity;
pub mod relationship;
pub mod skill;
pub mod habit;

pub use entity::{Entity, EntityId};
pub use relationship::Relationship;
pub use skill::Skill;
pub use habit::{HabitDataset, HabitDay, HabitMonth};

use hashbrown::HashSet;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// ============================================================================
// Dataset contract
// ============================================================================

/// A document that can be fetched by the loader.
pub trait Dataset: DeserializeOwned + Send + 'static {
    /// Short name used in log lines.
    const KIND: &'static str;

    /// Semantic checks beyond the serde shape. Returns a human-readable reason.
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

// ============================================================================
// Relationship dataset
// ============================================================================

/// `{ entities: [...], relationships: [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDataset {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl GraphDataset {
    pub fn new(entities: Vec<Entity>, relationships: Vec<Relationship>) -> Self {
        Self { entities, relationships }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entities
            .iter()
            .filter(|e| seen.insert(e.category.as_str()))
            .map(|e| e.category.clone())
            .collect()
    }
}

impl Dataset for GraphDataset {
    const KIND: &'static str = "relationship graph";

    fn validate(&self) -> std::result::Result<(), String> {
        let mut ids = HashSet::with_capacity(self.entities.len());
        for entity in &self.entities {
            if !ids.insert(&entity.id) {
                return Err(format!("duplicate entity id '{}'", entity.id));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Skills dataset
// ============================================================================

/// `{ skills: [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsDataset {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl SkillsDataset {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }
}

impl Dataset for SkillsDataset {
    const KIND: &'static str = "skills";
}

// ============================================================================
// Habit dataset
// ============================================================================

impl Dataset for HabitDataset {
    const KIND: &'static str = "writing habit";

    fn validate(&self) -> std::result::Result<(), String> {
        for m in &self.months {
            if !(1..=12).contains(&m.month) {
                return Err(format!("month {} out of range 1-12", m.month));
            }
            for d in &m.days {
                if self.date_of(m.month, d.day).is_none() {
                    return Err(format!("{}-{:02}-{:02} is not a calendar date", self.year, m.month, d.day));
                }
            }
        }
        Ok(())
    }
}
