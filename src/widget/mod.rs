//! # Widgets
//!
//! Each widget is a transform from one dataset into renderer calls and
//! document writes. `build` functions are pure; `render`/`initialize`
//! perform the writes.

pub mod filter;
pub mod graph;
pub mod skills;
pub mod heatmap;

pub use filter::{visible_set, FilterState, VisibleSet};
pub use graph::{DetailView, GraphHandle, GraphStats};
pub use skills::{SkillItem, SkillsView};
pub use heatmap::{HabitStats, HeatmapCell, HeatmapItem, HeatmapView};
