//! # folio-widgets: Data-bound Portfolio Widgets
//!
//! The client-side core of a portfolio page: three static JSON documents in,
//! three interactive views out.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `ResourceSource`, `GraphRenderer`, `ChartEngine` and
//!    `Document` are the contracts with the outside world
//! 2. **Typed datasets**: every document is a serde schema, validated at the
//!    load boundary
//! 3. **Pure transforms**: widget `build` functions own no I/O
//! 4. **Explicit handles**: interactive state lives in a `GraphHandle`, not
//!    in globals
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio_widgets::{Site, MemorySource};
//! use folio_widgets::render::memory::{MemoryDocument, MemoryRendererLoader};
//!
//! # async fn example() {
//! let source = MemorySource::new()
//!     .with_resource("data/matrices.json", r#"{"skills": [{"name": "Rust", "level": 7}]}"#);
//! let site = Site::in_memory(source);
//! let page = MemoryDocument::with_elements(["skills-list"]);
//!
//! let boot = site.boot(&page, &MemoryRendererLoader::new(), None).await;
//! assert!(boot.skills.is_some());
//!
//! if let Some(mut graph) = boot.graph {
//!     graph.set_query("rust");
//!     graph.reset();
//! }
//! # }
//! ```
//!
//! ## Resource Sources
//!
//! | Source | Feature | Description |
//! |--------|---------|-------------|
//! | Memory | (default) | In-memory map for tests/embedding |
//! | Dir | `fs` | Files under a local directory |
//! | Http | `http` | GET relative to a base URL |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod loader;
pub mod render;
pub mod widget;
pub mod config;
pub mod chrome;
pub mod html;
pub mod site;

// ============================================================================
// Re-exports: Model (the datasets)
// ============================================================================

pub use model::{
    Dataset, Entity, EntityId, GraphDataset, HabitDataset, HabitDay, HabitMonth,
    Relationship, Skill, SkillsDataset,
};

// ============================================================================
// Re-exports: Loading
// ============================================================================

pub use loader::{load, LoadCause, LoadError, MemorySource, ResourceSource};
#[cfg(feature = "fs")]
pub use loader::DirSource;
#[cfg(feature = "http")]
pub use loader::HttpSource;

// ============================================================================
// Re-exports: Rendering + widgets
// ============================================================================

pub use render::{
    ChartConfig, ChartEngine, Document, EdgeRecord, GraphOptions, GraphRenderer, NodeRecord,
    RendererLoader,
};
pub use widget::{
    DetailView, FilterState, GraphHandle, GraphStats, HabitStats, HeatmapView, SkillsView,
    VisibleSet,
};
pub use config::SiteConfig;
pub use site::{Boot, Site, WidgetKind};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{capability} unavailable: {reason}")]
    CapabilityUnavailable { capability: String, reason: String },

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
