//! Boot the page from dataset files on disk.

#![cfg(feature = "fs")]

use folio_widgets::render::memory::{MemoryDocument, MemoryRendererLoader};
use folio_widgets::{load, DirSource, GraphDataset, HabitDataset, LoadCause, Site};

fn fixtures() -> DirSource {
    DirSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

#[tokio::test]
async fn test_load_fixture_files() {
    let source = fixtures();
    let kg: GraphDataset = load(&source, "./data/linkedin_kg.json").await.unwrap();
    assert_eq!(kg.entities.len(), 6);

    let habit: HabitDataset = load(&source, "./data/writing_habit.json").await.unwrap();
    assert_eq!(habit.year, 2025);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let err = load::<GraphDataset, _>(&fixtures(), "./data/nope.json").await.unwrap_err();
    assert!(matches!(err.cause, LoadCause::NotFound));
}

#[tokio::test]
async fn test_boot_from_directory() {
    let site = Site::with_source(fixtures());
    let config = site.config().clone();
    let page = MemoryDocument::with_elements([
        config.graph.container,
        config.skills.list,
        config.habit.heatmap,
        config.habit.summary,
    ]);

    let boot = site.boot(&page, &MemoryRendererLoader::new(), None).await;
    assert!(boot.failures.is_empty(), "{:?}", boot.failures);
    assert!(boot.graph.is_some());
    assert_eq!(boot.skills.unwrap().items.len(), 4);
    assert_eq!(boot.habit.unwrap().stats.max_streak, 4);
}
