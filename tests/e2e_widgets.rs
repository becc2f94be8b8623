//! Skills and habit widgets driven from JSON documents.

use folio_widgets::render::memory::{MemoryDocument, RecordingChartEngine};
use folio_widgets::widget::{heatmap, skills};
use folio_widgets::{ChartEngine, Dataset, HabitDataset, HabitStats, SiteConfig, SkillsDataset};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Skills
// ============================================================================

#[test]
fn test_single_skill_axis_and_list() {
    let ds: SkillsDataset = serde_json::from_str(r#"{"skills": [{"name": "X", "level": 7}]}"#).unwrap();
    let config = SiteConfig::default().skills;
    let page = MemoryDocument::with_elements([config.radar.clone(), config.list.clone()]);
    let charts = RecordingChartEngine::new();

    skills::render(&ds.skills, &page, Some(&charts as &dyn ChartEngine), &config).unwrap();

    let chart = charts.chart(&config.radar).unwrap();
    assert_eq!(chart.data.labels, vec!["X"]);
    assert_eq!(chart.values(), &[7.0]);
    let list = page.content(&config.list).unwrap();
    assert_eq!(list.matches("<li").count(), 1);
    assert!(list.contains("Lv.7"));
}

#[test]
fn test_rerender_replaces() {
    let config = SiteConfig::default().skills;
    let page = MemoryDocument::with_elements([config.list.clone()]);

    let first: SkillsDataset = serde_json::from_str(
        r#"{"skills": [{"name": "A", "level": 1}, {"name": "B", "level": 2}]}"#,
    )
    .unwrap();
    skills::render(&first.skills, &page, None, &config).unwrap();

    let second: SkillsDataset =
        serde_json::from_str(r#"{"skills": [{"name": "C", "level": 3}]}"#).unwrap();
    skills::render(&second.skills, &page, None, &config).unwrap();

    let list = page.content(&config.list).unwrap();
    assert_eq!(list.matches("<li").count(), 1);
    assert!(!list.contains(">A "));
}

// ============================================================================
// Habit
// ============================================================================

fn habit(json: &str) -> HabitDataset {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_empty_habit_dataset() {
    let view = heatmap::build(&habit(r#"{"year": 2025, "months": []}"#));
    assert_eq!(view.stats, HabitStats::default());
    assert_eq!(view.stats.completion_rate(), 0);
    assert!(view.items.is_empty());
}

#[test]
fn test_worked_streak_example() {
    let view = heatmap::build(&habit(
        r#"{"year": 2025, "months": [{"month": 5, "days": [[1,true],[2,true],[3,false],[4,true],[5,true],[6,true]]}]}"#,
    ));
    assert_eq!(view.stats, HabitStats { total: 5, days: 6, max_streak: 3 });
    assert_eq!(view.stats.completion_rate(), 83);
}

#[test]
fn test_month_labels_precede_their_days() {
    let view = heatmap::build(&habit(
        r#"{"year": 2024, "months": [
            {"month": 11, "days": [[30, false]]},
            {"month": 12, "days": [[1, true], [2, true]]}
        ]}"#,
    ));
    let grid = view.grid_html();
    let nov = grid.find(">Nov<").unwrap();
    let dec = grid.find(">Dec<").unwrap();
    let nov30 = grid.find("2024-11-30").unwrap();
    let dec01 = grid.find("2024-12-01").unwrap();
    assert!(nov < nov30 && nov30 < dec && dec < dec01);
}

#[test]
fn test_leap_day_accepted() {
    let ds = habit(r#"{"year": 2024, "months": [{"month": 2, "days": [[29, true]]}]}"#);
    assert!(ds.validate().is_ok());
}

proptest! {
    #[test]
    fn prop_all_active_is_full_streak(n in 1usize..200) {
        let stats = HabitStats::from_flags(std::iter::repeat_n(true, n));
        prop_assert_eq!(stats.completion_rate(), 100);
        prop_assert_eq!(stats.max_streak, n);
        prop_assert_eq!(stats.days, n);
    }

    #[test]
    fn prop_streak_matches_longest_run(flags in prop::collection::vec(any::<bool>(), 0..64)) {
        let stats = HabitStats::from_flags(flags.iter().copied());

        let longest = flags
            .split(|active| !*active)
            .map(<[bool]>::len)
            .max()
            .unwrap_or(0);
        prop_assert_eq!(stats.max_streak, longest);
        prop_assert_eq!(stats.total, flags.iter().filter(|a| **a).count());
        prop_assert_eq!(stats.days, flags.len());
        prop_assert!(stats.completion_rate() <= 100);
    }
}
