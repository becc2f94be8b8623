//! Writing-habit heatmap.
//!
//! Emits a month label followed by that month's day cells, and computes the
//! attendance statistics in the same left-to-right pass over every day of
//! every month, in dataset order.

use crate::config::HabitConfig;
use crate::html;
use crate::model::HabitDataset;
use crate::render::Document;

// ============================================================================
// Statistics
// ============================================================================

/// Attendance totals over a whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HabitStats {
    /// Active days.
    pub total: usize,
    /// All days.
    pub days: usize,
    /// Longest run of consecutive active days.
    pub max_streak: usize,
}

impl HabitStats {
    /// Run the streak pass over a flat sequence of active flags.
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut acc = StreakCounter::default();
        for active in flags {
            acc.push(active);
        }
        acc.finish()
    }

    /// `round(100 * total / days)`, 0 when there are no days.
    pub fn completion_rate(&self) -> u32 {
        if self.days == 0 {
            return 0;
        }
        (100.0 * self.total as f64 / self.days as f64).round() as u32
    }

    pub fn summary_html(&self) -> String {
        format!(
            "Wrote on <b>{}</b> of the last {} days · completion <b>{}%</b> · longest streak <b>{}</b> days",
            self.total,
            self.days,
            self.completion_rate(),
            self.max_streak,
        )
    }

    /// Highlight line for the project card.
    pub fn kpi_html(&self) -> String {
        format!(
            "<li>Longest streak <b>{}</b> days, <b>{}%</b> completion over the last {} days</li>",
            self.max_streak,
            self.completion_rate(),
            self.days,
        )
    }
}

/// The single-pass accumulator. Constant state regardless of input size.
#[derive(Debug, Default)]
struct StreakCounter {
    total: usize,
    days: usize,
    streak: usize,
    max_streak: usize,
}

impl StreakCounter {
    fn push(&mut self, active: bool) {
        self.days += 1;
        if active {
            self.total += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    fn finish(self) -> HabitStats {
        HabitStats { total: self.total, days: self.days, max_streak: self.max_streak }
    }
}

// ============================================================================
// Grid
// ============================================================================

/// One day square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapCell {
    pub month: u32,
    pub day: u32,
    pub active: bool,
    /// `2025-03-07 : written`
    pub tooltip: String,
}

/// Grid items in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeatmapItem {
    MonthLabel { month: u32, name: String },
    Day(HeatmapCell),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapView {
    pub items: Vec<HeatmapItem>,
    pub stats: HabitStats,
}

/// Columns a month label spans in the heatmap grid.
const LABEL_SPAN: u32 = 14;

pub fn build(dataset: &HabitDataset) -> HeatmapView {
    let mut items = Vec::new();
    let mut counter = StreakCounter::default();

    for month in &dataset.months {
        let name = month
            .short_name()
            .map(str::to_owned)
            .unwrap_or_else(|| month.month.to_string());
        items.push(HeatmapItem::MonthLabel { month: month.month, name });

        for d in &month.days {
            let date = match dataset.date_of(month.month, d.day) {
                Some(date) => date.format("%Y-%m-%d").to_string(),
                None => format!("{}-{:02}-{:02}", dataset.year, month.month, d.day),
            };
            let state = if d.active { "written" } else { "not written" };
            items.push(HeatmapItem::Day(HeatmapCell {
                month: month.month,
                day: d.day,
                active: d.active,
                tooltip: format!("{date} : {state}"),
            }));
            counter.push(d.active);
        }
    }

    HeatmapView { items, stats: counter.finish() }
}

impl HeatmapView {
    pub fn cells(&self) -> impl Iterator<Item = &HeatmapCell> {
        self.items.iter().filter_map(|item| match item {
            HeatmapItem::Day(cell) => Some(cell),
            HeatmapItem::MonthLabel { .. } => None,
        })
    }

    pub fn grid_html(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                HeatmapItem::MonthLabel { name, .. } => out.push_str(&format!(
                    r#"<div class="heatmap-month" style="grid-column: span {LABEL_SPAN}">{}</div>"#,
                    html::escape(name),
                )),
                HeatmapItem::Day(cell) => out.push_str(&format!(
                    r#"<div class="heatmap-cell{}" title="{}"></div>"#,
                    if cell.active { " active" } else { "" },
                    html::escape(&cell.tooltip),
                )),
            }
        }
        out
    }
}

/// Build the grid and statistics and write them to the page.
///
/// Without the heatmap container nothing is written, summary and KPI
/// included.
pub fn render(dataset: &HabitDataset, document: &dyn Document, config: &HabitConfig) -> Option<HeatmapView> {
    if !document.has_element(&config.heatmap) {
        tracing::warn!(container = %config.heatmap, "heatmap container missing");
        return None;
    }

    let view = build(dataset);
    document.set_inner_html(&config.heatmap, &view.grid_html());
    document.set_inner_html(&config.summary, &view.stats.summary_html());
    document.set_inner_html(&config.kpi, &view.stats.kpi_html());

    tracing::info!(
        year = dataset.year,
        days = view.stats.days,
        total = view.stats.total,
        max_streak = view.stats.max_streak,
        "writing habit rendered"
    );
    Some(view)
}
