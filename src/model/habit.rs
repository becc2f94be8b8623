//! Writing-habit attendance: year → months → days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of attendance. Serialized as `[day, active]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, bool)", into = "(u32, bool)")]
pub struct HabitDay {
    pub day: u32,
    pub active: bool,
}

impl From<(u32, bool)> for HabitDay {
    fn from((day, active): (u32, bool)) -> Self {
        Self { day, active }
    }
}

impl From<HabitDay> for (u32, bool) {
    fn from(d: HabitDay) -> Self {
        (d.day, d.active)
    }
}

/// A month of attendance. `days` is in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitMonth {
    /// 1–12.
    pub month: u32,
    #[serde(default)]
    pub days: Vec<HabitDay>,
}

impl HabitMonth {
    pub fn new(month: u32, days: impl IntoIterator<Item = (u32, bool)>) -> Self {
        Self {
            month,
            days: days.into_iter().map(HabitDay::from).collect(),
        }
    }

    /// Three-letter English month name, `None` outside 1–12.
    pub fn short_name(&self) -> Option<&'static str> {
        const NAMES: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun",
            "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let idx = self.month.checked_sub(1)? as usize;
        NAMES.get(idx).copied()
    }
}

/// The full attendance document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDataset {
    pub year: i32,
    #[serde(default)]
    pub months: Vec<HabitMonth>,
}

impl HabitDataset {
    pub fn new(year: i32, months: Vec<HabitMonth>) -> Self {
        Self { year, months }
    }

    /// Calendar date of a day in this dataset, `None` if it does not exist.
    pub fn date_of(&self, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}
