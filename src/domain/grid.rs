//! Calendar heatmap layout: days bucketed into fixed 7-slot weeks with
//! month labels keyed by week index.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::weather::DayRecord;

pub const DAYS_PER_WEEK: usize = 7;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Slot index of `weekday` in a week beginning on `self`.
    #[must_use]
    pub fn slot_of(self, weekday: Weekday) -> usize {
        let idx = match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        };
        idx as usize
    }

    /// Weekday shown on each row, top to bottom.
    #[must_use]
    pub fn weekdays(self) -> [Weekday; DAYS_PER_WEEK] {
        let first = match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        };
        let mut days = [first; DAYS_PER_WEEK];
        for idx in 1..DAYS_PER_WEEK {
            days[idx] = days[idx - 1].succ();
        }
        days
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            WeekStart::Sunday => WeekStart::Monday,
            WeekStart::Monday => WeekStart::Sunday,
        }
    }
}

/// One heatmap column. Empty slots only appear as padding before the first
/// record and after the last one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Week {
    slots: [Option<DayRecord>; DAYS_PER_WEEK],
}

impl Week {
    #[must_use]
    pub fn slots(&self) -> &[Option<DayRecord>; DAYS_PER_WEEK] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, idx: usize) -> Option<&DayRecord> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn first_day(&self) -> Option<&DayRecord> {
        self.slots.iter().find_map(Option::as_ref)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayRecord> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.days().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub label: &'static str,
    pub week_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalendarGrid {
    pub weeks: Vec<Week>,
    pub month_labels: Vec<MonthLabel>,
}

impl CalendarGrid {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    #[must_use]
    pub fn label_for_week(&self, week_index: usize) -> Option<&'static str> {
        self.month_labels
            .iter()
            .find(|label| label.week_index == week_index)
            .map(|label| label.label)
    }
}

#[must_use]
pub fn month_abbreviation(date: NaiveDate) -> &'static str {
    MONTH_ABBREVIATIONS[date.month0() as usize]
}

/// Lays `days` out Sunday-first. See [`build_grid_with`].
#[must_use]
pub fn build_grid(days: &[DayRecord]) -> CalendarGrid {
    build_grid_with(days, WeekStart::Sunday)
}

/// Buckets chronologically ordered `days` into weeks starting on `week_start`.
///
/// The first week is padded in front up to the weekday of the first record and
/// the last week is padded at the end. Ordering is the caller's contract; gaps
/// between records are not filled.
#[must_use]
pub fn build_grid_with(days: &[DayRecord], week_start: WeekStart) -> CalendarGrid {
    let Some(first) = days.first() else {
        return CalendarGrid::default();
    };

    let leading = week_start.slot_of(first.date().weekday());
    let mut weeks = Vec::with_capacity((leading + days.len()).div_ceil(DAYS_PER_WEEK));
    let mut current = Week::default();
    let mut cursor = leading;

    for day in days {
        current.slots[cursor] = Some(*day);
        cursor += 1;
        if cursor == DAYS_PER_WEEK {
            weeks.push(std::mem::take(&mut current));
            cursor = 0;
        }
    }
    if cursor > 0 {
        weeks.push(current);
    }

    let month_labels = month_labels(&weeks);
    CalendarGrid {
        weeks,
        month_labels,
    }
}

fn month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month = None;

    for (week_index, week) in weeks.iter().enumerate() {
        let Some(first) = week.first_day() else {
            continue;
        };
        let date = first.date();
        let month = (date.year(), date.month());
        if last_month != Some(month) {
            labels.push(MonthLabel {
                label: month_abbreviation(date),
                week_index,
            });
            last_month = Some(month);
        }
    }

    labels
}
