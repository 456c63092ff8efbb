//! Derived views over the register: dashboard counters and the
//! filtered, newest-first record list. Everything here is a pure function of
//! its inputs.

use crate::models::AttendanceRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_egg: usize,
    pub total_banana: usize,
    pub total: usize,
    pub today: usize,
}

pub fn stats(records: &[AttendanceRecord], today: NaiveDate) -> Stats {
    Stats {
        total_egg: records.iter().filter(|r| r.egg).count(),
        total_banana: records.iter().filter(|r| r.banana).count(),
        total: records.len(),
        today: records.iter().filter(|r| r.is_on(today)).count(),
    }
}

/// Inclusive day range. `from` counts from the start of its day, `to` up to
/// the end of its day; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(Some(from), Some(to))
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from.is_none_or(|f| day >= f) && self.to.is_none_or(|t| day <= t)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub search: String,
    pub range: DateRange,
}

impl RecordQuery {
    pub fn new(search: impl Into<String>, range: DateRange) -> Self {
        Self {
            search: search.into(),
            range,
        }
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let needle = self.search.to_lowercase();
        record.code.to_lowercase().contains(&needle) && self.range.contains(record.day())
    }
}

/// Records matching `query`, most recent first. Equal timestamps keep their
/// insertion order.
pub fn filter_sorted<'a>(records: &'a [AttendanceRecord], query: &RecordQuery) -> Vec<&'a AttendanceRecord> {
    let mut out: Vec<&AttendanceRecord> = records.iter().filter(|r| query.matches(r)).collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}
