use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One attendance entry.
///
/// The JSON layout matches the payload written by the browser version of the
/// register (`qrId`, `timestamp`, `egg`, `banana`); the legacy `date`/`time`
/// display fields are ignored on read and derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    #[serde(rename = "qrId")]
    pub code: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Local>,
    pub egg: bool,
    pub banana: bool,
}

impl AttendanceRecord {
    pub fn new(id: i64, code: impl Into<String>, created_at: DateTime<Local>, egg: bool, banana: bool) -> Self {
        Self {
            id,
            code: code.into(),
            created_at,
            egg,
            banana,
        }
    }

    /// Local calendar day of creation.
    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.day() == day
    }
}
