//! Record store: the authoritative, ordered register of attendance records,
//! written through to a persisted slot after every mutation.

use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use chrono::{DateTime, Local, NaiveDate};

/// A single persisted key/value slot.
pub trait Slot {
    fn read(&self) -> AppResult<Option<String>>;

    fn write(&mut self, payload: &str) -> AppResult<()>;

    /// Record a mutation in the slot's audit trail, if it keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

/// Slot kept in memory. `fail_writes` simulates a full storage quota.
#[derive(Debug, Default)]
pub struct MemorySlot {
    pub value: Option<String>,
    pub fail_writes: bool,
    pub writes: usize,
}

impl MemorySlot {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> AppResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, payload: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Other("storage quota exceeded".into()));
        }
        self.value = Some(payload.to_string());
        self.writes += 1;
        Ok(())
    }
}

pub struct RecordStore<S: Slot> {
    records: Vec<AttendanceRecord>,
    slot: S,
}

impl<S: Slot> RecordStore<S> {
    /// Read the slot. A missing or unparsable payload starts an empty register.
    pub fn load(slot: S) -> Self {
        let records = match slot.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<AttendanceRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, "stored register is unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored register, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = records.len(), "register loaded");
        Self { records, slot }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// True if `code` already has a record on the local calendar day `day`.
    pub fn has_record_on(&self, code: &str, day: NaiveDate) -> bool {
        self.records.iter().any(|r| r.code == code && r.is_on(day))
    }

    /// Timestamp-derived id, strictly greater than every id handed out so far.
    pub fn next_id(&self, now: DateTime<Local>) -> i64 {
        let last = self.records.iter().map(|r| r.id).max().unwrap_or(i64::MIN);
        now.timestamp_millis().max(last.saturating_add(1))
    }

    pub fn replace_all(&mut self, records: Vec<AttendanceRecord>) {
        self.records = records;
        self.persist();
        let msg = format!("Register replaced with {} records", self.records.len());
        self.slot.audit("restore", "", &msg);
    }

    pub fn append(&mut self, record: AttendanceRecord) {
        let target = record.code.clone();
        let msg = format!("Attendance saved (id {})", record.id);
        self.records.push(record);
        self.persist();
        self.slot.audit("add", &target, &msg);
    }

    /// Change the two item flags; every other field is left untouched.
    pub fn update_flags(&mut self, id: i64, egg: bool, banana: bool) -> AppResult<&AttendanceRecord> {
        let idx = self.position(id)?;
        {
            let rec = &mut self.records[idx];
            rec.egg = egg;
            rec.banana = banana;
        }
        self.persist();

        let target = self.records[idx].code.clone();
        let msg = format!("Record {} updated: egg={}, banana={}", id, egg, banana);
        self.slot.audit("edit", &target, &msg);

        Ok(&self.records[idx])
    }

    pub fn remove(&mut self, id: i64) -> AppResult<AttendanceRecord> {
        let idx = self.position(id)?;
        let removed = self.records.remove(idx);
        self.persist();

        let msg = format!("Record {} deleted ({})", id, removed.date_str());
        self.slot.audit("del", &removed.code, &msg);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        let count = self.records.len();
        self.records.clear();
        self.persist();
        self.slot.audit("clear", "", &format!("All {} records cleared", count));
    }

    /// Serialized form of the current register.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Record a non-mutating operation (backup, export) in the audit trail.
    pub fn audit(&mut self, operation: &str, target: &str, message: &str) {
        self.slot.audit(operation, target, message);
    }

    fn position(&self, id: i64) -> AppResult<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::RecordNotFound(id))
    }

    /// Full write-through. Failures are logged; memory stays authoritative.
    fn persist(&mut self) {
        let payload = match self.to_json() {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize register");
                return;
            }
        };

        if let Err(e) = self.slot.write(&payload) {
            tracing::error!(error = %e, "failed to persist register");
        }
    }
}
