//! Selection flow: turns one decoded code into exactly one saved record.
//!
//! `Idle -> Decoded -> AwaitingChoice -> Saved -> Idle`. A code already
//! recorded today goes back to `Idle` from `Decoded`.

use crate::capture::{CaptureAdapter, Feedback};
use crate::core::store::{RecordStore, Slot};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Item};
use chrono::{DateTime, Duration, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Decoded {
        code: String,
    },
    AwaitingChoice {
        code: String,
    },
    Saved {
        record_id: i64,
        code: String,
        saved_at: DateTime<Local>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub shown_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy)]
pub struct FlowTimings {
    /// How long the "saved" state stays up before going back to idle.
    pub saved_reset: Duration,
    /// How long a notice stays visible.
    pub notice_timeout: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            saved_reset: Duration::seconds(2),
            notice_timeout: Duration::seconds(5),
        }
    }
}

pub struct SelectionFlow {
    state: SelectionState,
    notice: Option<Notice>,
    timings: FlowTimings,
    feedback: Box<dyn Feedback>,
}

impl SelectionFlow {
    pub fn new(feedback: Box<dyn Feedback>, timings: FlowTimings) -> Self {
        Self {
            state: SelectionState::Idle,
            notice: None,
            timings,
            feedback,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Code currently held by the flow, if any.
    pub fn current_code(&self) -> Option<&str> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Decoded { code }
            | SelectionState::AwaitingChoice { code }
            | SelectionState::Saved { code, .. } => Some(code),
        }
    }

    /// Entry point for every decoded code.
    ///
    /// Confirms audibly, stops the capture session, then either waits for an
    /// item choice or, when `code` is already recorded today, returns to idle
    /// with [`AppError::AlreadyMarkedToday`].
    pub fn on_decoded<S: Slot>(
        &mut self,
        code: &str,
        store: &RecordStore<S>,
        capture: &mut dyn CaptureAdapter,
        now: DateTime<Local>,
    ) -> AppResult<()> {
        self.feedback.confirm();
        if capture.is_scanning()
            && let Err(e) = capture.stop_session()
        {
            tracing::warn!(error = %e, "failed to stop scanning");
        }

        self.state = SelectionState::Decoded {
            code: code.to_string(),
        };
        tracing::debug!(code, "code decoded");

        if store.has_record_on(code, now.date_naive()) {
            self.show(AppError::AlreadyMarkedToday(code.into()).to_string(), NoticeKind::Error, now);
            self.state = SelectionState::Idle;
            return Err(AppError::AlreadyMarkedToday(code.to_string()));
        }

        self.show(
            format!("QR Scanned: {}. Please select an item.", code),
            NoticeKind::Success,
            now,
        );
        self.state = SelectionState::AwaitingChoice {
            code: code.to_string(),
        };
        Ok(())
    }

    /// Save the pending code with the chosen item.
    pub fn choose<S: Slot>(
        &mut self,
        item: Item,
        store: &mut RecordStore<S>,
        now: DateTime<Local>,
    ) -> AppResult<AttendanceRecord> {
        let SelectionState::AwaitingChoice { code } = &self.state else {
            return Err(AppError::InvalidState(
                "no scanned code is waiting for an item".into(),
            ));
        };
        let code = code.clone();

        let (egg, banana) = item.flags();
        let record = AttendanceRecord::new(store.next_id(now), code.clone(), now, egg, banana);
        store.append(record.clone());

        self.show("Attendance saved successfully!", NoticeKind::Success, now);
        self.state = SelectionState::Saved {
            record_id: record.id,
            code,
            saved_at: now,
        };
        Ok(record)
    }

    /// Surface a capture or other recoverable failure. State is unchanged.
    pub fn report_error(&mut self, text: impl Into<String>, now: DateTime<Local>) {
        self.show(text, NoticeKind::Error, now);
    }

    /// Advance timers: expire the notice and leave `Saved` once its display
    /// delay is over.
    pub fn tick(&mut self, now: DateTime<Local>) {
        if let Some(n) = &self.notice
            && now - n.shown_at >= self.timings.notice_timeout
        {
            self.notice = None;
        }

        if let SelectionState::Saved { saved_at, .. } = &self.state
            && now - *saved_at >= self.timings.saved_reset
        {
            self.state = SelectionState::Idle;
        }
    }

    fn show(&mut self, text: impl Into<String>, kind: NoticeKind, now: DateTime<Local>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            shown_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{CaptureResult, STDIN_DEVICE_ID};
    use crate::core::store::MemorySlot;
    use crate::models::CameraDevice;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::path::Path;
    use std::rc::Rc;

    /// Capture stub that only tracks whether a session is running.
    #[derive(Default)]
    struct StubCapture {
        scanning: bool,
        stops: usize,
    }

    impl CaptureAdapter for StubCapture {
        fn list_devices(&self) -> CaptureResult<Vec<CameraDevice>> {
            Ok(vec![CameraDevice::new(STDIN_DEVICE_ID, "stub")])
        }
        fn start_session(&mut self, _device_id: &str) -> CaptureResult<()> {
            self.scanning = true;
            Ok(())
        }
        fn next_decoded(&mut self) -> CaptureResult<Option<String>> {
            Ok(None)
        }
        fn stop_session(&mut self) -> CaptureResult<()> {
            self.scanning = false;
            self.stops += 1;
            Ok(())
        }
        fn is_scanning(&self) -> bool {
            self.scanning
        }
        fn scan_static_image(&mut self, _path: &Path) -> CaptureResult<String> {
            Ok(String::new())
        }
    }

    struct CountingBeep(Rc<Cell<u32>>);

    impl Feedback for CountingBeep {
        fn confirm(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn at(d: u32, h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, d, h, m, s).unwrap()
    }

    fn flow() -> (SelectionFlow, Rc<Cell<u32>>) {
        let beeps = Rc::new(Cell::new(0));
        let flow = SelectionFlow::new(Box::new(CountingBeep(beeps.clone())), FlowTimings::default());
        (flow, beeps)
    }

    #[test]
    fn decode_choose_save_then_reset() {
        let (mut flow, beeps) = flow();
        let mut store = RecordStore::load(MemorySlot::default());
        let mut capture = StubCapture::default();
        capture.start_session(STDIN_DEVICE_ID).unwrap();

        let now = at(1, 9, 0, 0);
        flow.on_decoded("A1", &store, &mut capture, now).unwrap();
        assert_eq!(beeps.get(), 1);
        assert!(!capture.is_scanning());
        assert_eq!(flow.state(), &SelectionState::AwaitingChoice { code: "A1".into() });
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Success);

        let rec = flow.choose(Item::Banana, &mut store, now).unwrap();
        assert_eq!(rec.code, "A1");
        assert_eq!((rec.egg, rec.banana), (false, true));
        assert_eq!(rec.created_at, now);
        assert_eq!(store.records(), &[rec.clone()]);
        assert!(matches!(flow.state(), SelectionState::Saved { record_id, .. } if *record_id == rec.id));

        flow.tick(at(1, 9, 0, 1));
        assert_eq!(flow.current_code(), Some("A1"));

        flow.tick(at(1, 9, 0, 2));
        assert_eq!(flow.state(), &SelectionState::Idle);
        assert_eq!(flow.current_code(), None);
        assert!(flow.notice().is_some());

        flow.tick(at(1, 9, 0, 5));
        assert!(flow.notice().is_none());
    }

    #[test]
    fn same_code_same_day_is_rejected() {
        let (mut flow, _) = flow();
        let mut store = RecordStore::load(MemorySlot::default());
        let mut capture = StubCapture::default();

        flow.on_decoded("A1", &store, &mut capture, at(1, 9, 0, 0)).unwrap();
        flow.choose(Item::Egg, &mut store, at(1, 9, 0, 0)).unwrap();

        let err = flow
            .on_decoded("A1", &store, &mut capture, at(1, 17, 30, 0))
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyMarkedToday(ref c) if c == "A1"));
        assert_eq!(flow.state(), &SelectionState::Idle);
        assert_eq!(flow.notice().unwrap().text, "Attendance already marked for today!");
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Error);

        assert!(flow.choose(Item::Egg, &mut store, at(1, 17, 30, 0)).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_code_on_another_day_coexists() {
        let (mut flow, _) = flow();
        let mut store = RecordStore::load(MemorySlot::default());
        let mut capture = StubCapture::default();

        flow.on_decoded("A1", &store, &mut capture, at(1, 9, 0, 0)).unwrap();
        flow.choose(Item::Egg, &mut store, at(1, 9, 0, 0)).unwrap();

        flow.on_decoded("A1", &store, &mut capture, at(2, 9, 0, 0)).unwrap();
        flow.choose(Item::Banana, &mut store, at(2, 9, 0, 0)).unwrap();

        assert_eq!(store.len(), 2);
        assert_ne!(store.records()[0].id, store.records()[1].id);
    }

    #[test]
    fn choose_without_pending_code_is_rejected() {
        let (mut flow, _) = flow();
        let mut store = RecordStore::load(MemorySlot::default());

        let err = flow.choose(Item::Egg, &mut store, at(1, 9, 0, 0)).unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert!(store.is_empty());
        assert_eq!(flow.state(), &SelectionState::Idle);
    }

    #[test]
    fn capture_errors_only_raise_a_notice() {
        let (mut flow, _) = flow();
        flow.report_error("No QR code found in the image.", at(1, 9, 0, 0));

        assert_eq!(flow.state(), &SelectionState::Idle);
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Error);

        flow.tick(at(1, 9, 0, 4));
        assert!(flow.notice().is_some());
        flow.tick(at(1, 9, 0, 5));
        assert!(flow.notice().is_none());
    }
}
