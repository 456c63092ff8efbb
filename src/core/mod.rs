pub mod backup;
pub mod log;
pub mod query;
pub mod selection;
pub mod store;

pub use query::{DateRange, RecordQuery, Stats, filter_sorted, stats};
pub use selection::{FlowTimings, Notice, NoticeKind, SelectionFlow, SelectionState};
pub use store::{MemorySlot, RecordStore, Slot};
