pub mod camera;
pub mod item;
pub mod record;

pub use camera::CameraDevice;
pub use item::Item;
pub use record::AttendanceRecord;
