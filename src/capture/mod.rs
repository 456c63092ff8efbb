//! Capture adapters: anything that turns a camera stream, a scanner or a
//! still image into decoded text.
//!
//! Every operation returns [`CaptureResult`], so the selection flow reacts the
//! same way whatever the underlying device does.

mod feedback;
mod line_scanner;

pub use feedback::{Feedback, Silent, TerminalBell};
pub use line_scanner::{LineScanner, STDIN_DEVICE_ID};

use crate::models::CameraDevice;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Could not access cameras. Please grant permission.")]
    PermissionDenied,

    #[error("No cameras found.")]
    NoDevice,

    #[error("Please select a camera.")]
    DeviceNotFound(String),

    #[error("No QR code found in the image.")]
    NotFound,

    #[error("Scanner is not running.")]
    NotScanning,

    #[error("Failed to start scanner. Check camera permissions. ({0})")]
    Io(String),
}

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Contract consumed from a capture device.
pub trait CaptureAdapter {
    fn list_devices(&self) -> CaptureResult<Vec<CameraDevice>>;

    fn start_session(&mut self, device_id: &str) -> CaptureResult<()>;

    /// Block until the next code is decoded. `Ok(None)` means the device has
    /// no more input.
    fn next_decoded(&mut self) -> CaptureResult<Option<String>>;

    fn stop_session(&mut self) -> CaptureResult<()>;

    fn is_scanning(&self) -> bool;

    fn scan_static_image(&mut self, path: &Path) -> CaptureResult<String>;
}

/// Pick the device to preselect: a label containing `hint` (case-insensitive)
/// wins, otherwise the first device.
pub fn choose_default_device<'a>(devices: &'a [CameraDevice], hint: &str) -> Option<&'a CameraDevice> {
    let hint = hint.to_lowercase();
    if !hint.is_empty()
        && let Some(found) = devices.iter().find(|d| d.label.to_lowercase().contains(&hint))
    {
        return Some(found);
    }
    devices.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devices() -> Vec<CameraDevice> {
        vec![
            CameraDevice::new("cam-front", "Front Camera"),
            CameraDevice::new("cam-back", "Back Camera (wide)"),
        ]
    }

    #[test]
    fn prefers_back_camera() {
        let list = devices();
        let chosen = choose_default_device(&list, "back").unwrap();
        assert_eq!(chosen.id, "cam-back");
    }

    #[test]
    fn falls_back_to_first_device() {
        let list = vec![CameraDevice::new("usb-1", "USB scanner")];
        assert_eq!(choose_default_device(&list, "back").unwrap().id, "usb-1");
        assert!(choose_default_device(&[], "back").is_none());
    }
}
