//! Keyboard-wedge scanner: the USB/Bluetooth QR readers that type every
//! decoded code followed by Enter.

use super::{CaptureAdapter, CaptureError, CaptureResult};
use crate::models::CameraDevice;
use std::fs;
use std::io::{BufRead, ErrorKind};
use std::path::Path;

pub const STDIN_DEVICE_ID: &str = "stdin";

pub struct LineScanner<R: BufRead> {
    input: R,
    devices: Vec<CameraDevice>,
    active: Option<String>,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            devices: vec![CameraDevice::new(STDIN_DEVICE_ID, "Keyboard scanner (stdin)")],
            active: None,
        }
    }

    /// Replace the advertised device list (e.g. several wedge scanners
    /// multiplexed onto the same input).
    pub fn with_devices(mut self, devices: Vec<CameraDevice>) -> Self {
        self.devices = devices;
        self
    }

    pub fn active_device(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Next raw line typed on the same keyboard, e.g. a menu reply.
    /// `None` at end of input.
    pub fn read_reply(&mut self) -> CaptureResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CaptureError::Io(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead> CaptureAdapter for LineScanner<R> {
    fn list_devices(&self) -> CaptureResult<Vec<CameraDevice>> {
        if self.devices.is_empty() {
            return Err(CaptureError::NoDevice);
        }
        Ok(self.devices.clone())
    }

    fn start_session(&mut self, device_id: &str) -> CaptureResult<()> {
        if device_id.is_empty() || !self.devices.iter().any(|d| d.id == device_id) {
            return Err(CaptureError::DeviceNotFound(device_id.to_string()));
        }
        // restarting replaces any running session
        self.active = Some(device_id.to_string());
        tracing::debug!(device = device_id, "capture session started");
        Ok(())
    }

    fn next_decoded(&mut self) -> CaptureResult<Option<String>> {
        if self.active.is_none() {
            return Err(CaptureError::NotScanning);
        }

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| CaptureError::Io(e.to_string()))?;
            if read == 0 {
                return Ok(None);
            }
            let code = line.trim();
            if !code.is_empty() {
                return Ok(Some(code.to_string()));
            }
        }
    }

    fn stop_session(&mut self) -> CaptureResult<()> {
        if let Some(dev) = self.active.take() {
            tracing::debug!(device = %dev, "capture session stopped");
        }
        Ok(())
    }

    fn is_scanning(&self) -> bool {
        self.active.is_some()
    }

    /// Accepts a file holding a decoded payload (one line of UTF-8 text, as
    /// saved by phone scanner apps). Anything else has no readable code.
    fn scan_static_image(&mut self, path: &Path) -> CaptureResult<String> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => CaptureError::PermissionDenied,
            _ => CaptureError::NotFound,
        })?;

        let text = String::from_utf8(bytes).map_err(|_| CaptureError::NotFound)?;
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        match (lines.next(), lines.next()) {
            (Some(code), None) if !code.chars().any(char::is_control) => Ok(code.to_string()),
            _ => Err(CaptureError::NotFound),
        }
    }
}
