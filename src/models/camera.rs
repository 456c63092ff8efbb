use serde::{Deserialize, Serialize};

/// Capture device as reported by the capture adapter. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraDevice {
    pub id: String,
    pub label: String,
}

impl CameraDevice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Label to show in selectors; unnamed devices fall back to a short id.
    pub fn display_label(&self) -> String {
        if self.label.trim().is_empty() {
            let short: String = self.id.chars().take(6).collect();
            format!("Camera {}", short)
        } else {
            self.label.clone()
        }
    }
}
