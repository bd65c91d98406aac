use serde::{Deserialize, Serialize};

use crate::core::ZoomSelection;

/// Source of a zoom reported by the render adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomTrigger {
    /// Deliberate drag selection; narrows the logical window.
    Drag,
    /// Wheel zoom; visual scale only.
    Wheel,
    /// Pinch zoom; visual scale only.
    Pinch,
}

impl ZoomTrigger {
    #[must_use]
    pub fn alters_window(self) -> bool {
        matches!(self, Self::Drag)
    }
}

/// Zoom message sent by the render adapter once a gesture completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomGesture {
    pub trigger: ZoomTrigger,
    pub selection: ZoomSelection,
}

impl ZoomGesture {
    #[must_use]
    pub fn drag(left: f64, right: f64) -> Self {
        Self {
            trigger: ZoomTrigger::Drag,
            selection: ZoomSelection::new(left, right),
        }
    }

    #[must_use]
    pub fn wheel(left: f64, right: f64) -> Self {
        Self {
            trigger: ZoomTrigger::Wheel,
            selection: ZoomSelection::new(left, right),
        }
    }

    #[must_use]
    pub fn pinch(left: f64, right: f64) -> Self {
        Self {
            trigger: ZoomTrigger::Pinch,
            selection: ZoomSelection::new(left, right),
        }
    }
}
