//! Editor configuration.

use crate::snap::SNAP_THRESHOLD;
use serde::{Deserialize, Serialize};

/// What a resize does when the pointer crosses the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizePolicy {
    /// Width/height stop at 0; a start-role handle stops at the fixed edge.
    #[default]
    ClampZero,
    /// Raw arithmetic: width/height may go negative and the host clips.
    AllowNegative,
}

/// Interaction settings supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Snap dragged blocks to alignment guides.
    pub snap_enabled: bool,
    /// Guide distance threshold in canvas pixels (exclusive).
    pub snap_threshold: f64,
    /// Negative size handling during resize.
    pub size_policy: SizePolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_threshold: SNAP_THRESHOLD,
            size_policy: SizePolicy::default(),
        }
    }
}
