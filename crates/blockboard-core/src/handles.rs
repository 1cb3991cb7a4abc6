//! Resize handle definitions and visibility.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a handle treats one axis of the pointer delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRole {
    /// Handle sits on the leading edge (top or left). Dragging it moves that
    /// edge and keeps the opposite one fixed.
    Start,
    /// Handle ignores this axis.
    Center,
    /// Handle sits on the trailing edge (bottom or right).
    End,
}

/// Resize handle positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    // Edge handles
    Top,
    Bottom,
    Left,
    Right,
    // Corner handles
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// Every handle, edges first.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Top,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
        ResizeHandle::Right,
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
    ];

    /// The (horizontal, vertical) role pair. Center/center never occurs.
    pub fn roles(self) -> (AxisRole, AxisRole) {
        use AxisRole::*;
        match self {
            ResizeHandle::Top => (Center, Start),
            ResizeHandle::Bottom => (Center, End),
            ResizeHandle::Left => (Start, Center),
            ResizeHandle::Right => (End, Center),
            ResizeHandle::TopLeft => (Start, Start),
            ResizeHandle::TopRight => (End, Start),
            ResizeHandle::BottomLeft => (Start, End),
            ResizeHandle::BottomRight => (End, End),
        }
    }

    /// Check if this is a corner handle.
    pub fn is_corner(self) -> bool {
        let (h, v) = self.roles();
        h != AxisRole::Center && v != AxisRole::Center
    }

    /// Check if the handle is offered for the given resizable axes.
    ///
    /// Edge handles need their own axis; corners need both.
    pub fn is_offered(self, axes: ResizableAxes) -> bool {
        let (h, v) = self.roles();
        let needs_width = h != AxisRole::Center;
        let needs_height = v != AxisRole::Center;
        (!needs_width || axes.width) && (!needs_height || axes.height)
    }
}

/// Which axes a component lets the user resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResizableAxes {
    pub width: bool,
    pub height: bool,
}

impl ResizableAxes {
    pub const NONE: ResizableAxes = ResizableAxes {
        width: false,
        height: false,
    };
    pub const WIDTH: ResizableAxes = ResizableAxes {
        width: true,
        height: false,
    };
    pub const HEIGHT: ResizableAxes = ResizableAxes {
        width: false,
        height: true,
    };
    pub const BOTH: ResizableAxes = ResizableAxes {
        width: true,
        height: true,
    };
}

/// Handles to render for a component with the given resizable axes.
pub fn visible_handles(axes: ResizableAxes) -> Vec<ResizeHandle> {
    ResizeHandle::ALL
        .into_iter()
        .filter(|h| h.is_offered(axes))
        .collect()
}

/// Resizable axes declared per component key.
///
/// Components that were never declared are not resizable.
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    axes: HashMap<String, ResizableAxes>,
}

impl ComponentCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the resizable axes of a component.
    pub fn declare(&mut self, component_key: impl Into<String>, axes: ResizableAxes) {
        self.axes.insert(component_key.into(), axes);
    }

    /// Builder form of [`declare`](Self::declare).
    pub fn with(mut self, component_key: impl Into<String>, axes: ResizableAxes) -> Self {
        self.declare(component_key, axes);
        self
    }

    /// Resizable axes of a component.
    pub fn resizable_axes(&self, component_key: &str) -> ResizableAxes {
        self.axes.get(component_key).copied().unwrap_or_default()
    }
}
