//! Block entity: a positioned, sized rectangle on the canvas.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A block placed on the canvas.
///
/// Geometry is in canvas pixels, with `top`/`left` measured from the
/// container's origin. All geometry fields stay finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: BlockId,
    /// Registry key of the component this block renders.
    pub component_key: String,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Selection flag. Focused blocks form the live selection.
    pub focused: bool,
    /// Set permanently once a resize session applies a move. From then on
    /// `width`/`height` win over the measured natural size.
    pub user_resized: bool,
    /// The block was just dropped and should be centred on its drop point
    /// once its natural size is known.
    pub needs_initial_center: bool,
}

impl Block {
    /// Create a freshly dropped block at the given drop point.
    pub fn new(component_key: impl Into<String>, top: f64, left: f64) -> Self {
        Self {
            id: BlockId::new(),
            component_key: component_key.into(),
            top,
            left,
            width: 0.0,
            height: 0.0,
            focused: false,
            user_resized: false,
            needs_initial_center: true,
        }
    }

    /// Create a block with known geometry (no initial centring pending).
    pub fn with_geometry(
        component_key: impl Into<String>,
        top: f64,
        left: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            width,
            height,
            needs_initial_center: false,
            ..Self::new(component_key, top, left)
        }
    }

    /// Top-left corner as a point (x = left, y = top).
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Current size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Snapshot of the block's geometry.
    pub fn geometry(&self) -> Geometry {
        Geometry {
            top: self.top,
            left: self.left,
            width: self.width,
            height: self.height,
        }
    }

    /// Overwrite the block's geometry.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.top = geometry.top;
        self.left = geometry.left;
        self.width = geometry.width;
        self.height = geometry.height;
    }

    /// Apply the size measured by the host after rendering.
    ///
    /// A pending initial centre shifts the block so its drop point becomes its
    /// centre. The measured size only replaces width/height while the user has
    /// not resized the block.
    pub fn apply_natural_size(&mut self, width: f64, height: f64) {
        if self.needs_initial_center {
            self.top -= height / 2.0;
            self.left -= width / 2.0;
            self.needs_initial_center = false;
        }
        if !self.user_resized {
            self.width = width;
            self.height = height;
        }
    }
}

/// Position and size of a block, detached from the block itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Size of the canvas surface that holds the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}
