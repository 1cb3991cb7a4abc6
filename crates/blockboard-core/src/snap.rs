//! Alignment guides for snapping a dragged block to its siblings.
//!
//! Candidates are generated once per drag from every unfocused block, five per
//! sibling and axis, in a fixed order. Matching takes the first candidate in
//! generation order that lies within the threshold, not the closest one, so
//! snap behaviour is reproducible for a given board order.

use crate::block::Block;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Distance (in canvas pixels) under which a candidate is adopted.
pub const SNAP_THRESHOLD: f64 = 5.0;

/// One snap position on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentCandidate {
    /// Position the moving block's top/left must land on.
    pub test_position: f64,
    /// Where the guide line is drawn when this candidate matches.
    pub display_position: f64,
}

impl AlignmentCandidate {
    fn aligned(position: f64) -> Self {
        Self {
            test_position: position,
            display_position: position,
        }
    }
}

/// The five candidates one sibling contributes on one axis.
///
/// `start`/`extent` describe the sibling on that axis (top/height or
/// left/width), `moving_extent` the dragged block's size on the same axis.
pub fn axis_candidates(start: f64, extent: f64, moving_extent: f64) -> [AlignmentCandidate; 5] {
    let end = start + extent;
    let middle = start + extent / 2.0;
    [
        AlignmentCandidate::aligned(start),
        AlignmentCandidate::aligned(end),
        AlignmentCandidate {
            test_position: middle - moving_extent / 2.0,
            display_position: middle,
        },
        AlignmentCandidate::aligned(start - moving_extent),
        AlignmentCandidate::aligned(end - moving_extent),
    ]
}

/// Return the first candidate within `threshold` of `position`.
pub fn first_match(
    candidates: &[AlignmentCandidate],
    position: f64,
    threshold: f64,
) -> Option<AlignmentCandidate> {
    candidates
        .iter()
        .find(|c| (c.test_position - position).abs() < threshold)
        .copied()
}

/// Candidate lists for both axes, captured at drag start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentGuides {
    /// Candidates for the `left` coordinate.
    pub x: Vec<AlignmentCandidate>,
    /// Candidates for the `top` coordinate.
    pub y: Vec<AlignmentCandidate>,
}

impl AlignmentGuides {
    /// Build the candidates for a block of size `moving` against `siblings`,
    /// preserving sibling order.
    pub fn generate<'a>(moving: Size, siblings: impl IntoIterator<Item = &'a Block>) -> Self {
        let mut guides = Self::default();
        for sibling in siblings {
            guides
                .y
                .extend(axis_candidates(sibling.top, sibling.height, moving.height));
            guides
                .x
                .extend(axis_candidates(sibling.left, sibling.width, moving.width));
        }
        guides
    }

    /// Check if there is nothing to snap to.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    /// Snap an unsnapped top-left position, each axis independently.
    pub fn snap(&self, origin: Point, threshold: f64) -> AlignmentSnap {
        let x = first_match(&self.x, origin.x, threshold);
        let y = first_match(&self.y, origin.y, threshold);
        AlignmentSnap {
            origin: Point::new(
                x.map_or(origin.x, |c| c.test_position),
                y.map_or(origin.y, |c| c.test_position),
            ),
            guides: GuideMarkers {
                x: x.map(|c| c.display_position),
                y: y.map(|c| c.display_position),
            },
        }
    }
}

/// Guide lines to draw over the canvas, one per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideMarkers {
    /// Vertical guide line at this `left` coordinate.
    pub x: Option<f64>,
    /// Horizontal guide line at this `top` coordinate.
    pub y: Option<f64>,
}

impl GuideMarkers {
    /// Check if any guide is shown.
    pub fn is_visible(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// Hide both guides.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Result of snapping a position against alignment guides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentSnap {
    /// The snapped top-left position.
    pub origin: Point,
    /// Guides for the axes that snapped.
    pub guides: GuideMarkers,
}

impl AlignmentSnap {
    /// Check if either axis snapped.
    pub fn is_snapped(&self) -> bool {
        self.guides.is_visible()
    }
}
