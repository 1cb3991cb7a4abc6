//! Move interaction: dragging the focused blocks as one rigid group.

use crate::block::BlockId;
use crate::board::Board;
use crate::error::{EditorError, EditorResult};
use crate::events::{EventSource, Subscription};
use crate::input::Modifiers;
use crate::snap::{AlignmentGuides, GuideMarkers};
use kurbo::{Point, Vec2};

/// Keep only the dominant component of a delta.
///
/// Ties keep `x`, locking the move to the horizontal axis.
pub fn lock_axis(delta: Vec2) -> Vec2 {
    if delta.x.abs() >= delta.y.abs() {
        Vec2::new(delta.x, 0.0)
    } else {
        Vec2::new(0.0, delta.y)
    }
}

/// Start position of one dragged block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginSnapshot {
    pub id: BlockId,
    pub top: f64,
    pub left: f64,
}

/// State of an active drag, from pointer-down to pointer-up.
#[derive(Debug)]
pub struct DragSession {
    /// The block that received the pointer-down.
    pub primary: BlockId,
    /// Pointer position at pointer-down.
    pub start_pointer: Point,
    /// Start position of the primary block.
    pub primary_origin: Point,
    /// Start positions of every focused block, in board order.
    pub snapshot: Vec<OriginSnapshot>,
    /// Snap candidates, present only when snapping is enabled.
    pub guides: Option<AlignmentGuides>,
    subscription: Subscription,
}

/// Delta to apply for one pointer-move, plus the guides it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStep {
    pub delta: Vec2,
    pub guides: GuideMarkers,
}

impl DragSession {
    /// Compute the effective delta for a pointer position.
    ///
    /// The raw delta is optionally axis-locked, then each axis is snapped
    /// independently using the primary block's candidate position.
    pub fn step(&self, pointer: Point, modifiers: Modifiers, threshold: f64) -> DragStep {
        let mut delta = pointer - self.start_pointer;
        if modifiers.is_axis_locked() {
            delta = lock_axis(delta);
        }

        match &self.guides {
            Some(guides) => {
                let snap = guides.snap(self.primary_origin + delta, threshold);
                DragStep {
                    delta: snap.origin - self.primary_origin,
                    guides: snap.guides,
                }
            }
            None => DragStep {
                delta,
                guides: GuideMarkers::default(),
            },
        }
    }
}

/// Drives drag sessions and owns the guide markers shown during a drag.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    guides: GuideMarkers,
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The current session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Guide markers for overlay rendering.
    pub fn guides(&self) -> GuideMarkers {
        self.guides
    }

    /// Start dragging the focused blocks with `primary` as the reference block.
    ///
    /// Snap candidates are computed here, once, from the primary block's
    /// current size and every unfocused block.
    pub fn begin<S: EventSource + ?Sized>(
        &mut self,
        board: &Board,
        primary: BlockId,
        pointer: Point,
        snap_enabled: bool,
        source: &mut S,
    ) -> EditorResult<()> {
        if self.session.is_some() {
            return Err(EditorError::SessionActive);
        }
        let block = board.get(primary).ok_or(EditorError::UnknownBlock(primary))?;
        let primary_origin = block.origin();
        let primary_size = block.size();

        let selection = board.partition();
        let snapshot: Vec<OriginSnapshot> = selection
            .focused
            .iter()
            .map(|b| OriginSnapshot {
                id: b.id,
                top: b.top,
                left: b.left,
            })
            .collect();
        let guides = snap_enabled
            .then(|| AlignmentGuides::generate(primary_size, selection.unfocused.iter().copied()));

        log::debug!(
            "Drag start: primary {} with {} focused block(s), {} snap candidate(s)",
            primary,
            snapshot.len(),
            guides.as_ref().map_or(0, |g| g.x.len() + g.y.len())
        );

        self.session = Some(DragSession {
            primary,
            start_pointer: pointer,
            primary_origin,
            snapshot,
            guides,
            subscription: Subscription::attach(source),
        });
        Ok(())
    }

    /// Move every snapshotted block by the session's effective delta.
    ///
    /// Returns the applied step, or `None` when no drag is active.
    pub fn update(
        &mut self,
        board: &mut Board,
        pointer: Point,
        modifiers: Modifiers,
        threshold: f64,
    ) -> Option<DragStep> {
        let session = self.session.as_ref()?;
        let step = session.step(pointer, modifiers, threshold);
        log::trace!("Drag move: delta ({}, {})", step.delta.x, step.delta.y);

        for origin in &session.snapshot {
            if let Some(block) = board.get_mut(origin.id) {
                block.top = origin.top + step.delta.y;
                block.left = origin.left + step.delta.x;
            }
        }
        self.guides = step.guides;
        Some(step)
    }

    /// Finish the drag: hide guides, release listeners, drop the session.
    ///
    /// Returns false when no drag was active.
    pub fn end<S: EventSource + ?Sized>(&mut self, source: &mut S) -> bool {
        self.guides.clear();
        match self.session.take() {
            Some(session) => {
                log::debug!("Drag end: primary {}", session.primary);
                session.subscription.detach(source);
                true
            }
            None => false,
        }
    }
}
