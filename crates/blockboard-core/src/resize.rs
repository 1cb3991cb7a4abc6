//! Resize interaction: dragging one of a block's resize handles.

use crate::block::{BlockId, Geometry};
use crate::board::Board;
use crate::config::SizePolicy;
use crate::error::{EditorError, EditorResult};
use crate::events::{EventSource, Subscription};
use crate::handles::{AxisRole, ResizeHandle};
use kurbo::{Point, Vec2};

/// Resize one axis. Returns `(position, size)`.
///
/// `Start` moves the leading edge and keeps `position + size` fixed, `End`
/// moves the trailing edge, `Center` leaves the axis alone.
fn resize_axis(
    role: AxisRole,
    position: f64,
    size: f64,
    delta: f64,
    policy: SizePolicy,
) -> (f64, f64) {
    let grown = match role {
        AxisRole::Center => return (position, size),
        AxisRole::Start => size - delta,
        AxisRole::End => size + delta,
    };
    let new_size = match policy {
        SizePolicy::ClampZero => grown.max(0.0),
        SizePolicy::AllowNegative => grown,
    };
    let new_position = match role {
        AxisRole::Start => position + (size - new_size),
        _ => position,
    };
    (new_position, new_size)
}

/// Geometry after dragging a handle with `roles` by `delta` from `start`.
pub fn resize_geometry(
    start: Geometry,
    roles: (AxisRole, AxisRole),
    delta: Vec2,
    policy: SizePolicy,
) -> Geometry {
    let (horizontal, vertical) = roles;
    let (left, width) = resize_axis(horizontal, start.left, start.width, delta.x, policy);
    let (top, height) = resize_axis(vertical, start.top, start.height, delta.y, policy);
    Geometry {
        top,
        left,
        width,
        height,
    }
}

/// State of an active resize, from pointer-down to pointer-up.
#[derive(Debug)]
pub struct ResizeSession {
    pub block: BlockId,
    pub handle: ResizeHandle,
    pub start_pointer: Point,
    /// Geometry of the block at pointer-down.
    pub start: Geometry,
    subscription: Subscription,
}

impl ResizeSession {
    /// The handle's (horizontal, vertical) roles.
    pub fn roles(&self) -> (AxisRole, AxisRole) {
        self.handle.roles()
    }
}

/// Drives resize sessions.
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a resize is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The current session, if resizing.
    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// Start resizing `block` from `handle`.
    pub fn begin<S: EventSource + ?Sized>(
        &mut self,
        board: &Board,
        block: BlockId,
        handle: ResizeHandle,
        pointer: Point,
        source: &mut S,
    ) -> EditorResult<()> {
        if self.session.is_some() {
            return Err(EditorError::SessionActive);
        }
        let start = board
            .get(block)
            .ok_or(EditorError::UnknownBlock(block))?
            .geometry();

        log::debug!("Resize start: block {} via {:?}", block, handle);
        self.session = Some(ResizeSession {
            block,
            handle,
            start_pointer: pointer,
            start,
            subscription: Subscription::attach(source),
        });
        Ok(())
    }

    /// Apply the pointer position to the target block.
    ///
    /// Returns the new geometry, or `None` when no resize is active or the
    /// block has since been removed.
    pub fn update(
        &mut self,
        board: &mut Board,
        pointer: Point,
        policy: SizePolicy,
    ) -> Option<Geometry> {
        let session = self.session.as_ref()?;
        let delta = pointer - session.start_pointer;
        let geometry = resize_geometry(session.start, session.roles(), delta, policy);
        log::trace!(
            "Resize move: block {} -> {}x{}",
            session.block,
            geometry.width,
            geometry.height
        );

        let block = board.get_mut(session.block)?;
        block.set_geometry(geometry);
        block.user_resized = true;
        Some(geometry)
    }

    /// Finish the resize: release listeners and drop the session.
    ///
    /// Returns false when no resize was active.
    pub fn end<S: EventSource + ?Sized>(&mut self, source: &mut S) -> bool {
        match self.session.take() {
            Some(session) => {
                log::debug!("Resize end: block {}", session.block);
                session.subscription.detach(source);
                true
            }
            None => false,
        }
    }
}
