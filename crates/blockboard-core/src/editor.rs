//! Editor facade routing pointer input to the drag and resize controllers.
//!
//! At most one session (drag or resize) is alive at a time. A session is
//! created by a qualifying pointer-down, subscribes its move/up listeners on
//! the injected [`EventSource`], and is torn down by the next pointer-up,
//! which releases those listeners before the session is dropped.

use crate::block::BlockId;
use crate::board::Board;
use crate::config::EditorConfig;
use crate::drag::DragController;
use crate::error::{EditorError, EditorResult};
use crate::events::EventSource;
use crate::handles::{ComponentCatalog, ResizeHandle, visible_handles};
use crate::input::{Modifiers, PointerTarget};
use crate::resize::ResizeController;
use crate::snap::GuideMarkers;
use kurbo::Point;

/// Which kind of session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    Dragging,
    Resizing,
}

/// The block manipulation engine.
#[derive(Debug)]
pub struct Editor<S: EventSource> {
    board: Board,
    catalog: ComponentCatalog,
    config: EditorConfig,
    source: S,
    drag: DragController,
    resize: ResizeController,
}

impl<S: EventSource> Editor<S> {
    /// Create an editor over `board`, listening through `source`.
    pub fn new(board: Board, catalog: ComponentCatalog, source: S) -> Self {
        Self::with_config(board, catalog, source, EditorConfig::default())
    }

    /// Create an editor with explicit configuration.
    pub fn with_config(
        board: Board,
        catalog: ComponentCatalog,
        source: S,
        config: EditorConfig,
    ) -> Self {
        Self {
            board,
            catalog,
            config,
            source,
            drag: DragController::new(),
            resize: ResizeController::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for host-side edits (placement, property forms).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }

    pub fn event_source(&self) -> &S {
        &self.source
    }

    /// Guide markers to overlay during a drag.
    pub fn guides(&self) -> GuideMarkers {
        self.drag.guides()
    }

    /// The active interaction.
    pub fn interaction(&self) -> Interaction {
        if self.drag.is_active() {
            Interaction::Dragging
        } else if self.resize.is_active() {
            Interaction::Resizing
        } else {
            Interaction::Idle
        }
    }

    /// Check if a drag or resize session is alive.
    pub fn is_interacting(&self) -> bool {
        self.interaction() != Interaction::Idle
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    /// Resize handles to render for a block.
    pub fn handles_for(&self, id: BlockId) -> Vec<ResizeHandle> {
        self.board
            .get(id)
            .map(|b| visible_handles(self.catalog.resizable_axes(&b.component_key)))
            .unwrap_or_default()
    }

    /// Handle a pointer-down on `target`.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget,
        pointer: Point,
        modifiers: Modifiers,
    ) -> EditorResult<()> {
        let result = self.press(target, pointer, modifiers);
        if let Err(err) = &result {
            log::warn!("Pointer-down on {:?} rejected: {}", target, err);
        }
        result
    }

    fn press(
        &mut self,
        target: PointerTarget,
        pointer: Point,
        modifiers: Modifiers,
    ) -> EditorResult<()> {
        if self.is_interacting() {
            return Err(EditorError::SessionActive);
        }

        match target {
            PointerTarget::Background => {
                self.board.clear_focus(None);
                Ok(())
            }
            PointerTarget::Block(id) => {
                if !self.board.set_focus(id, modifiers.is_additive()) {
                    return Err(EditorError::UnknownBlock(id));
                }
                self.drag.begin(
                    &self.board,
                    id,
                    pointer,
                    self.config.snap_enabled,
                    &mut self.source,
                )
            }
            PointerTarget::ResizeHandle { block, handle } => {
                let component = self
                    .board
                    .get(block)
                    .ok_or(EditorError::UnknownBlock(block))?
                    .component_key
                    .clone();
                if !handle.is_offered(self.catalog.resizable_axes(&component)) {
                    return Err(EditorError::HandleNotOffered { handle, component });
                }
                self.resize
                    .begin(&self.board, block, handle, pointer, &mut self.source)
            }
        }
    }

    /// Handle a pointer-move. Returns true if geometry was updated.
    ///
    /// Without an active session nothing is listening and the event is ignored.
    pub fn pointer_move(&mut self, pointer: Point, modifiers: Modifiers) -> bool {
        match self.interaction() {
            Interaction::Dragging => self
                .drag
                .update(&mut self.board, pointer, modifiers, self.config.snap_threshold)
                .is_some(),
            Interaction::Resizing => self
                .resize
                .update(&mut self.board, pointer, self.config.size_policy)
                .is_some(),
            Interaction::Idle => false,
        }
    }

    /// Handle a pointer-up: end the active session, if any.
    ///
    /// The release position is not applied; geometry reflects the last move.
    pub fn pointer_up(&mut self) -> bool {
        let ended_drag = self.drag.end(&mut self.source);
        let ended_resize = self.resize.end(&mut self.source);
        ended_drag || ended_resize
    }
}
