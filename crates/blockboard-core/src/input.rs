//! Pointer input types delivered by the host.

use crate::block::BlockId;
use crate::handles::ResizeHandle;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Modifiers with only shift held.
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Pointer-down adds to the selection instead of replacing it.
    pub fn is_additive(&self) -> bool {
        self.shift
    }

    /// Pointer-move is restricted to its dominant axis.
    pub fn is_axis_locked(&self) -> bool {
        self.shift
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// Empty canvas area.
    Background,
    /// The body of a block.
    Block(BlockId),
    /// A resize handle of a block.
    ResizeHandle { block: BlockId, handle: ResizeHandle },
}
