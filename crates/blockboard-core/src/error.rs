//! Errors reported back to the host.

use crate::block::BlockId;
use crate::handles::ResizeHandle;
use thiserror::Error;

/// Editor errors.
///
/// None of these occur while the host keeps the listener lifecycle intact;
/// they surface host-side ordering or lookup mistakes instead of panicking.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    #[error("Block not found: {0}")]
    UnknownBlock(BlockId),
    #[error("An interaction session is already active")]
    SessionActive,
    #[error("Resize handle {handle:?} is not offered by component '{component}'")]
    HandleNotOffered {
        handle: ResizeHandle,
        component: String,
    },
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
