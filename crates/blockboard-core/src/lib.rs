//! Blockboard Core Library
//!
//! Block manipulation engine for the Blockboard visual editor: focus and
//! selection, pointer-driven drag and resize sessions, and alignment-guide
//! snapping. Rendering, the component registry UI and persistence live in
//! the host.

pub mod block;
pub mod board;
pub mod config;
pub mod drag;
pub mod editor;
pub mod error;
pub mod events;
pub mod handles;
pub mod input;
pub mod resize;
pub mod snap;

pub use block::{Block, BlockId, Container, Geometry};
pub use board::{Board, Selection};
pub use config::{EditorConfig, SizePolicy};
pub use drag::{DragController, DragSession, DragStep, lock_axis};
pub use editor::{Editor, Interaction};
pub use error::{EditorError, EditorResult};
pub use events::{EventSource, ListenerId, ListenerRegistry, PointerEventKind, Subscription};
pub use handles::{AxisRole, ComponentCatalog, ResizableAxes, ResizeHandle, visible_handles};
pub use input::{Modifiers, PointerTarget};
pub use resize::{ResizeController, ResizeSession, resize_geometry};
pub use snap::{AlignmentCandidate, AlignmentGuides, AlignmentSnap, GuideMarkers, SNAP_THRESHOLD};
