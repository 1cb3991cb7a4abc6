//! Board: the ordered block collection and its selection.

use crate::block::{Block, BlockId, Container};
use serde::{Deserialize, Serialize};

/// Partition of the board into focused and unfocused blocks.
///
/// Both lists keep board order. Built fresh on every query so it can never
/// drift from the blocks' `focused` flags.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub focused: Vec<&'a Block>,
    pub unfocused: Vec<&'a Block>,
}

impl Selection<'_> {
    /// Ids of the focused blocks, in board order.
    pub fn focused_ids(&self) -> Vec<BlockId> {
        self.focused.iter().map(|b| b.id).collect()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.focused.is_empty()
    }
}

/// The canvas model: a container and the blocks placed on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pub container: Container,
    blocks: Vec<Block>,
}

impl Board {
    /// Create an empty board.
    pub fn new(container: Container) -> Self {
        Self {
            container,
            blocks: Vec::new(),
        }
    }

    /// Add a block on top of the others. Returns its id.
    pub fn add_block(&mut self, block: Block) -> BlockId {
        let id = block.id;
        self.blocks.push(block);
        id
    }

    /// Remove a block.
    pub fn remove_block(&mut self, id: BlockId) -> Option<Block> {
        let index = self.index_of(id)?;
        Some(self.blocks.remove(index))
    }

    /// All blocks in board order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get a block by id.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a block by id.
    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the board has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Apply a pointer-down focus change to `id`.
    ///
    /// An already focused block keeps the whole selection untouched so a
    /// multi-selection can be dragged as one. Otherwise the block gains focus,
    /// replacing the selection unless `additive` is set.
    ///
    /// Returns false if the block does not exist.
    pub fn set_focus(&mut self, id: BlockId, additive: bool) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.blocks[index].focused {
            return true;
        }
        if !additive {
            self.clear_focus(None);
        }
        self.blocks[index].focused = true;
        true
    }

    /// Unfocus every block, or every block except `except`.
    pub fn clear_focus(&mut self, except: Option<BlockId>) {
        for block in &mut self.blocks {
            if Some(block.id) != except {
                block.focused = false;
            }
        }
    }

    /// Split the blocks by their current focus flags.
    pub fn partition(&self) -> Selection<'_> {
        let (focused, unfocused): (Vec<&Block>, Vec<&Block>) =
            self.blocks.iter().partition(|b| b.focused);
        Selection { focused, unfocused }
    }
}
