//! Cursor position
//!
//! The cursor is a free-standing position. It is never clamped to the grid:
//! anything that writes at the cursor must check bounds itself.

use serde::{Deserialize, Serialize};

/// Cursor position (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position
    pub x: usize,
    /// Row position
    pub y: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move to an absolute position
    pub fn move_to(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    /// Whether the cursor lies inside a `cols` x `rows` area
    pub fn is_within(&self, cols: usize, rows: usize) -> bool {
        self.x < cols && self.y < rows
    }
}
