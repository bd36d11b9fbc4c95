//! Deterministic snapshot generation
//!
//! Snapshots capture the complete screen state in a serializable format.
//! They are what renderers receive after each processed frame, and what
//! the CLI prints with `--json`. Given the same byte stream, the decoder
//! must produce identical snapshots.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use super::cursor::Cursor;
use super::screen::ScreenBuffer;

/// A complete snapshot of the screen state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Screen dimensions
    pub width: usize,
    pub height: usize,
    /// Color mode from the last setup
    pub color_mode: u8,
    /// Cursor position, possibly outside the grid
    pub cursor: Cursor,
    /// Grid content, one string of `width` chars per row
    pub rows: Vec<String>,
}

impl Snapshot {
    /// Create a snapshot from the current screen state
    pub fn from_screen(screen: &ScreenBuffer) -> Self {
        Self {
            width: screen.width(),
            height: screen.height(),
            color_mode: screen.color_mode(),
            cursor: screen.cursor(),
            rows: screen.rows_text(),
        }
    }

    /// Serialize snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a simple text representation of the screen, rows joined by newlines
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }

    /// Rows with every non-printable cell replaced by `replacement`.
    ///
    /// Cells are raw bytes widened to chars, so control characters can end
    /// up in the grid. Those must never reach a real display surface.
    pub fn printable_rows(&self, replacement: char) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| if is_printable(c) { c } else { replacement })
                    .collect()
            })
            .collect()
    }

    /// Get the character at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|r| r.chars().nth(x))
    }
}

/// A cell is printable if it occupies exactly one column
fn is_printable(c: char) -> bool {
    matches!(c.width(), Some(1))
}
