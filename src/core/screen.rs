//! Screen Buffer
//!
//! The mutable screen state driven by the command stream: grid
//! dimensions, the character grid itself, the cursor and the color mode.
//!
//! Writes are clipped: any write outside the current grid is silently
//! dropped. The cursor may point anywhere, including outside the grid.

use super::cursor::Cursor;
use super::grid::{Grid, Row};
use super::snapshot::Snapshot;

/// The screen buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenBuffer {
    /// Character cells, always `height` rows of `width` columns
    grid: Grid,
    /// Current cursor position
    cursor: Cursor,
    /// Color mode from the last setup, stored but not interpreted
    color_mode: u8,
}

impl ScreenBuffer {
    /// Create an empty 0x0 screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a screen that has already been set up
    pub fn with_size(width: usize, height: usize, color_mode: u8) -> Self {
        let mut screen = Self::new();
        screen.reset(width, height, color_mode);
        screen
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn color_mode(&self) -> u8 {
        self.color_mode
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the character at `(x, y)`, if in bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.grid.cell(x, y)
    }

    /// Get a row of the grid
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.grid.row(y)
    }

    /// Get a row as a string, trailing blanks included
    pub fn row_text(&self, y: usize) -> Option<String> {
        self.grid.row(y).map(Row::to_string)
    }

    /// All rows as strings, top to bottom
    pub fn rows_text(&self) -> Vec<String> {
        self.grid.iter_rows().map(Row::to_string).collect()
    }

    /// Reallocate the grid to `width` x `height` blanks and set the color mode.
    ///
    /// Prior contents are discarded. The cursor is left where it was. With a
    /// zero dimension the grid has no addressable cells.
    pub fn reset(&mut self, width: usize, height: usize, color_mode: u8) {
        self.grid.reallocate(width, height);
        self.color_mode = color_mode;
    }

    /// Reallocate the grid at its current size, all blanks
    pub fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.grid.reallocate(width, height);
    }

    /// Write `c` at `(x, y)`. Returns whether the cell was in bounds.
    pub fn set_cell(&mut self, x: usize, y: usize, c: char) -> bool {
        if !self.grid.contains(x, y) {
            return false;
        }
        self.grid.cell_mut(x, y).map(|cell| *cell = c).is_some()
    }

    /// Store a new cursor position; it is not validated against the grid
    pub fn move_cursor(&mut self, x: usize, y: usize) {
        self.cursor.move_to(x, y);
    }

    /// Write `c` at the cursor if the cursor is inside the grid.
    /// The cursor does not move.
    pub fn put_at_cursor(&mut self, c: char) -> bool {
        if !self.cursor.is_within(self.width(), self.height()) {
            return false;
        }
        let Cursor { x, y } = self.cursor;
        self.set_cell(x, y, c)
    }

    /// Draw a vertical or horizontal run of `c`, endpoints inclusive.
    ///
    /// Diagonal lines are not supported and draw nothing. Each cell of the
    /// run is clipped on its own. Returns the number of cells written.
    pub fn draw_line(&mut self, x1: usize, y1: usize, x2: usize, y2: usize, c: char) -> usize {
        let mut written = 0;
        if x1 == x2 {
            for y in y1.min(y2)..=y1.max(y2) {
                written += usize::from(self.set_cell(x1, y, c));
            }
        } else if y1 == y2 {
            for x in x1.min(x2)..=x1.max(x2) {
                written += usize::from(self.set_cell(x, y1, c));
            }
        }
        written
    }

    /// Write `text` left to right starting at `(x, y)`, one cell per char.
    ///
    /// Characters past the right edge are dropped one by one; there is no
    /// wrapping. Returns the number of cells written.
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) -> usize {
        let mut written = 0;
        for (i, c) in text.chars().enumerate() {
            written += usize::from(self.set_cell(x.saturating_add(i), y, c));
        }
        written
    }

    /// Take a read-only snapshot for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_screen(self)
    }
}
