//! Character Grid
//!
//! A 2D grid of single characters representing the visible screen area.
//! Every cell starts out as a space.

use serde::{Deserialize, Serialize};

/// The character every freshly allocated cell holds
pub const BLANK: char = ' ';

/// A row of cells in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row
    pub cells: Vec<char>,
}

impl Row {
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![BLANK; cols],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the length of content (excluding trailing blanks)
    pub fn content_len(&self) -> usize {
        self.cells
            .iter()
            .rposition(|&c| c != BLANK)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &c in &self.cells {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The screen grid - a 2D array of characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// The rows in the grid
    rows: Vec<Row>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    num_rows: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new(cols)).collect(),
            cols,
            num_rows: rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.num_rows
    }

    /// Whether `(col, row)` addresses a cell of this grid
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.num_rows
    }

    /// Get the character stored at a cell
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.cells.get(col)).copied()
    }

    /// Get a mutable reference to a cell
    pub fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut char> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }

    /// Get a reference to a row
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Iterate over all rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Replace the grid with a fresh blank grid of the given size
    pub fn reallocate(&mut self, cols: usize, rows: usize) {
        *self = Self::new(cols, rows);
    }

    /// Whether every cell holds a blank
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| r.content_len() == 0)
    }
}
