//! Plain text renderer
//!
//! Prints each snapshot as rows of characters to any writer, optionally
//! clearing the display first.

use std::io::{self, Write};

use crate::core::Snapshot;

use super::Renderer;

/// Clear the display and home the cursor
const CLEAR_SEQUENCE: &[u8] = b"\x1b[2J\x1b[H";

/// How snapshots are laid out on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Clear the display before every frame
    pub clear: bool,
    /// Print a blank separator after every frame
    pub separator: bool,
    /// Shown in place of non-printable cells
    pub replacement: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            clear: true,
            separator: true,
            replacement: '.',
        }
    }
}

/// Renderer writing text frames to `W`
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    options: RenderOptions,
}

impl TextRenderer<io::Stdout> {
    /// Render to standard output
    pub fn stdout(options: RenderOptions) -> Self {
        Self::with_options(io::stdout(), options)
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn with_options(out: W, options: RenderOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if self.options.clear {
            self.out.write_all(CLEAR_SEQUENCE)?;
        }
        for row in snapshot.printable_rows(self.options.replacement) {
            writeln!(self.out, "{}", row)?;
        }
        if self.options.separator {
            writeln!(self.out, "\n")?;
        }
        self.out.flush()
    }
}
