//! Screen Core Module
//!
//! Platform-independent screen state. This module contains:
//! - The character grid
//! - Cursor position
//! - The screen buffer the command handlers mutate
//! - Deterministic snapshot generation
//!
//! The core is completely deterministic: given the same sequence of
//! commands, it will always produce the same state.

mod cursor;
mod grid;
mod screen;
mod snapshot;

pub use cursor::Cursor;
pub use grid::{Grid, Row, BLANK};
pub use screen::ScreenBuffer;
pub use snapshot::Snapshot;
