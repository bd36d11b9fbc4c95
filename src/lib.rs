//! Bytegrid
//!
//! A decoder for a length-prefixed binary command stream that drives a 2D
//! character screen. This crate provides:
//!
//! - `core`: Screen buffer, character grid, cursor, snapshots
//! - `parser`: Frame decoder and the fixed opcode table
//! - `terminal`: Command handlers and the decode/dispatch/render loop
//! - `renderer`: Display sinks for screen snapshots
//! - `app`: Configuration and logging setup

pub mod app;
pub mod core;
pub mod demo;
pub mod parser;
pub mod renderer;
pub mod terminal;

pub use crate::core::{ScreenBuffer, Snapshot};
pub use crate::parser::{Command, FrameDecoder, FrameError, Opcode};
pub use crate::renderer::Renderer;
pub use crate::terminal::{RunSummary, StopReason, Terminal};
