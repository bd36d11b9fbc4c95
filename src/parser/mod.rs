//! Command stream decoder
//!
//! Splits a byte stream into length-prefixed frames and decodes the
//! payload of each known opcode into a typed [`Command`].

mod actions;
mod error;
mod frame;
mod state;

pub use actions::Command;
pub use error::FrameError;
pub use frame::{Frame, Opcode, SENTINEL};
pub use state::{DecoderState, FrameDecoder};
