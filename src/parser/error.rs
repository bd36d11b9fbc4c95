//! Decode errors

use super::frame::Opcode;

/// Errors produced while decoding the command stream
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The stream ended right after an opcode
    #[error("Command length missing for command {opcode:#04x}")]
    MissingLength { opcode: u8 },

    /// A length byte of 0 cannot count itself
    #[error("Invalid zero length for command {opcode:#04x}")]
    ZeroLength { opcode: u8 },

    /// The declared length runs past the end of the stream
    #[error("Insufficient data for command {opcode:#04x}: declared length {declared}, {available} bytes remain")]
    Truncated {
        opcode: u8,
        declared: u8,
        available: usize,
    },

    /// A known command's payload is shorter than its handler needs
    #[error("Invalid {opcode} data: needs {needed} bytes, got {got}")]
    Arity {
        opcode: Opcode,
        needed: usize,
        got: usize,
    },
}

impl FrameError {
    /// Whether this error ends decoding. Framing errors leave the stream
    /// unrecoverable; an arity error only skips one command.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FrameError::Arity { .. })
    }
}
