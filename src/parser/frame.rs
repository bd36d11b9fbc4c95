//! Frames and the opcode table
//!
//! Wire format:
//!
//! ```text
//! stream     := frame* terminator?
//! frame      := opcode:u8 length:u8 payload:u8[length - 1]
//! terminator := 0xFF
//! ```
//!
//! The length byte counts itself but not the opcode byte.

use std::fmt;

/// Opcode marking a clean end of stream
pub const SENTINEL: u8 = 0xFF;

/// The known commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    ScreenSetup = 0x01,
    DrawCharacter = 0x02,
    DrawLine = 0x03,
    RenderText = 0x04,
    CursorMove = 0x05,
    DrawAtCursor = 0x06,
    ClearScreen = 0x07,
}

impl Opcode {
    /// Every known opcode, in wire order
    pub const ALL: [Opcode; 7] = [
        Opcode::ScreenSetup,
        Opcode::DrawCharacter,
        Opcode::DrawLine,
        Opcode::RenderText,
        Opcode::CursorMove,
        Opcode::DrawAtCursor,
        Opcode::ClearScreen,
    ];

    /// Look up an opcode byte. Reserved values (0x00, 0x08-0xFE) and the
    /// sentinel map to `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.byte() == byte)
    }

    /// The wire value
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Human-readable command name
    pub fn name(self) -> &'static str {
        match self {
            Opcode::ScreenSetup => "screen setup",
            Opcode::DrawCharacter => "draw character",
            Opcode::DrawLine => "draw line",
            Opcode::RenderText => "render text",
            Opcode::CursorMove => "cursor movement",
            Opcode::DrawAtCursor => "draw at cursor",
            Opcode::ClearScreen => "clear screen",
        }
    }

    /// Minimum number of payload bytes the handler needs
    pub fn min_payload(self) -> usize {
        match self {
            Opcode::ScreenSetup => 3,
            Opcode::DrawCharacter => 4,
            Opcode::DrawLine => 6,
            Opcode::RenderText => 3,
            Opcode::CursorMove => 2,
            Opcode::DrawAtCursor => 2,
            Opcode::ClearScreen => 0,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One length-prefixed command unit, borrowed from the input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Raw opcode byte
    pub opcode: u8,
    /// Declared length, counting the length byte itself
    pub length: u8,
    /// `length - 1` payload bytes
    pub payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// The known opcode this frame carries, if any
    pub fn kind(&self) -> Option<Opcode> {
        Opcode::from_byte(self.opcode)
    }

    /// Bytes this frame occupies on the wire
    pub fn wire_len(&self) -> usize {
        2 + self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_lookup() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_byte(op.byte()), Some(op));
        }
        assert_eq!(Opcode::from_byte(0x00), None);
        assert_eq!(Opcode::from_byte(0x08), None);
        assert_eq!(Opcode::from_byte(0xFE), None);
        assert_eq!(Opcode::from_byte(SENTINEL), None);
    }

    #[test]
    fn test_opcode_arity_table() {
        let arities: Vec<usize> = Opcode::ALL.iter().map(|op| op.min_payload()).collect();
        assert_eq!(arities, vec![3, 4, 6, 3, 2, 2, 0]);
    }

    #[test]
    fn test_frame_kind() {
        let frame = Frame {
            opcode: 0x05,
            length: 3,
            payload: &[1, 2],
        };
        assert_eq!(frame.kind(), Some(Opcode::CursorMove));
        assert_eq!(frame.wire_len(), 4);

        let unknown = Frame {
            opcode: 0x42,
            length: 1,
            payload: &[],
        };
        assert_eq!(unknown.kind(), None);
    }
}
