//! Screen commands decoded from frames
//!
//! Each known opcode decodes into one typed command. Decoding checks the
//! handler's minimum arity; bytes beyond it are ignored, except for
//! `RenderText` where they are the text itself.
//!
//! Color bytes are carried through but nothing on the grid uses them.

use super::error::FrameError;
use super::frame::{Frame, Opcode};

/// Commands produced by the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 0x1: reallocate the grid
    ScreenSetup {
        width: u8,
        height: u8,
        color_mode: u8,
    },

    /// 0x2: write one character
    DrawCharacter { x: u8, y: u8, color: u8, ch: char },

    /// 0x3: horizontal or vertical run of one character, endpoints inclusive
    DrawLine {
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        color: u8,
        ch: char,
    },

    /// 0x4: characters written left to right from `(x, y)`
    RenderText {
        x: u8,
        y: u8,
        color: u8,
        text: String,
    },

    /// 0x5: move the cursor, unvalidated
    CursorMove { x: u8, y: u8 },

    /// 0x6: write one character at the cursor
    DrawAtCursor { ch: char, color: u8 },

    /// 0x7: blank the grid, keeping its size
    ClearScreen,
}

impl Command {
    /// Decode the payload of a known opcode
    pub fn decode(opcode: Opcode, payload: &[u8]) -> Result<Self, FrameError> {
        let needed = opcode.min_payload();
        if payload.len() < needed {
            return Err(FrameError::Arity {
                opcode,
                needed,
                got: payload.len(),
            });
        }

        let p = payload;
        let command = match opcode {
            Opcode::ScreenSetup => Command::ScreenSetup {
                width: p[0],
                height: p[1],
                color_mode: p[2],
            },
            Opcode::DrawCharacter => Command::DrawCharacter {
                x: p[0],
                y: p[1],
                color: p[2],
                ch: char::from(p[3]),
            },
            Opcode::DrawLine => Command::DrawLine {
                x1: p[0],
                y1: p[1],
                x2: p[2],
                y2: p[3],
                color: p[4],
                ch: char::from(p[5]),
            },
            Opcode::RenderText => Command::RenderText {
                x: p[0],
                y: p[1],
                color: p[2],
                text: p[3..].iter().copied().map(char::from).collect(),
            },
            Opcode::CursorMove => Command::CursorMove { x: p[0], y: p[1] },
            Opcode::DrawAtCursor => Command::DrawAtCursor {
                ch: char::from(p[0]),
                color: p[1],
            },
            Opcode::ClearScreen => Command::ClearScreen,
        };

        Ok(command)
    }

    /// Decode a frame. `Ok(None)` means the opcode is not a known command;
    /// such frames are skipped without being an error.
    pub fn from_frame(frame: &Frame<'_>) -> Result<Option<Self>, FrameError> {
        match frame.kind() {
            Some(opcode) => Self::decode(opcode, frame.payload).map(Some),
            None => Ok(None),
        }
    }

    /// The opcode this command is carried by
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::ScreenSetup { .. } => Opcode::ScreenSetup,
            Command::DrawCharacter { .. } => Opcode::DrawCharacter,
            Command::DrawLine { .. } => Opcode::DrawLine,
            Command::RenderText { .. } => Opcode::RenderText,
            Command::CursorMove { .. } => Opcode::CursorMove,
            Command::DrawAtCursor { .. } => Opcode::DrawAtCursor,
            Command::ClearScreen => Opcode::ClearScreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_screen_setup() {
        let cmd = Command::decode(Opcode::ScreenSetup, &[20, 10, 0]).unwrap();
        assert_eq!(
            cmd,
            Command::ScreenSetup {
                width: 20,
                height: 10,
                color_mode: 0
            }
        );
    }

    #[test]
    fn test_decode_draw_character_latin1() {
        let cmd = Command::decode(Opcode::DrawCharacter, &[1, 2, 0, 0xe9]).unwrap();
        assert_eq!(
            cmd,
            Command::DrawCharacter {
                x: 1,
                y: 2,
                color: 0,
                ch: '\u{e9}'
            }
        );
    }

    #[test]
    fn test_decode_render_text() {
        let cmd = Command::decode(Opcode::RenderText, &[2, 2, 0, b'H', b'i']).unwrap();
        assert_eq!(
            cmd,
            Command::RenderText {
                x: 2,
                y: 2,
                color: 0,
                text: "Hi".to_string()
            }
        );

        // Empty text is still a valid command
        let cmd = Command::decode(Opcode::RenderText, &[0, 0, 0]).unwrap();
        assert!(matches!(cmd, Command::RenderText { ref text, .. } if text.is_empty()));
    }

    #[test]
    fn test_decode_ignores_extra_bytes() {
        let cmd = Command::decode(Opcode::CursorMove, &[4, 5, 6, 7]).unwrap();
        assert_eq!(cmd, Command::CursorMove { x: 4, y: 5 });

        let cmd = Command::decode(Opcode::ClearScreen, &[9, 9]).unwrap();
        assert_eq!(cmd, Command::ClearScreen);
    }

    #[test]
    fn test_decode_short_payload() {
        for op in Opcode::ALL {
            let needed = op.min_payload();
            if needed == 0 {
                continue;
            }
            let payload = vec![0u8; needed - 1];
            assert_eq!(
                Command::decode(op, &payload),
                Err(FrameError::Arity {
                    opcode: op,
                    needed,
                    got: needed - 1
                })
            );
        }
    }

    #[test]
    fn test_from_frame_unknown_opcode() {
        let frame = Frame {
            opcode: 0x08,
            length: 2,
            payload: &[1],
        };
        assert_eq!(Command::from_frame(&frame), Ok(None));
    }

    #[test]
    fn test_command_opcode() {
        let cmd = Command::DrawAtCursor { ch: 'x', color: 0 };
        assert_eq!(cmd.opcode(), Opcode::DrawAtCursor);
        assert_eq!(Command::ClearScreen.opcode(), Opcode::ClearScreen);
    }
}
