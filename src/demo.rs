//! Built-in sample stream
//!
//! Played by the CLI when no input is given.

/// A 20x10 monochrome screen with a character, a line and some text
pub fn demo_stream() -> Vec<u8> {
    vec![
        0x01, 0x04, 0x14, 0x0A, 0x00, // Screen setup: 20x10, monochrome
        0x02, 0x05, 0x05, 0x03, 0x00, b'A', // Draw 'A' at (5,3)
        0x03, 0x07, 0x00, 0x00, 0x0A, 0x00, 0x00, b'-', // Line (0,0)-(10,0)
        0x04, 0x06, 0x02, 0x02, 0x00, b'H', b'i', // "Hi" at (2,2)
        0xFF, // End of stream
    ]
}
