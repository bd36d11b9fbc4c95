//! Frame Decoder State Machine
//!
//! Walks a fully available byte stream one frame at a time. It is a pure
//! forward scan: opcodes are only ever read at frame boundaries, so a 0xFF
//! inside a payload is just data.
//!
//! # State Machine
//!
//! - ReadingOpcode: at a frame boundary. 0xFF terminates, end of input exhausts.
//! - ReadingLength: opcode consumed, the length byte must follow.
//! - ReadingPayload: length consumed, `length - 1` bytes must follow.
//!
//! Terminal states: Terminated (sentinel), Exhausted (input ran out at a
//! frame boundary), Truncated (a frame's promise was broken). Once in a
//! terminal state the decoder yields nothing more.

use super::error::FrameError;
use super::frame::{Frame, SENTINEL};

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    ReadingOpcode,
    ReadingLength { opcode: u8 },
    ReadingPayload { opcode: u8, length: u8 },
    Terminated,
    Exhausted,
    Truncated,
}

impl DecoderState {
    /// Whether decoding has stopped for good
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            DecoderState::Terminated | DecoderState::Exhausted | DecoderState::Truncated
        )
    }
}

/// The frame decoder
#[derive(Debug, Clone)]
pub struct FrameDecoder<'a> {
    data: &'a [u8],
    /// Index of the next unread byte
    position: usize,
    state: DecoderState,
}

impl<'a> FrameDecoder<'a> {
    /// Create a decoder at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            state: DecoderState::ReadingOpcode,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Index of the next unread byte
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes not consumed by the decoder
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Read the next frame.
    ///
    /// Returns `None` once the stream is finished. A framing error is
    /// returned once and moves the decoder to `Truncated`.
    pub fn next_frame(&mut self) -> Option<Result<Frame<'a>, FrameError>> {
        loop {
            match self.state {
                DecoderState::ReadingOpcode => {
                    let Some(&opcode) = self.data.get(self.position) else {
                        self.state = DecoderState::Exhausted;
                        return None;
                    };
                    self.position += 1;

                    if opcode == SENTINEL {
                        self.state = DecoderState::Terminated;
                        return None;
                    }
                    self.state = DecoderState::ReadingLength { opcode };
                }
                DecoderState::ReadingLength { opcode } => {
                    let Some(&length) = self.data.get(self.position) else {
                        return Some(Err(self.truncate(FrameError::MissingLength { opcode })));
                    };
                    self.position += 1;

                    if length == 0 {
                        return Some(Err(self.truncate(FrameError::ZeroLength { opcode })));
                    }
                    self.state = DecoderState::ReadingPayload { opcode, length };
                }
                DecoderState::ReadingPayload { opcode, length } => {
                    let size = usize::from(length) - 1;
                    let available = self.remaining();
                    if available < size {
                        return Some(Err(self.truncate(FrameError::Truncated {
                            opcode,
                            declared: length,
                            available,
                        })));
                    }

                    let payload = &self.data[self.position..self.position + size];
                    self.position += size;
                    self.state = DecoderState::ReadingOpcode;
                    return Some(Ok(Frame {
                        opcode,
                        length,
                        payload,
                    }));
                }
                DecoderState::Terminated | DecoderState::Exhausted | DecoderState::Truncated => {
                    return None;
                }
            }
        }
    }

    fn truncate(&mut self, err: FrameError) -> FrameError {
        self.state = DecoderState::Truncated;
        err
    }
}

impl<'a> Iterator for FrameDecoder<'a> {
    type Item = Result<Frame<'a>, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_finished() {
            (0, Some(0))
        } else {
            // Every frame takes at least two bytes; a framing error takes one
            (0, Some(self.remaining() / 2 + 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_single_frame() {
        let data = [0x05, 0x03, 7, 8, 0xFF];
        let mut decoder = FrameDecoder::new(&data);

        let frame = decoder.next_frame().unwrap().unwrap();
        assert_eq!(frame.opcode, 0x05);
        assert_eq!(frame.length, 3);
        assert_eq!(frame.payload, &[7, 8]);

        assert!(decoder.next_frame().is_none());
        assert_eq!(decoder.state(), DecoderState::Terminated);
        assert_eq!(decoder.remaining(), 0);
    }

    #[test]
    fn test_decoder_sentinel_ignores_rest() {
        let data = [0x07, 0x01, 0xFF, 0x01, 0x04];
        let mut decoder = FrameDecoder::new(&data);

        let frame = decoder.next_frame().unwrap().unwrap();
        assert_eq!(frame.opcode, 0x07);
        assert!(frame.payload.is_empty());

        assert!(decoder.next_frame().is_none());
        assert_eq!(decoder.state(), DecoderState::Terminated);
        assert_eq!(decoder.position(), 3);
        assert_eq!(decoder.remaining(), 2);
    }

    #[test]
    fn test_decoder_sentinel_inside_payload_is_data() {
        let data = [0x02, 0x05, 0xFF, 0xFF, 0xFF, 0xFF];
        let frames: Vec<_> = FrameDecoder::new(&data).collect();

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_ref().unwrap().payload, &[0xFF; 4]);
    }

    #[test]
    fn test_decoder_exhausted_without_sentinel() {
        let data = [0x05, 0x03, 1, 1];
        let mut decoder = FrameDecoder::new(&data);

        assert!(decoder.next_frame().unwrap().is_ok());
        assert!(decoder.next_frame().is_none());
        assert_eq!(decoder.state(), DecoderState::Exhausted);
    }

    #[test]
    fn test_decoder_empty_input() {
        let mut decoder = FrameDecoder::new(&[]);
        assert!(decoder.next_frame().is_none());
        assert_eq!(decoder.state(), DecoderState::Exhausted);
    }

    #[test]
    fn test_decoder_missing_length() {
        let data = [0x07, 0x01, 0x02];
        let mut decoder = FrameDecoder::new(&data);

        assert!(decoder.next_frame().unwrap().is_ok());
        assert_eq!(
            decoder.next_frame(),
            Some(Err(FrameError::MissingLength { opcode: 0x02 }))
        );
        assert_eq!(decoder.state(), DecoderState::Truncated);
        assert!(decoder.next_frame().is_none());
    }

    #[test]
    fn test_decoder_truncated_payload() {
        // length 6 promises 5 payload bytes, only 3 remain
        let data = [0x02, 0x06, 1, 2, 3];
        let mut decoder = FrameDecoder::new(&data);

        assert_eq!(
            decoder.next_frame(),
            Some(Err(FrameError::Truncated {
                opcode: 0x02,
                declared: 6,
                available: 3
            }))
        );
        assert_eq!(decoder.state(), DecoderState::Truncated);
        assert_eq!(decoder.remaining(), 3);
        assert!(decoder.next_frame().is_none());
    }

    #[test]
    fn test_decoder_zero_length_halts() {
        let data = [0x03, 0x00, 0x07, 0x01];
        let mut decoder = FrameDecoder::new(&data);

        assert_eq!(
            decoder.next_frame(),
            Some(Err(FrameError::ZeroLength { opcode: 0x03 }))
        );
        assert!(decoder.state().is_finished());
        assert!(decoder.next_frame().is_none());
    }

    #[test]
    fn test_decoder_unknown_opcode_skipped_by_length() {
        let data = [0x42, 0x04, 0x01, 0x01, 0x01, 0x07, 0x01];
        let frames: Vec<_> = FrameDecoder::new(&data)
            .map(|f| f.unwrap().opcode)
            .collect();
        assert_eq!(frames, vec![0x42, 0x07]);
    }

    #[test]
    fn test_decoder_length_one_means_empty_payload() {
        let data = [0x01, 0x01];
        let frame = FrameDecoder::new(&data).next().unwrap().unwrap();
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_decoder_size_hint_bounds_frames() {
        let data = [0x07, 0x01, 0x07, 0x01, 0x07, 0x01];
        let mut decoder = FrameDecoder::new(&data);
        assert_eq!(decoder.size_hint(), (0, Some(4)));
        assert_eq!(decoder.by_ref().count(), 3);
        assert_eq!(decoder.size_hint(), (0, Some(0)));

        let mut terminated = FrameDecoder::new(&[0xFF, 0x07, 0x01]);
        assert!(terminated.next().is_none());
        assert!(terminated.state().is_finished());
        assert_eq!(terminated.size_hint(), (0, Some(0)));
    }
}
