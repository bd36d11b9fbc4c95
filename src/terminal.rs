//! Terminal Executor
//!
//! Ties together the frame decoder, the command handlers and the screen
//! buffer. This is the main integration point between decoding and the
//! screen model: every processed frame is dispatched, applied, and then
//! handed to the renderer as a snapshot.

use tracing::{debug, error, info, trace, warn};

use crate::core::ScreenBuffer;
use crate::parser::{Command, DecoderState, Frame, FrameDecoder, FrameError};
use crate::renderer::Renderer;

/// Why decoding stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The 0xFF sentinel was read at a frame boundary
    Sentinel,
    /// Input ran out at a frame boundary
    EndOfInput,
    /// A frame's length byte was missing, zero, or promised too much
    Truncated(FrameError),
}

/// What happened to a single frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The command was applied to the screen
    Applied(Command),
    /// A known command with too short a payload; nothing changed
    Rejected(FrameError),
    /// An opcode outside the command table; skipped
    Unknown(u8),
}

/// Counters for one run over a byte stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames decoded and dispatched, unknown opcodes included
    pub frames: usize,
    /// Commands applied to the screen
    pub applied: usize,
    /// Commands skipped for a short payload
    pub rejected: usize,
    /// Frames with an unknown opcode
    pub unknown: usize,
    /// Renderer calls that failed
    pub render_failures: usize,
    pub stop: StopReason,
    /// Bytes left unread when decoding stopped
    pub unread: usize,
}

impl RunSummary {
    /// Whether the stream ended without a framing error
    pub fn is_clean(&self) -> bool {
        !matches!(self.stop, StopReason::Truncated(_))
    }
}

/// Terminal executor that owns the screen and applies commands to it
#[derive(Debug, Default, Clone)]
pub struct Terminal {
    screen: ScreenBuffer,
}

impl Terminal {
    /// Create a terminal with an empty 0x0 screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the screen
    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    /// Decode and execute a whole byte stream, rendering after every frame.
    ///
    /// Malformed commands are skipped; only a framing error stops early.
    pub fn process<R: Renderer + ?Sized>(&mut self, data: &[u8], renderer: &mut R) -> RunSummary {
        let mut decoder = FrameDecoder::new(data);
        let mut summary = RunSummary {
            frames: 0,
            applied: 0,
            rejected: 0,
            unknown: 0,
            render_failures: 0,
            stop: StopReason::EndOfInput,
            unread: 0,
        };

        while let Some(next) = decoder.next_frame() {
            let frame = match next {
                Ok(frame) => frame,
                Err(err) => {
                    warn!("{}", err);
                    summary.stop = StopReason::Truncated(err);
                    break;
                }
            };

            summary.frames += 1;
            match self.process_frame(&frame) {
                FrameOutcome::Applied(_) => summary.applied += 1,
                FrameOutcome::Rejected(_) => summary.rejected += 1,
                FrameOutcome::Unknown(_) => summary.unknown += 1,
            }

            if let Err(err) = renderer.render(&self.screen.snapshot()) {
                error!("Render failed: {}", err);
                summary.render_failures += 1;
            }
        }

        if decoder.state() == DecoderState::Terminated {
            summary.stop = StopReason::Sentinel;
        }
        summary.unread = decoder.remaining();

        debug!(
            frames = summary.frames,
            applied = summary.applied,
            unread = summary.unread,
            "Stream finished: {:?}",
            summary.stop
        );
        summary
    }

    /// Dispatch one decoded frame to its handler
    pub fn process_frame(&mut self, frame: &Frame<'_>) -> FrameOutcome {
        match Command::from_frame(frame) {
            Ok(Some(command)) => {
                self.apply(&command);
                FrameOutcome::Applied(command)
            }
            Ok(None) => {
                debug!(
                    "Skipping unknown command {:#04x} ({} bytes)",
                    frame.opcode,
                    frame.wire_len()
                );
                FrameOutcome::Unknown(frame.opcode)
            }
            Err(err) => {
                warn!("{}", err);
                FrameOutcome::Rejected(err)
            }
        }
    }

    /// Apply a single command to the screen
    pub fn apply(&mut self, command: &Command) {
        trace!("Applying {}", command.opcode());
        match *command {
            Command::ScreenSetup {
                width,
                height,
                color_mode,
            } => {
                self.screen
                    .reset(usize::from(width), usize::from(height), color_mode);
                info!(
                    "Screen initialized: {}x{}, Color Mode: {}",
                    width, height, color_mode
                );
            }
            Command::DrawCharacter { x, y, ch, .. } => {
                self.screen.set_cell(usize::from(x), usize::from(y), ch);
            }
            Command::DrawLine {
                x1, y1, x2, y2, ch, ..
            } => {
                if x1 != x2 && y1 != y2 {
                    debug!("Diagonal line ({}, {})-({}, {}) ignored", x1, y1, x2, y2);
                }
                self.screen.draw_line(
                    usize::from(x1),
                    usize::from(y1),
                    usize::from(x2),
                    usize::from(y2),
                    ch,
                );
            }
            Command::RenderText { x, y, ref text, .. } => {
                self.screen.draw_text(usize::from(x), usize::from(y), text);
            }
            Command::CursorMove { x, y } => {
                self.screen.move_cursor(usize::from(x), usize::from(y));
            }
            Command::DrawAtCursor { ch, .. } => {
                self.screen.put_at_cursor(ch);
            }
            Command::ClearScreen => {
                self.screen.clear();
            }
        }
    }
}
