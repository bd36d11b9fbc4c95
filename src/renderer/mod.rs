//! Renderer Module
//!
//! Renderers are the display sinks the decoder calls after every processed
//! frame. They only ever see a read-only [`Snapshot`]; a failing renderer
//! never stops decoding.

mod text;

use std::io;

use crate::core::Snapshot;

pub use text::{RenderOptions, TextRenderer};

/// A display sink for screen snapshots
pub trait Renderer {
    /// Display one snapshot
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        (**self).render(snapshot)
    }
}

/// Renderer that discards every snapshot
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &Snapshot) -> io::Result<()> {
        Ok(())
    }
}

/// Renderer that keeps every snapshot it is given
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    frames: Vec<Snapshot>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots in the order they were rendered
    pub fn frames(&self) -> &[Snapshot] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.frames.last()
    }

    pub fn into_frames(self) -> Vec<Snapshot> {
        self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScreenBuffer;

    #[test]
    fn test_recording_renderer() {
        let mut recorder = RecordingRenderer::new();
        let mut screen = ScreenBuffer::with_size(2, 1, 0);

        recorder.render(&screen.snapshot()).unwrap();
        screen.set_cell(0, 0, 'x');
        recorder.render(&screen.snapshot()).unwrap();

        assert_eq!(recorder.frames().len(), 2);
        assert_eq!(recorder.frames()[0].rows, vec!["  ".to_string()]);
        assert_eq!(recorder.last().unwrap().rows, vec!["x ".to_string()]);
    }

    #[test]
    fn test_renderer_through_mut_ref() {
        fn render_twice(mut r: impl Renderer, snapshot: &Snapshot) {
            r.render(snapshot).unwrap();
            r.render(snapshot).unwrap();
        }

        let mut recorder = RecordingRenderer::new();
        render_twice(&mut recorder, &ScreenBuffer::new().snapshot());
        assert_eq!(recorder.into_frames().len(), 2);
    }
}
