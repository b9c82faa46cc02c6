pub mod sink;

use crate::output::sink::ClientSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutFrame {
    /// Regular "in-game" text line
    Line(String),
    /// System message from the game engine, not world related
    System(String),
    /// Room view content
    RoomView { content: String },
    /// Display prompt line
    Prompt(String),
}

impl OutFrame {
    /// The text carried by the frame, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            OutFrame::Line(s) | OutFrame::System(s) | OutFrame::Prompt(s) => s,
            OutFrame::RoomView { content } => content,
        }
    }
}

/// Collects frames produced while handling a command. Nothing is written
/// until `flush` hands them to a sink, so handlers never deal with I/O errors.
#[derive(Debug, Default)]
pub struct OutputHandle {
    frames: Vec<OutFrame>,
}

impl OutputHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Line(s.into()));
    }

    pub fn system(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::System(s.into()));
    }

    pub fn room_view(&mut self, content: impl Into<String>) {
        self.frames.push(OutFrame::RoomView { content: content.into() });
    }

    pub fn prompt(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Prompt(s.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pending frames, emptying the buffer.
    pub fn take(&mut self) -> Vec<OutFrame> {
        std::mem::take(&mut self.frames)
    }

    /// Sends all pending frames to `sink`, in order.
    pub fn flush<S>(&mut self, sink: &mut S) -> std::io::Result<()>
    where
        S: ClientSink + ?Sized,
    {
        for frame in self.frames.drain(..) {
            sink.send_frame(frame)?;
        }
        sink.flush()
    }
}
