use crate::output::OutFrame;
use crate::rendering::ansi;
use std::io::Write;

/// Where output frames end up.
pub trait ClientSink {
    fn send_frame(&mut self, frame: OutFrame) -> std::io::Result<()>;

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Writes frames to a terminal-like writer, one line per frame.
pub struct ConsoleSink<W> {
    writer: W,
    color: bool,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClientSink for ConsoleSink<W> {
    fn send_frame(&mut self, frame: OutFrame) -> std::io::Result<()> {
        match frame {
            OutFrame::Line(s) => {
                self.writer.write_all(s.as_bytes())?;
                self.writer.write_all(b"\n")?;
            }
            OutFrame::System(s) => {
                if self.color {
                    write!(self.writer, "{}{s}{}", ansi::FG_YELLOW, ansi::RESET)?;
                } else {
                    self.writer.write_all(s.as_bytes())?;
                }
                self.writer.write_all(b"\n")?;
            }
            OutFrame::RoomView { content } => {
                self.writer.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    self.writer.write_all(b"\n")?;
                }
            }
            OutFrame::Prompt(p) => {
                // no newline; the player types on the same line
                self.writer.write_all(p.as_bytes())?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub frames: Vec<OutFrame>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of all frames except prompts.
    pub fn lines(&self) -> Vec<&str> {
        self.frames
            .iter()
            .filter(|f| !matches!(f, OutFrame::Prompt(_)))
            .map(|f| f.text())
            .collect()
    }

    /// Whether any non-prompt frame contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines().iter().filter(|l| l.contains(needle)).count()
    }
}

impl ClientSink for MemorySink {
    fn send_frame(&mut self, frame: OutFrame) -> std::io::Result<()> {
        self.frames.push(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputHandle;

    fn render(color: bool, frames: Vec<OutFrame>) -> String {
        let mut sink = ConsoleSink::new(Vec::new(), color);
        for f in frames {
            sink.send_frame(f).unwrap();
        }
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn console_plain() {
        let s = render(
            false,
            vec![
                OutFrame::Line("You go north.".into()),
                OutFrame::System("Usage: go <direction>".into()),
                OutFrame::RoomView { content: "A room\n".into() },
                OutFrame::Prompt("> ".into()),
            ],
        );
        assert_eq!(s, "You go north.\nUsage: go <direction>\nA room\n> ");
    }

    #[test]
    fn console_colors_system_frames() {
        let s = render(true, vec![OutFrame::System("hi".into())]);
        assert_eq!(s, "\x1b[33mhi\x1b[0m\n");
    }

    #[test]
    fn flush_preserves_order_and_empties_buffer() {
        let mut out = OutputHandle::new();
        out.line("one");
        out.system("two");
        out.prompt("> ");

        let mut sink = MemorySink::new();
        out.flush(&mut sink).unwrap();

        assert!(out.is_empty());
        assert_eq!(sink.frames.len(), 3);
        assert_eq!(sink.lines(), vec!["one", "two"]);
    }
}
