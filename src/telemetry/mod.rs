//! `tracing` output for the browser console.

use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber. Later calls are ignored.
pub fn init(max_level: LevelFilter) {
    // No wall clock on wasm32-unknown-unknown, so no timestamps.
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .without_time()
        .with_target(true)
        .with_writer(ConsoleMakeWriter)
        .try_init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = take_line(&mut self.buf) {
            emit(self.level, &line);
        }
    }
}

fn take_line(buf: &mut Vec<u8>) -> Option<String> {
    let raw = std::mem::take(buf);
    let line = String::from_utf8_lossy(&raw).trim_end().to_string();
    (!line.is_empty()).then_some(line)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&msg),
        Level::WARN => console::warn_1(&msg),
        Level::INFO => console::info_1(&msg),
        _ => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_take_line_trims_trailing_newline() {
        let mut buf = b" INFO navmenu::state: added node\n".to_vec();
        assert_eq!(
            take_line(&mut buf).as_deref(),
            Some(" INFO navmenu::state: added node")
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_take_line_skips_blank_output() {
        let mut buf = b"\n  \n".to_vec();
        assert_eq!(take_line(&mut buf), None);
    }

    #[test]
    fn test_writer_buffers_until_drop() {
        let mut writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
        writer.write_all(b"moved ").expect("in-memory write");
        writer.write_all(b"node\n").expect("in-memory write");
        assert_eq!(writer.buf, b"moved node\n");
    }
}
