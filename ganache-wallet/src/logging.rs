use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it again is a no-op.
///
/// In the browser every event becomes one console line; natively the
/// filter comes from `RUST_LOG`, falling back to `level`.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    #[cfg(target_arch = "wasm32")]
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(console::MakeConsoleWriter)
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

/// Text of one formatted event, without the trailing newline the formatter
/// appends. `None` when there is nothing to print.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn console_line(buffer: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(buffer);
    let line = line.trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub struct MakeConsoleWriter;

    /// Buffers one event and hands it to the console when dropped.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let Some(line) = super::console_line(&self.buffer) else {
                return;
            };
            let value = JsValue::from_str(&line);
            match self.level {
                Level::ERROR => console::error_1(&value),
                Level::WARN => console::warn_1(&value),
                Level::INFO => console::info_1(&value),
                Level::DEBUG => console::debug_1(&value),
                _ => console::log_1(&value),
            }
        }
    }

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { level: Level::INFO, buffer: Vec::new() }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter { level: *meta.level(), buffer: Vec::new() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line_trims_newline() {
        assert_eq!(console_line(b" INFO ganache_wallet: ready\n").as_deref(), Some(" INFO ganache_wallet: ready"));
        assert_eq!(console_line(b"\n"), None);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Level::DEBUG);
        init(Level::INFO);
        tracing::info!("still logging");
    }
}
