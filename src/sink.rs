//! src/sink.rs
//! Output channels: the process-wide writer behind the macros and the
//! explicit-handle [`LogSink`] wrapper.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::format;
use crate::level::Level;

/// Explicit-handle emitter wrapping an [`io::Write`] implementor.
///
/// The sink renders records through the same single-line path as the logging
/// macros but surfaces the writer's [`io::Error`] instead of swallowing it,
/// and carries no gating of its own: callers decide what reaches it. It
/// suits embedders whose idioms discourage implicit globals, and tests that
/// want to inspect rendered bytes.
///
/// # Examples
///
/// ```
/// use elog::{Level, LogSink};
///
/// let mut sink = LogSink::new(Vec::new());
/// sink.write_record(Level::Error, "serial.c", 7, format_args!("timeout after {}ms", 250))?;
///
/// let line = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(line.contains("[ERROR]"));
/// assert!(line.ends_with('\n'));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LogSink<W> {
    writer: W,
}

impl<W> LogSink<W> {
    /// Creates a sink over the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LogSink<W>
where
    W: Write,
{
    /// Renders one record and writes it as a single call.
    ///
    /// `file` and `line` name the originating call site; they are ignored
    /// when the `file-line` feature is disabled.
    pub fn write_record(
        &mut self,
        level: Level,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let rendered = format::render_record(level, file, line, args);
        self.writer.write_all(rendered.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

static WRITER: Mutex<Option<Box<dyn Write + Send>>> = Mutex::new(None);

fn lock_writer() -> MutexGuard<'static, Option<Box<dyn Write + Send>>> {
    // A panic while holding the lock must not silence every later log call.
    WRITER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide output channel used by the logging macros.
///
/// The default channel is standard output. Embedders substitute their own
/// synchronous channel here: a UART bridge, a debug-probe transport, or a
/// capture buffer in tests. The previous writer is dropped.
pub fn set_writer<W>(writer: W)
where
    W: Write + Send + 'static,
{
    *lock_writer() = Some(Box::new(writer));
}

/// Renders and writes one record, ignoring write failures.
///
/// Support routine for the logging macros; gating has already happened at
/// the call site by the time this runs.
#[doc(hidden)]
pub fn emit(level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
    let rendered = format::render_record(level, file, line, args);
    let mut slot = lock_writer();
    if let Some(writer) = slot.as_mut() {
        let _ = writer.write_all(rendered.as_bytes());
    } else {
        let _ = io::stdout().lock().write_all(rendered.as_bytes());
    }
}
