//! Shared helpers for the integration tests.
//!
//! The logging macros write through one process-wide channel, so tests that
//! install a capture buffer serialize themselves on [`serial`] and swap in a
//! fresh [`Capture`] each.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared in-memory writer handed to `elog::set_writer`.
///
/// Clones share one buffer, so a test keeps a handle while the logger owns
/// another.
#[derive(Clone, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Returns the number of complete lines written so far.
    pub fn line_count(&self) -> usize {
        self.contents().lines().count()
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process-wide writer or threshold.
pub fn serial() -> MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Installs a fresh capture buffer as the process-wide channel and returns
/// the test's handle to it.
pub fn install_capture() -> Capture {
    let capture = Capture::new();
    elog::set_writer(capture.clone());
    capture
}
