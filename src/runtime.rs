//! src/runtime.rs
//! Process-wide run-time threshold.
//!
//! The threshold is one byte shared by every caller. It starts at the
//! compile-time threshold and may be overwritten at any point; each log call
//! reads it once. Loads and stores are relaxed: a caller may observe a stale
//! value for the duration of one check, which is acceptable for an advisory
//! filtering knob. No guarantee is made about calling [`set_level`] or
//! [`level`] from interrupt or signal context.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::STATIC_MAX_LEVEL;
use crate::level::Level;

static RUNTIME_LEVEL: AtomicU8 = AtomicU8::new(STATIC_MAX_LEVEL as u8);

/// Overwrites the run-time threshold.
///
/// Compiled-in statements emit while their level is at or below the
/// threshold; [`Level::Off`] silences all of them, [`Level::Trace`] passes
/// all of them.
///
/// # Example
/// ```
/// use elog::Level;
///
/// elog::set_level(Level::Error);
/// elog::warn!("not emitted");
/// assert_eq!(elog::level(), Level::Error);
/// ```
pub fn set_level(level: Level) {
    RUNTIME_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Returns the current run-time threshold.
#[must_use]
pub fn level() -> Level {
    // Only `set_level` writes the byte, so the stored value is always a
    // valid discriminant; the fallback keeps an impossible read harmless.
    Level::from_u8(RUNTIME_LEVEL.load(Ordering::Relaxed)).unwrap_or(Level::Trace)
}

/// Reports whether a statement at `level` passes the run-time gate.
pub(crate) fn passes(level: Level) -> bool {
    level as u8 <= RUNTIME_LEVEL.load(Ordering::Relaxed)
}
