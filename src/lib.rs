#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `elog` is a compile-time-configurable leveled logging facility. Six
//! statements — [`critical!`], [`error!`], [`warn!`], [`info!`],
//! [`debug!`], [`trace!`] — format a message with a level tag, an optional
//! `[file: line]` annotation, and optional ANSI color, then forward one
//! fully assembled line to a blocking output channel. Statements above the
//! compile-time threshold are eliminated from the generated code entirely;
//! compiled-in statements may additionally be suppressed by a mutable
//! run-time threshold.
//!
//! # Design
//!
//! The compile-time threshold is a `const`, [`STATIC_MAX_LEVEL`], selected
//! by the `max-level-*` cargo features (default: [`Level::Info`]). Every
//! macro expansion starts with a comparison against it; for a statement
//! above the threshold the branch is constant-false, the format arguments
//! sit inside the dead branch and are never evaluated, and the optimizer
//! removes the whole expansion. The run-time threshold is one process-wide
//! relaxed atomic byte read once per call — an advisory filtering knob, not
//! a synchronization point. Rendering builds the whole line in one `String`
//! so emission is a single write and the emitter itself never interleaves
//! partial lines.
//!
//! # Invariants
//!
//! - Levels are totally ordered; a larger value is more verbose.
//!   [`Level::Off`] never matches an emission check.
//! - A statement above [`STATIC_MAX_LEVEL`] evaluates none of its
//!   arguments.
//! - A compiled-in statement emits iff its level is at or below the
//!   run-time threshold (always, when the `runtime-level` feature is off).
//! - Each emitted record is exactly one line handed to the channel in one
//!   write call.
//!
//! # Errors
//!
//! The facility has no error conditions of its own. The macros are
//! fire-and-forget: a failing output channel is neither observed nor
//! reported. [`LogSink`] surfaces the wrapped writer's
//! [`io::Error`](std::io::Error) values unchanged for callers that want
//! them.
//!
//! # Examples
//!
//! ```
//! elog::info!("link up at {} baud", 115_200);
//! elog::warn!("battery at {}%", 9);
//!
//! // Above the compile-time threshold: no code, no argument evaluation.
//! elog::trace!("isr entry");
//! ```
//!
//! Routing output somewhere other than standard output:
//!
//! ```
//! use elog::{Level, LogSink};
//!
//! let mut sink = LogSink::new(Vec::new());
//! sink.write_record(Level::Info, "boot.c", 12, format_args!("ready"))?;
//! assert!(!sink.get_ref().is_empty());
//! # Ok::<(), std::io::Error>(())
//! ```

mod format;
mod level;
mod macros;
#[cfg(feature = "runtime-level")]
mod runtime;
mod sink;
mod style;

pub use level::Level;
#[cfg(feature = "runtime-level")]
pub use runtime::{level, set_level};
pub use sink::{LogSink, set_writer};
pub use style::{Style, set_style};

/// Compile-time threshold: the most verbose level that generates any code.
///
/// Selected by the mutually exclusive `max-level-*` cargo features; with
/// none enabled the threshold is [`Level::Info`], so [`debug!`] and
/// [`trace!`] statements vanish from the build. The run-time threshold
/// starts at this value.
pub const STATIC_MAX_LEVEL: Level = if cfg!(feature = "max-level-off") {
    Level::Off
} else if cfg!(feature = "max-level-critical") {
    Level::Critical
} else if cfg!(feature = "max-level-error") {
    Level::Error
} else if cfg!(feature = "max-level-warn") {
    Level::Warn
} else if cfg!(feature = "max-level-info") {
    Level::Info
} else if cfg!(feature = "max-level-debug") {
    Level::Debug
} else if cfg!(feature = "max-level-trace") {
    Level::Trace
} else {
    Level::Info
};

#[doc(hidden)]
pub mod __private {
    //! Support routines reached only through macro expansions.

    pub use crate::sink::emit;

    use crate::level::Level;

    /// Run-time gate consulted by compiled-in statements.
    #[must_use]
    pub fn enabled(level: Level) -> bool {
        #[cfg(feature = "runtime-level")]
        let pass = crate::runtime::passes(level);

        #[cfg(not(feature = "runtime-level"))]
        let pass = {
            let _ = level;
            true
        };

        pass
    }
}
