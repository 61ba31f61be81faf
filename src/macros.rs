//! src/macros.rs
//! The leveled logging statements.
//!
//! Each statement expands to a compile-time comparison against
//! [`STATIC_MAX_LEVEL`](crate::STATIC_MAX_LEVEL); statements above the
//! threshold contribute no code and never evaluate their format arguments.
//! Compiled-in statements consult the run-time threshold (when the
//! `runtime-level` feature is enabled) and then forward one rendered line to
//! the process-wide output channel.

/// Logs a message at an explicit [`Level`](crate::Level).
///
/// [`Level::Off`](crate::Level) is a sentinel and never emits. The format
/// arguments are evaluated only when the statement passes the compile-time
/// gate, so a disabled statement has zero cost and no side effects.
///
/// # Example
/// ```
/// use elog::Level;
///
/// elog::log!(Level::Warn, "queue at {} of {}", 90, 100);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let level = $level;
        if (level as u8) <= ($crate::STATIC_MAX_LEVEL as u8)
            && !::core::matches!(level, $crate::Level::Off)
            && $crate::__private::enabled(level)
        {
            $crate::__private::emit(
                level,
                ::core::file!(),
                ::core::line!(),
                ::core::format_args!($($arg)+),
            );
        }
    }};
}

/// Logs at CRITICAL severity.
///
/// # Example
/// ```
/// elog::critical!("watchdog reset, last task {}", 7);
/// ```
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Critical, $($arg)+)
    };
}

/// Logs at ERROR severity.
///
/// # Example
/// ```
/// elog::error!("write failed on sector {}", 12);
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Logs at WARN severity.
///
/// # Example
/// ```
/// elog::warn!("battery at {}%", 9);
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Logs at INFO severity.
///
/// # Example
/// ```
/// elog::info!("link up at {} baud", 115_200);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Logs at DEBUG severity.
///
/// Compiled out under the default threshold; enable the `max-level-debug`
/// or `max-level-trace` feature to generate code for it.
///
/// # Example
/// ```
/// elog::debug!("cache fill took {}us", 312);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Logs at TRACE severity.
///
/// Compiled out under the default threshold; enable the `max-level-trace`
/// feature to generate code for it.
///
/// # Example
/// ```
/// elog::trace!("isr entry, pending={:#x}", 0x40u32);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Trace, $($arg)+)
    };
}
