//! src/format.rs
//! Assembly of one rendered log line.
//!
//! Rendering produces a single `String` so emission is one write call; the
//! emitter never assembles a line across multiple writes, which keeps lines
//! from interleaving mid-record when the underlying channel is shared.

use std::fmt::{self, Write as _};

use crate::level::Level;
use crate::style::{self, Style};

/// Renders one line from its parts.
///
/// Layout, in order: color escape (when `color` is set), level tag, one
/// space, `[file: line]` plus one space (when `location` is present), the
/// formatted message, the reset escape (when `color` is set), and a newline.
pub(crate) fn render(
    style: &Style,
    level: Level,
    location: Option<(&str, u32)>,
    color: bool,
    args: fmt::Arguments<'_>,
) -> String {
    let mut line = String::with_capacity(64);
    if color {
        line.push_str(style.color(level));
    }
    line.push_str(style.tag(level));
    line.push(' ');
    if let Some((file, number)) = location {
        line.push_str(style.file_line_open);
        line.push_str(basename(file));
        line.push_str(style.file_line_sep);
        let _ = write!(line, "{number}");
        line.push_str(style.file_line_close);
        line.push(' ');
    }
    let _ = line.write_fmt(args);
    if color {
        line.push_str(style.reset);
    }
    line.push('\n');
    line
}

/// Renders a record using the active style and the build-time toggles.
pub(crate) fn render_record(
    level: Level,
    file: &str,
    line: u32,
    args: fmt::Arguments<'_>,
) -> String {
    let location = if cfg!(feature = "file-line") {
        Some((file, line))
    } else {
        None
    };
    render(
        style::active_style(),
        level,
        location,
        cfg!(feature = "color"),
        args,
    )
}

/// Returns the final path component, mirroring a file-name macro rather than
/// a full path.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: Style = Style::new();

    #[test]
    fn plain_line_with_location() {
        let line = render(
            &STYLE,
            Level::Info,
            Some(("main.c", 42)),
            false,
            format_args!("x={}", 5),
        );
        assert_eq!(line, "[INFO] [main.c: 42] x=5\n");
    }

    #[test]
    fn colored_line_with_location() {
        let line = render(
            &STYLE,
            Level::Info,
            Some(("main.c", 42)),
            true,
            format_args!("x={}", 5),
        );
        assert_eq!(line, "\x1b[1;32m[INFO] [main.c: 42] x=5\x1b[0m\n");
    }

    #[test]
    fn dropping_the_location_leaves_a_single_space() {
        let line = render(&STYLE, Level::Info, None, false, format_args!("x={}", 5));
        assert_eq!(line, "[INFO] x=5\n");
        assert!(!line.contains("  "));
    }

    #[test]
    fn every_level_uses_its_own_tag_and_color() {
        let cases = [
            (Level::Critical, "\x1b[1;35m[CRITICAL]"),
            (Level::Error, "\x1b[1;31m[ERROR]"),
            (Level::Warn, "\x1b[1;33m[WARN]"),
            (Level::Info, "\x1b[1;32m[INFO]"),
            (Level::Debug, "\x1b[1;36m[DEBUG]"),
            (Level::Trace, "\x1b[0;37m[TRACE]"),
        ];
        for (level, prefix) in cases {
            let line = render(&STYLE, level, None, true, format_args!("m"));
            assert!(line.starts_with(prefix), "wrong prefix for {level}: {line:?}");
            assert!(line.ends_with("\x1b[0m\n"));
        }
    }

    #[test]
    fn file_token_is_reduced_to_its_base_name() {
        assert_eq!(basename("src/main.c"), "main.c");
        assert_eq!(basename("a/b/c/driver.rs"), "driver.rs");
        assert_eq!(basename(r"src\windows\io.rs"), "io.rs");
        assert_eq!(basename("plain.rs"), "plain.rs");
    }

    #[test]
    fn message_arguments_are_expanded_in_place() {
        let line = render(
            &STYLE,
            Level::Warn,
            Some(("sensor.c", 7)),
            false,
            format_args!("temp {} above limit {}", 81, 75),
        );
        assert_eq!(line, "[WARN] [sensor.c: 7] temp 81 above limit 75\n");
    }
}
