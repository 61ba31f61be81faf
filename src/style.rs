//! src/style.rs
//! Per-level tags, ANSI colors, and the file:line bracket pieces.

use std::sync::OnceLock;

use crate::level::Level;

const BRIGHT_MAGENTA: &str = "\x1b[1;35m";
const BRIGHT_RED: &str = "\x1b[1;31m";
const BRIGHT_YELLOW: &str = "\x1b[1;33m";
const BRIGHT_GREEN: &str = "\x1b[1;32m";
const BRIGHT_CYAN: &str = "\x1b[1;36m";
const WHITE: &str = "\x1b[0;37m";
const RESET: &str = "\x1b[0m";

/// Presentation table consulted when a line is rendered.
///
/// Every string is independently overridable; the defaults produce bracketed
/// uppercase tags (`[INFO]`) wrapped in the standard bright ANSI color for
/// the level, and a `[file: line]` source annotation. A custom table is
/// installed once at startup with [`set_style`]; the fields are plain
/// `&'static str` so a table is a compile-time constant with no allocation
/// behind it.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Style {
    /// Tag for CRITICAL lines.
    pub critical_tag: &'static str,
    /// Tag for ERROR lines.
    pub error_tag: &'static str,
    /// Tag for WARN lines.
    pub warn_tag: &'static str,
    /// Tag for INFO lines.
    pub info_tag: &'static str,
    /// Tag for DEBUG lines.
    pub debug_tag: &'static str,
    /// Tag for TRACE lines.
    pub trace_tag: &'static str,
    /// Color escape opening CRITICAL lines.
    pub critical_color: &'static str,
    /// Color escape opening ERROR lines.
    pub error_color: &'static str,
    /// Color escape opening WARN lines.
    pub warn_color: &'static str,
    /// Color escape opening INFO lines.
    pub info_color: &'static str,
    /// Color escape opening DEBUG lines.
    pub debug_color: &'static str,
    /// Color escape opening TRACE lines.
    pub trace_color: &'static str,
    /// Escape closing every colored line.
    pub reset: &'static str,
    /// Text before the file name in the source annotation.
    pub file_line_open: &'static str,
    /// Text between the file name and the line number.
    pub file_line_sep: &'static str,
    /// Text after the line number.
    pub file_line_close: &'static str,
}

impl Style {
    /// Creates the default table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            critical_tag: "[CRITICAL]",
            error_tag: "[ERROR]",
            warn_tag: "[WARN]",
            info_tag: "[INFO]",
            debug_tag: "[DEBUG]",
            trace_tag: "[TRACE]",
            critical_color: BRIGHT_MAGENTA,
            error_color: BRIGHT_RED,
            warn_color: BRIGHT_YELLOW,
            info_color: BRIGHT_GREEN,
            debug_color: BRIGHT_CYAN,
            trace_color: WHITE,
            reset: RESET,
            file_line_open: "[",
            file_line_sep: ": ",
            file_line_close: "]",
        }
    }

    /// Returns the tag for a level.
    ///
    /// [`Level::Off`] has no tag; emission checks reject it before any
    /// rendering happens.
    #[must_use]
    pub const fn tag(&self, level: Level) -> &'static str {
        match level {
            Level::Off => "",
            Level::Critical => self.critical_tag,
            Level::Error => self.error_tag,
            Level::Warn => self.warn_tag,
            Level::Info => self.info_tag,
            Level::Debug => self.debug_tag,
            Level::Trace => self.trace_tag,
        }
    }

    /// Returns the opening color escape for a level.
    #[must_use]
    pub const fn color(&self, level: Level) -> &'static str {
        match level {
            Level::Off => "",
            Level::Critical => self.critical_color,
            Level::Error => self.error_color,
            Level::Warn => self.warn_color,
            Level::Info => self.info_color,
            Level::Debug => self.debug_color,
            Level::Trace => self.trace_color,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_STYLE: Style = Style::new();
static STYLE: OnceLock<Style> = OnceLock::new();

/// Installs a custom presentation table for the process.
///
/// The table is consulted by every subsequent render, so embedders should
/// install it before the first log statement runs. Installation is
/// first-write-wins; a second call returns the rejected table unchanged.
pub fn set_style(style: Style) -> Result<(), Style> {
    STYLE.set(style)
}

/// Returns the active table, falling back to the defaults.
pub(crate) fn active_style() -> &'static Style {
    STYLE.get().unwrap_or(&DEFAULT_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tags_are_bracketed_uppercase() {
        let style = Style::new();
        assert_eq!(style.tag(Level::Critical), "[CRITICAL]");
        assert_eq!(style.tag(Level::Error), "[ERROR]");
        assert_eq!(style.tag(Level::Warn), "[WARN]");
        assert_eq!(style.tag(Level::Info), "[INFO]");
        assert_eq!(style.tag(Level::Debug), "[DEBUG]");
        assert_eq!(style.tag(Level::Trace), "[TRACE]");
    }

    #[test]
    fn default_colors_are_bright_ansi_codes() {
        let style = Style::new();
        assert_eq!(style.color(Level::Critical), "\x1b[1;35m");
        assert_eq!(style.color(Level::Error), "\x1b[1;31m");
        assert_eq!(style.color(Level::Warn), "\x1b[1;33m");
        assert_eq!(style.color(Level::Info), "\x1b[1;32m");
        assert_eq!(style.color(Level::Debug), "\x1b[1;36m");
        assert_eq!(style.color(Level::Trace), "\x1b[0;37m");
        assert_eq!(style.reset, "\x1b[0m");
    }

    #[test]
    fn off_has_no_tag_or_color() {
        let style = Style::new();
        assert_eq!(style.tag(Level::Off), "");
        assert_eq!(style.color(Level::Off), "");
    }

    #[test]
    fn file_line_pieces_render_the_default_bracket_format() {
        let style = Style::new();
        let fragment = format!(
            "{}{}{}{}{}",
            style.file_line_open, "main.c", style.file_line_sep, 42, style.file_line_close
        );
        assert_eq!(fragment, "[main.c: 42]");
    }

    #[test]
    fn custom_tables_keep_their_overrides() {
        let style = Style {
            info_tag: "<info>",
            info_color: "",
            ..Style::new()
        };
        assert_eq!(style.tag(Level::Info), "<info>");
        assert_eq!(style.color(Level::Info), "");
        // Untouched fields keep their defaults.
        assert_eq!(style.tag(Level::Warn), "[WARN]");
    }
}
