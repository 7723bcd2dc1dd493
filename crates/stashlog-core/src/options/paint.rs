//! Paint functions: per-severity colorizing writers

use colored::Color;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::domain::Severity;

/// Escape sequence that clears the current color.
pub const RESET: &str = "\x1b[0m";

/// Writes a colorized rendering of a formatted line to a stream.
///
/// Paint functions render into a per-line buffer before the logger takes its
/// sink lock, so they may themselves log through the same logger; such a
/// nested line is written ahead of the line being painted.
pub type PaintFn = Arc<dyn Fn(&mut dyn Write, fmt::Arguments<'_>) -> io::Result<()> + Send + Sync>;

/// Severity to paint function mapping.
pub type PaintMap = HashMap<Severity, PaintFn>;

/// Build a paint function that prefixes the line with an SGR color sequence.
///
/// The sequence is written unconditionally: colorizing was already opted
/// into through the logger options, so terminal detection does not apply.
/// The logger emits [`RESET`] after every painted line.
pub fn styled(fg: Color, bg: Option<Color>) -> PaintFn {
    let sgr = match bg {
        Some(bg) => format!("\x1b[{};{}m", fg.to_fg_str(), bg.to_bg_str()),
        None => format!("\x1b[{}m", fg.to_fg_str()),
    };
    Arc::new(move |w: &mut dyn Write, args: fmt::Arguments<'_>| {
        w.write_all(sgr.as_bytes())?;
        w.write_fmt(args)
    })
}

/// Paint function that writes the line unchanged.
pub fn plain() -> PaintFn {
    Arc::new(|w: &mut dyn Write, args: fmt::Arguments<'_>| w.write_fmt(args))
}

/// Built-in styles: FATAL black on red, ERROR red, WARN yellow, DEBUG cyan,
/// INFO white.
pub fn default_paint_functions() -> PaintMap {
    Severity::ALL
        .into_iter()
        .map(|severity| {
            let paint = match severity {
                Severity::Fatal => styled(Color::Black, Some(Color::Red)),
                Severity::Error => styled(Color::Red, None),
                Severity::Warn => styled(Color::Yellow, None),
                Severity::Debug => styled(Color::Cyan, None),
                Severity::Info => styled(Color::White, None),
            };
            (severity, paint)
        })
        .collect()
}
