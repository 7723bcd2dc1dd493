//! Colorized output

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use stashlog_core::options::RESET;
use stashlog_core::{LogOption, PaintFn, PaintMap, Severity};
use tests::fixtures::TestLogger;

fn tagging_paint(tag: &'static str) -> PaintFn {
    Arc::new(move |w: &mut dyn Write, args: fmt::Arguments<'_>| {
        write!(w, "{{{tag}}}")?;
        w.write_fmt(args)
    })
}

#[test]
fn test_disabled_output_has_no_escapes() {
    let harness = TestLogger::new(vec![LogOption::level(Severity::Info)]);

    harness.logger.error("e");
    harness.logger.warn("w");
    harness.logger.debug("d");
    harness.logger.info("i");

    assert!(!harness.output.contents().contains('\x1b'));
}

#[test]
fn test_enabled_output_paints_then_resets() {
    let mut paints = PaintMap::new();
    paints.insert(Severity::Warn, tagging_paint("warn"));
    let harness = TestLogger::new(vec![
        LogOption::colorize(true),
        LogOption::paint_functions(Some(paints)),
    ]);

    harness.logger.warnf(format_args!("disk at {}%", 91));

    assert_eq!(
        harness.output.contents(),
        format!("{{warn}}[TS][WARN] disk at 91%{RESET}\n")
    );
}

#[test]
fn test_partial_override_keeps_default_paints() {
    let mut paints = PaintMap::new();
    paints.insert(Severity::Warn, tagging_paint("warn"));
    let harness = TestLogger::new(vec![
        LogOption::colorize(true),
        LogOption::paint_functions(Some(paints)),
    ]);

    harness.logger.error("boom");

    assert_eq!(
        harness.output.contents(),
        format!("\x1b[31m[TS][ERROR] boom{RESET}\n")
    );
}

#[test]
fn test_paint_override_without_colorize_is_ignored() {
    let mut paints = PaintMap::new();
    paints.insert(Severity::Warn, tagging_paint("warn"));
    let harness = TestLogger::new(vec![LogOption::paint_functions(Some(paints))]);

    harness.logger.warn("plain");

    assert_eq!(harness.output.contents(), "[TS][WARN] plain\n");
}

#[test]
fn test_concurrent_colorized_lines_do_not_interleave() {
    let harness = Arc::new(TestLogger::new(vec![
        LogOption::colorize(true),
        LogOption::level(Severity::Info),
    ]));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let harness = harness.clone();
            std::thread::spawn(move || {
                for i in 0..50 {
                    harness.logger.infof(format_args!("thread {t} line {i}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = harness.output.lines();
    assert_eq!(lines.len(), 400);
    for line in lines {
        assert!(line.starts_with("\x1b[37m[TS][INFO] thread "), "{line:?}");
        assert!(line.ends_with(RESET), "{line:?}");
    }
}
