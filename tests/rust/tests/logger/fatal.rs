//! FATAL: write one line, then terminate with status 1

use std::process::Command;

use pretty_assertions::assert_eq;
use stashlog_core::{LevelFilter, LogOption, Logger, Severity, Sink, FATAL_EXIT_CODE};
use tests::fixtures::TestLogger;

/// Set in the child process spawned by `test_fatal_exits_process_with_status_1`.
const CHILD_ENV: &str = "STASHLOG_FATAL_CHILD";

#[test]
fn test_fatal_writes_line_then_terminates() {
    let harness = TestLogger::new(vec![]);

    harness.logger.fatalf(format_args!("cannot bind port {}", 8080));

    assert_eq!(harness.output.lines(), ["[TS][FATAL] cannot bind port 8080"]);
    assert_eq!(harness.terminator.codes(), [FATAL_EXIT_CODE]);
    assert_eq!(
        harness.reporter.reports(),
        [(Severity::Fatal, "[TS][FATAL] cannot bind port 8080".to_string())]
    );
}

#[test]
fn test_fatal_passes_every_severity_threshold() {
    for threshold in Severity::ALL {
        let harness = TestLogger::new(vec![LogOption::level(threshold)]);

        harness.logger.fatal("down");

        assert_eq!(harness.output.lines().len(), 1, "threshold {threshold}");
        assert_eq!(harness.terminator.codes(), [1]);
    }
}

#[test]
fn test_filtered_fatal_does_not_terminate() {
    let harness = TestLogger::new(vec![LogOption::level(LevelFilter::Off)]);

    harness.logger.fatal("filtered");

    assert!(harness.output.is_empty());
    assert!(harness.terminator.codes().is_empty());
}

/// Runs only inside the child process: logs FATAL with the default
/// terminator, which must exit before the panic below is reached.
#[test]
fn fatal_child_process() {
    if std::env::var_os(CHILD_ENV).is_none() {
        return;
    }

    let logger = Logger::new([LogOption::output(Sink::stdout())]);
    logger.fatalf(format_args!("disk {} gone", "/dev/sda"));

    panic!("fatal returned");
}

#[test]
fn test_fatal_exits_process_with_status_1() {
    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["--exact", "fatal::fatal_child_process", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("spawn child test process");

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let fatal_lines: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains("][FATAL] "))
        .collect();
    assert_eq!(fatal_lines.len(), 1, "stdout: {stdout}");
    assert!(fatal_lines[0].ends_with("[FATAL] disk /dev/sda gone"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("fatal returned"));
}
