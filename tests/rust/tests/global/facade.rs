//! Package-level functions and macros forward to the singleton

use super::installed;
use stashlog_core::global;

fn assert_logged(line: &str) {
    let contents = installed().output.contents();
    assert!(
        contents.lines().any(|l| l == line),
        "missing {line:?} in:\n{contents}"
    );
}

#[test]
fn test_functions_forward_each_level() {
    installed();

    global::info("facade info");
    global::infof(format_args!("facade infof {}", 1));
    global::debug("facade debug");
    global::debugf(format_args!("facade debugf {}", 2));
    global::warn("facade warn");
    global::warnf(format_args!("facade warnf {}", 3));
    global::error("facade error");
    global::errorf(format_args!("facade errorf {}", 4));

    assert_logged("[TS][INFO] facade info");
    assert_logged("[TS][INFO] facade infof 1");
    assert_logged("[TS][DEBUG] facade debug");
    assert_logged("[TS][DEBUG] facade debugf 2");
    assert_logged("[TS][WARN] facade warn");
    assert_logged("[TS][WARN] facade warnf 3");
    assert_logged("[TS][ERROR] facade error");
    assert_logged("[TS][ERROR] facade errorf 4");
}

#[test]
fn test_macros_forward() {
    installed();

    stashlog_core::info!("macro info {}", "alice");
    stashlog_core::debug!("macro debug {}", 1);
    stashlog_core::warn!("macro warn {}%", 91);
    stashlog_core::error!("macro error {:?}", "quoted");

    assert_logged("[TS][INFO] macro info alice");
    assert_logged("[TS][DEBUG] macro debug 1");
    assert_logged("[TS][WARN] macro warn 91%");
    assert_logged("[TS][ERROR] macro error \"quoted\"");
}

#[test]
fn test_fatal_forwards_to_terminator() {
    let installed = installed();

    global::fatal("facade fatal");
    stashlog_core::fatal!("macro fatal {}", 2);

    assert_logged("[TS][FATAL] facade fatal");
    assert_logged("[TS][FATAL] macro fatal 2");
    let codes = installed.terminator.codes();
    assert!(codes.len() >= 2 && codes.iter().all(|c| *c == 1));
}

#[test]
fn test_stash_forwards() {
    let installed = installed();

    global::stash("req-facade", "plain");
    global::stashf("req-facade", format_args!("formatted {}", 1));
    stashlog_core::stash!("req-macro", "latency={}ms", 120);

    let sent = installed.sender.sent();
    assert!(sent.contains(&("req-facade".to_string(), "plain".to_string())));
    assert!(sent.contains(&("req-facade".to_string(), "formatted 1".to_string())));
    assert!(sent.contains(&("req-macro".to_string(), "latency=120ms".to_string())));
}
