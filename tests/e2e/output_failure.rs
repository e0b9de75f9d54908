//! E2E tests for output failures.
//!
//! Failed writes are reported on stderr and swallowed. The child process logs
//! through a sink that always fails; the parent inspects its stderr and exit
//! status.

use fieldlog::{Field, Logger, SimpleLogger};
use fieldlog_testkit::FailingSink;
use std::io;
use std::process::{Command, Output};
use std::sync::Arc;

const CHILD_ENV: &str = "FIELDLOG_E2E_OUTPUT_FAILURE_CHILD";
const FAILURE_PREFIX: &str = "log output fail: ";

fn run_child(test_name: &str) -> io::Result<Output> {
    Command::new(std::env::current_exe()?)
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
}

#[test]
fn failing_output_child() {
    if std::env::var_os(CHILD_ENV).is_none() {
        return;
    }

    let sink = Arc::new(FailingSink::default());
    let logger = SimpleLogger::builder(sink.clone()).name("child").build();
    logger.info("first");
    logger.with(vec![Field::new("attempt", 2)]).warn("second");

    fieldlog::use_logger(Arc::new(logger));
    fieldlog::errorf!("third {}", 3);

    assert_eq!(sink.attempts(), 3);
}

#[test]
fn write_failures_are_reported_on_stderr_and_swallowed() -> io::Result<()> {
    let output = run_child("failing_output_child")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stdout: {stdout}\nstderr: {stderr}");
    assert_eq!(stderr.matches(FAILURE_PREFIX).count(), 3, "{stderr}");
    assert!(stderr.contains("log output fail: sink closed"), "{stderr}");
    assert!(!stdout.contains("[child]"), "{stdout}");
    Ok(())
}
