//! E2E tests for fatal termination.
//!
//! The fatal path exits the process, so the test re-runs this binary with a
//! marker env var and inspects the child's status and output.

use fieldlog::{FATAL_EXIT_CODE, Logger, SimpleLogger, StdoutLogSink};
use std::io;
use std::process::{Command, Output};
use std::sync::Arc;

const CHILD_ENV: &str = "FIELDLOG_E2E_FATAL_CHILD";

fn run_child(test_name: &str, mode: &str) -> io::Result<Output> {
    Command::new(std::env::current_exe()?)
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, mode)
        .output()
}

#[test]
fn fatal_child() {
    let Some(mode) = std::env::var_os(CHILD_ENV) else {
        return;
    };

    let logger = SimpleLogger::builder(Arc::new(StdoutLogSink))
        .name("child")
        .field("pid", std::process::id())
        .build();
    if mode == "instance" {
        logger.fatalf(format_args!("disk {} unavailable", "sda"));
    }
    fieldlog::use_logger(Arc::new(logger));
    fieldlog::fatalf!("shutting down after {} errors", 3);
}

#[test]
fn global_fatal_logs_and_exits_with_status_one() -> io::Result<()> {
    let output = run_child("fatal_child", "global")?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE), "{stdout}");
    assert!(stdout.contains("[child][F] shutting down after 3 errors # {\"pid\":"));
    assert!(stdout.contains("fatal_exit.rs:"));
    Ok(())
}

#[test]
fn instance_fatal_logs_and_exits_with_status_one() -> io::Result<()> {
    let output = run_child("fatal_child", "instance")?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE), "{stdout}");
    assert!(stdout.contains("[child][F] disk sda unavailable"));
    assert!(!stdout.contains("shutting down"));
    Ok(())
}
