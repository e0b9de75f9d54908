//! E2E tests for the process-wide default before anything is installed.
//!
//! Nothing in this binary calls `use_logger`, so every test observes the
//! initial default.

use fieldlog::{Level, background, retrieve_logger};

#[test]
fn initial_default_is_unnamed_info_without_fields() {
    let logger = fieldlog::current();
    assert_eq!(logger.name(), None);
    assert_eq!(logger.level(), Level::Info);
    assert!(logger.fields().is_empty());
}

#[test]
fn current_removes_the_stored_depth() {
    assert_eq!(fieldlog::current().depth(), 0);
    assert_eq!(retrieve_logger(&background()).depth(), 1);
}

#[test]
fn free_derivations_start_from_current() {
    let named = fieldlog::with_name("boot");
    assert_eq!(named.name(), Some("boot"));
    assert_eq!(named.depth(), 0);
    assert_eq!(fieldlog::current().name(), None);
}
