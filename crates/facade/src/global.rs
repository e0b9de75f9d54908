//! Process-wide default logger and the free functions that forward to it.
//!
//! The slot is an [`ArcSwap`], so installing a logger while other threads
//! emit is race-free; each call works on the snapshot it loaded.
//!
//! The stored logger always carries one extra level of depth (the free
//! function frame). [`use_logger`] adds it and [`current`] removes it.
//! Call sites themselves come from `#[track_caller]` on every free function.

use arc_swap::ArcSwap;
use fieldlog_adapters::{SimpleLogger, StdoutLogSink};
use fieldlog_ports::{Field, Logger};
use std::fmt;
use std::sync::{Arc, LazyLock};

static DEFAULT_LOGGER: LazyLock<ArcSwap<Arc<dyn Logger>>> =
    LazyLock::new(|| ArcSwap::from_pointee(initial_logger()));

fn initial_logger() -> Arc<dyn Logger> {
    Arc::new(
        SimpleLogger::builder(Arc::new(StdoutLogSink))
            .depth(1)
            .build(),
    )
}

/// The logger as stored in the slot, without the depth adjustment.
pub(crate) fn installed() -> Arc<dyn Logger> {
    let guard = DEFAULT_LOGGER.load();
    Arc::clone(&**guard)
}

/// Install `logger` as the process-wide default.
pub fn use_logger(logger: Arc<dyn Logger>) {
    DEFAULT_LOGGER.store(Arc::new(logger.add_depth(1)));
}

/// The process-wide default, with the depth it had before [`use_logger`].
pub fn current() -> Arc<dyn Logger> {
    installed().add_depth(-1)
}

/// Log a message at debug level on the default logger.
#[track_caller]
pub fn debug(message: &str) {
    DEFAULT_LOGGER.load().debug(message);
}

/// Log a message at info level on the default logger.
#[track_caller]
pub fn info(message: &str) {
    DEFAULT_LOGGER.load().info(message);
}

/// Log a message at warning level on the default logger.
#[track_caller]
pub fn warn(message: &str) {
    DEFAULT_LOGGER.load().warn(message);
}

/// Log a message at error level on the default logger.
#[track_caller]
pub fn error(message: &str) {
    DEFAULT_LOGGER.load().error(message);
}

/// Log at fatal level on the default logger, flush, and exit the process.
#[track_caller]
pub fn fatal(message: &str) -> ! {
    installed().fatal(message)
}

/// Log with the panic tag on the default logger, flush, and unwind.
#[track_caller]
pub fn panic(message: &str) -> ! {
    installed().panic(message)
}

/// Formatted variant of [`debug`].
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().debugf(args);
}

/// Formatted variant of [`info`].
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().infof(args);
}

/// Formatted variant of [`warn`].
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().warnf(args);
}

/// Formatted variant of [`error`].
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().errorf(args);
}

/// Formatted variant of [`fatal`].
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    installed().fatalf(args)
}

/// Formatted variant of [`panic`].
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    installed().panicf(args)
}

/// Log formatted arguments at info level on the default logger.
///
/// Unlike [`Logger::printf`], this ignores the stored level.
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().infof(args);
}

/// Derive a logger from [`current`] with `fields` appended.
pub fn with(fields: Vec<Field>) -> Arc<dyn Logger> {
    current().with(fields)
}

/// Derive a logger from [`current`] with the name replaced.
pub fn with_name(name: &str) -> Arc<dyn Logger> {
    current().with_name(name)
}
