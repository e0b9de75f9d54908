//! E2E tests for emitting through the process-wide default logger.
//!
//! Every test installs its own logger, so they are serialized on one lock.

use fieldlog::{
    Field, Level, Logger, SimpleLogger, TracingLogger, background, logger_from_config_with_sink,
    retrieve_logger,
};
use fieldlog_config::parse_logger_config_toml;
use fieldlog_testkit::{FailingSink, MemorySink, NoopLogger};
use std::error::Error;
use std::io::{self, Write};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

static GLOBAL: Mutex<()> = Mutex::new(());

fn serialize() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn install_memory(name: Option<&str>) -> Arc<MemorySink> {
    let sink = MemorySink::shared();
    let mut builder = SimpleLogger::builder(sink.clone());
    if let Some(name) = name {
        builder = builder.name(name);
    }
    fieldlog::use_logger(Arc::new(builder.build()));
    sink
}

#[test]
fn free_functions_write_with_the_callers_location() {
    let _guard = serialize();
    let sink = install_memory(Some("svc"));

    let line = line!() + 1;
    fieldlog::info("ready");

    let last = sink.last().unwrap_or_default();
    assert!(last.contains(&format!("logging_flow.rs:{line}: ")), "{last}");
    assert_eq!(sink.messages(), vec!["[svc][I] ready"]);
}

#[test]
fn every_level_has_its_tag() {
    let _guard = serialize();
    let sink = install_memory(None);

    fieldlog::debug("d");
    fieldlog::info("i");
    fieldlog::warn("w");
    fieldlog::error("e");
    fieldlog::debugf(format_args!("{}", 1));
    fieldlog::infof(format_args!("{}", 2));
    fieldlog::warnf(format_args!("{}", 3));
    fieldlog::errorf(format_args!("{}", 4));

    assert_eq!(
        sink.messages(),
        vec!["[D] d", "[I] i", "[W] w", "[E] e", "[D] 1", "[I] 2", "[W] 3", "[E] 4"]
    );
}

#[test]
fn macros_format_their_arguments() {
    let _guard = serialize();
    let sink = install_memory(Some("m"));

    let jobs = 3;
    fieldlog::debugf!("queue {jobs}");
    fieldlog::infof!("{} workers", 4);
    fieldlog::warnf!("{:.2}s", 1.5);
    fieldlog::errorf!("code {:03}", 7);

    assert_eq!(
        sink.messages(),
        vec!["[m][D] queue 3", "[m][I] 4 workers", "[m][W] 1.50s", "[m][E] code 007"]
    );
}

#[test]
fn printf_is_info_regardless_of_stored_level() {
    let _guard = serialize();
    let sink = MemorySink::shared();
    let logger = SimpleLogger::builder(sink.clone())
        .level(Level::Error)
        .build();
    fieldlog::use_logger(Arc::new(logger));

    fieldlog::printf!("{}", "global");
    fieldlog::current().printf(format_args!("{}", "instance"));

    assert_eq!(sink.messages(), vec!["[I] global", "[E] instance"]);
}

#[test]
fn use_logger_and_current_round_trip_depth() {
    let _guard = serialize();
    let logger: Arc<dyn Logger> = Arc::new(NoopLogger::default());
    fieldlog::use_logger(Arc::clone(&logger));

    assert_eq!(fieldlog::current().depth(), logger.depth());
    assert_eq!(retrieve_logger(&background()).depth(), logger.depth() + 1);
    assert_eq!(fieldlog::with_name("n").depth(), logger.depth());
}

#[test]
fn free_derivations_extend_the_installed_logger() {
    let _guard = serialize();
    let sink = install_memory(Some("root"));

    fieldlog::with(vec![Field::new("a", 1), Field::new("b", 2)]).info("fields");
    fieldlog::with_name("other").warn("renamed");
    fieldlog::info("plain");

    assert_eq!(
        sink.messages(),
        vec![
            "[root][I] fields # {\"a\":1,\"b\":2}",
            "[other][W] renamed",
            "[root][I] plain",
        ]
    );
}

#[test]
fn panic_writes_the_line_then_unwinds_with_the_message() {
    let _guard = serialize();
    let sink = install_memory(None);

    let result = catch_unwind(AssertUnwindSafe(|| {
        fieldlog::panicf!("bad {}", "state");
    }));

    let payload = result.err();
    let message = payload
        .as_ref()
        .and_then(|payload| payload.downcast_ref::<String>())
        .cloned();
    assert_eq!(message.as_deref(), Some("bad state"));
    assert_eq!(sink.messages(), vec!["[P] bad state"]);
    assert_eq!(sink.flush_count(), 1);

    let result = catch_unwind(AssertUnwindSafe(|| {
        fieldlog::panic("plain");
    }));
    assert!(result.is_err());
    assert_eq!(sink.flush_count(), 2);
}

#[test]
fn failing_sink_is_tried_on_every_call() {
    let _guard = serialize();
    let sink = Arc::new(FailingSink::default());
    fieldlog::use_logger(Arc::new(SimpleLogger::new(sink.clone())));

    fieldlog::info("one");
    fieldlog::error("two");
    fieldlog::infof!("three");

    assert_eq!(sink.attempts(), 3);
}

#[test]
fn concurrent_emission_keeps_lines_whole() {
    let _guard = serialize();
    let sink = install_memory(Some("par"));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                let logger = fieldlog::with(vec![Field::new("worker", worker)]);
                for index in 0..25 {
                    logger.infof(format_args!("item {index}"));
                }
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().is_ok());
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 200);
    assert!(lines.iter().all(|line| line.ends_with("}\n")));
    assert!(lines.iter().all(|line| line.matches('\n').count() == 1));
}

#[test]
fn config_built_logger_can_be_installed() -> Result<(), Box<dyn Error>> {
    let _guard = serialize();
    let config = parse_logger_config_toml(
        r#"
name = "cfg"
level = "warning"
utc = true

[fields]
env = "test"
"#,
    )?;
    let sink = MemorySink::shared();
    fieldlog::use_logger(logger_from_config_with_sink(&config, sink.clone()));

    fieldlog::current().print("from config");

    assert_eq!(
        sink.messages(),
        vec!["[cfg][W] from config # {\"env\":\"test\"}"]
    );
    Ok(())
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn tracing_logger_can_back_the_default() {
    let _guard = serialize();
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    fieldlog::use_logger(Arc::new(TracingLogger::named("bridge")));
    tracing::subscriber::with_default(subscriber, || {
        fieldlog::errorf!("lost {} packets", 2);
        fieldlog::with(vec![Field::new("peer", "10.0.0.2")]).info("reconnected");
    });

    let output = String::from_utf8_lossy(&buffer.0.lock().unwrap_or_else(PoisonError::into_inner))
        .into_owned();
    assert!(output.contains("ERROR"), "{output}");
    assert!(output.contains("lost 2 packets"), "{output}");
    assert!(output.contains("INFO"), "{output}");
    assert!(output.contains(r#"{"peer":"10.0.0.2"}"#), "{output}");
    assert!(output.contains("logging_flow.rs:"), "{output}");
}
