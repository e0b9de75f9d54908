//! E2E tests for carrying loggers through ambient contexts.

use fieldlog::{
    ContextRef, ContextStore, Field, Logger, RequestStore, SimpleLogger, attach_logger, background,
    retrieve_logger, with_value,
};
use fieldlog_testkit::MemorySink;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

static GLOBAL: Mutex<()> = Mutex::new(());

fn serialize() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn handle_request(ctx: &ContextRef, path: &str) {
    let logger = retrieve_logger(ctx);
    logger.infof(format_args!("GET {path}"));
}

#[test]
fn request_scoped_logger_reaches_nested_calls() {
    let sink = MemorySink::shared();
    let base = SimpleLogger::new(sink.clone()).with_name("http");

    let ctx = attach_logger(
        &background(),
        Some(base.with(vec![Field::new("request_id", "r-1")])),
    );
    handle_request(&ctx, "/health");

    assert_eq!(
        sink.messages(),
        vec!["[http][I] GET /health # {\"request_id\":\"r-1\"}"]
    );
}

#[test]
fn store_keeps_identity_across_attach_calls() {
    let sink = MemorySink::shared();
    let store = RequestStore::new().into_context();

    let first = attach_logger(&store, Some(SimpleLogger::new(sink.clone()).with_name("a")));
    let second = attach_logger(&first, Some(SimpleLogger::new(sink.clone()).with_name("b")));
    handle_request(&second, "/items");

    assert!(Arc::ptr_eq(&first, &store));
    assert!(Arc::ptr_eq(&second, &store));
    assert_eq!(sink.messages(), vec!["[b][I] GET /items"]);
}

#[test]
fn layered_contexts_keep_unrelated_values() {
    let user_key = fieldlog::ContextKey::new("app.user");
    let with_user = with_value(&background(), user_key, Arc::new(String::from("ada")));
    let sink = MemorySink::shared();

    let ctx = attach_logger(&with_user, Some(Arc::new(SimpleLogger::new(sink.clone()))));

    let user = ctx
        .value(user_key)
        .and_then(|value| value.downcast_ref::<String>().cloned());
    assert_eq!(user.as_deref(), Some("ada"));
    handle_request(&ctx, "/me");
    assert_eq!(sink.messages(), vec!["[I] GET /me"]);
}

#[test]
fn store_shared_between_threads_sees_attached_logger() {
    let sink = MemorySink::shared();
    let store = RequestStore::new().into_context();
    attach_logger(&store, Some(SimpleLogger::new(sink.clone()).with_name("worker")));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let ctx = Arc::clone(&store);
            thread::spawn(move || handle_request(&ctx, &format!("/job/{index}")))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().is_ok());
    }

    let mut messages = sink.messages();
    messages.sort();
    assert_eq!(
        messages,
        vec![
            "[worker][I] GET /job/0",
            "[worker][I] GET /job/1",
            "[worker][I] GET /job/2",
            "[worker][I] GET /job/3",
        ]
    );
}

#[test]
fn missing_logger_falls_back_to_the_installed_default() {
    let _guard = serialize();
    let sink = MemorySink::shared();
    fieldlog::use_logger(Arc::new(SimpleLogger::new(sink.clone()).child_with_name("default")));

    handle_request(&background(), "/fallback");

    let store = RequestStore::new();
    store.set(fieldlog::LOGGER_KEY.as_str(), Arc::new("wrong type"));
    handle_request(&store.into_context(), "/mistyped");

    assert_eq!(
        sink.messages(),
        vec!["[default][I] GET /fallback", "[default][I] GET /mistyped"]
    );
}

#[test]
fn attaching_none_uses_the_installed_default() {
    let _guard = serialize();
    let sink = MemorySink::shared();
    fieldlog::use_logger(Arc::new(SimpleLogger::new(sink.clone()).child_with_name("dflt")));

    let ctx = attach_logger(&background(), None);
    fieldlog::use_logger(Arc::new(SimpleLogger::new(MemorySink::shared())));
    handle_request(&ctx, "/pinned");

    assert_eq!(sink.messages(), vec!["[dflt][I] GET /pinned"]);
}
