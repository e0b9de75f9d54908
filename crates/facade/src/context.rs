//! Attach loggers to, and retrieve them from, ambient contexts.
//!
//! Typed stores ([`ContextStore`]) are updated in place; any other context is
//! wrapped in a new layer. Retrieval never fails: a missing or mistyped value
//! yields the process-wide default.

use crate::global::installed;
use fieldlog_ports::Logger;
use fieldlog_shared::{ContextKey, ContextRef, ContextValue, with_value};
use std::sync::Arc;

/// Key under which loggers are stored.
pub const LOGGER_KEY: ContextKey = ContextKey::new("fieldlog.Logger");

/// Attach `logger` (or the default logger when `None`) to `ctx`.
///
/// A typed store is mutated and returned as-is; other contexts get a new
/// layer carrying the logger.
pub fn attach_logger(ctx: &ContextRef, logger: Option<Arc<dyn Logger>>) -> ContextRef {
    let logger = logger.unwrap_or_else(installed);
    let value: ContextValue = Arc::new(logger);

    if let Some(store) = ctx.as_store() {
        store.set(LOGGER_KEY.as_str(), value);
        return Arc::clone(ctx);
    }
    with_value(ctx, LOGGER_KEY, value)
}

/// Retrieve the logger attached to `ctx`, or the default logger.
pub fn retrieve_logger(ctx: &ContextRef) -> Arc<dyn Logger> {
    let value = match ctx.as_store() {
        Some(store) => store.get(LOGGER_KEY.as_str()),
        None => ctx.value(LOGGER_KEY),
    };

    value
        .and_then(|value| value.downcast_ref::<Arc<dyn Logger>>().cloned())
        .unwrap_or_else(installed)
}
