//! Tests for the Cascade tracing setup.

use std::sync::Mutex;

use cascade_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_cascade_log_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("CASCADE_LOG", "cascade_engine::selection=debug,cascade_engine=warn");
    init_tracing();
    std::env::remove_var("CASCADE_LOG");
    tracing::debug!(round = 1, "after init");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}
