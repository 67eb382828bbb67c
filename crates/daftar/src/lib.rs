#![doc(test(attr(deny(warnings))))]

//! Daftar keeps a small shop's books in fixed 15-day inventory periods:
//! daily cash/card sales, purchases, and expenses roll up into a
//! cost-of-goods-sold and net profit report when a period closes.
//!
//! This crate wires the core services to a JSON store, the system clock,
//! and a terminal front end.

pub mod app;
pub mod cli;
pub mod errors;
pub mod notify;
pub mod render;
pub mod system_clock;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("daftar=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Daftar tracing initialized.");
    });
}
