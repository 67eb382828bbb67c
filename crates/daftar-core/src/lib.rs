//! daftar-core
//!
//! Business logic and services for Daftar.
//! Depends on daftar-domain. No CLI, no terminal I/O, no storage mechanics;
//! persistence, time, and notification delivery enter through the
//! [`LedgerStore`], [`Clock`], and [`Notifier`] seams.

pub mod entry_service;
pub mod error;
pub mod notify;
pub mod period_service;
pub mod public_api;
pub mod reminder_service;
pub mod report_service;
pub mod storage;
pub mod time;

pub use entry_service::EntryService;
pub use error::CoreError;
pub use notify::{Notifier, NotifyError};
pub use period_service::PeriodService;
pub use public_api::*;
pub use reminder_service::ReminderService;
pub use report_service::ReportService;
pub use storage::LedgerStore;
pub use time::Clock;
