//! daftar-domain
//!
//! Pure domain models for the Daftar inventory-period ledger (periods, daily
//! sales, purchases, expenses, reports, reminders).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod entry;
pub mod owner;
pub mod period;
pub mod reminder;
pub mod report;

pub use entry::*;
pub use owner::*;
pub use period::*;
pub use reminder::*;
pub use report::*;
