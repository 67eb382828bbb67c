use chrono::{DateTime, Local};
use daftar_core::Clock;

/// Wall-clock time in the business-local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
