use chrono::{DateTime, Local, NaiveDate};

/// Clock abstracts access to the current instant so services remain
/// deterministic in tests.
///
/// Dates are taken in the business-local time zone, not UTC: period
/// boundaries and "has the period ended" follow the owner's business day.
pub trait Clock: Send + Sync {
    /// Returns the current instant in the local time zone.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current business-day date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
