//! Accounting period model: a fixed 15-day inventory cycle.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::owner::OwnerId;

/// Number of calendar days covered by one accounting period.
pub const PERIOD_DAYS: i64 = 15;

/// Inclusive end date for a period starting on `start`.
pub fn period_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(PERIOD_DAYS - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Lifecycle state of a period. Transitions `Open` to `Closed` exactly once.
pub enum PeriodStatus {
    Open,
    Closed,
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodStatus::Open => "Open",
            PeriodStatus::Closed => "Closed",
        };
        f.write_str(label)
    }
}

/// One 15-day accounting cycle for one owner.
///
/// `closing_stock_cost` is present if and only if the period is closed. At
/// most one open period exists per owner; the store enforces that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub id: u64,
    pub owner: OwnerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub opening_stock_cost: i64,
    pub closing_stock_cost: Option<i64>,
    pub status: PeriodStatus,
}

impl Period {
    /// Creates an open period covering [`PERIOD_DAYS`] days from `start_date`.
    pub fn open(id: u64, owner: OwnerId, start_date: NaiveDate, opening_stock_cost: i64) -> Self {
        Self {
            id,
            owner,
            start_date,
            end_date: period_end(start_date),
            opening_stock_cost,
            closing_stock_cost: None,
            status: PeriodStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PeriodStatus::Open
    }

    /// Returns true once the period has run its course (`today >= end_date`).
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        today >= self.end_date
    }

    /// Returns true if the given date falls within this period.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// First day of the period that follows this one.
    pub fn next_start(&self) -> NaiveDate {
        self.end_date + Duration::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_spans_fifteen_inclusive_days() {
        let period = Period::open(1, OwnerId::new("shop"), date(2024, 1, 1), 0);
        assert_eq!(period.end_date, date(2024, 1, 15));
        assert!(period.contains_date(date(2024, 1, 1)));
        assert!(period.contains_date(date(2024, 1, 15)));
        assert!(!period.contains_date(date(2024, 1, 16)));
        assert_eq!(period.next_start(), date(2024, 1, 16));
    }

    #[test]
    fn has_ended_on_and_after_end_date() {
        let period = Period::open(1, OwnerId::new("shop"), date(2024, 1, 1), 0);
        assert!(!period.has_ended(date(2024, 1, 14)));
        assert!(period.has_ended(date(2024, 1, 15)));
        assert!(period.has_ended(date(2024, 2, 1)));
    }

    #[test]
    fn period_serde_round_trip() {
        let period = Period::open(7, OwnerId::new("shop"), date(2024, 3, 2), 5_000_000);
        let json = serde_json::to_string(&period).expect("serialize");
        let back: Period = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, period);
        assert!(json.contains("\"open\""));
    }
}
