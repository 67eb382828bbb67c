//! Transaction rows recorded against a period, and their aggregate totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::owner::OwnerId;

/// Per-day sales row. One row exists per (owner, period, date); re-entering
/// the same date replaces the previous amounts rather than adding to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySale {
    pub owner: OwnerId,
    pub period_id: u64,
    pub date: NaiveDate,
    pub cash_amount: i64,
    pub card_amount: i64,
}

impl DailySale {
    pub fn total(&self) -> i64 {
        self.cash_amount + self.card_amount
    }
}

/// Append-only inventory acquisition event. Multiple purchases on the same
/// date are independent rows and are all retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub owner: OwnerId,
    pub period_id: u64,
    pub date: NaiveDate,
    pub total_cost: i64,
    pub note: String,
}

impl Purchase {
    pub fn new(
        owner: OwnerId,
        period_id: u64,
        date: NaiveDate,
        total_cost: i64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            period_id,
            date,
            total_cost,
            note: note.into(),
        }
    }
}

/// Append-only operating cost event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub owner: OwnerId,
    pub period_id: u64,
    pub date: NaiveDate,
    pub amount: i64,
    pub note: String,
}

impl Expense {
    pub fn new(
        owner: OwnerId,
        period_id: u64,
        date: NaiveDate,
        amount: i64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            period_id,
            date,
            amount,
            note: note.into(),
        }
    }
}

/// Aggregated sums over all rows belonging to one period. Derived at read
/// time, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub cash: i64,
    pub card: i64,
    pub purchases: i64,
    pub expenses: i64,
}

impl PeriodTotals {
    pub fn sales(&self) -> i64 {
        self.cash + self.card
    }
}
