use chrono::NaiveDate;

use daftar_domain::{Expense, OwnerId, Period, PeriodTotals, Purchase, ReminderSetting};

use crate::CoreError;

/// Abstraction over persistence backends holding periods, transaction rows,
/// and reminder settings.
///
/// Every call is atomic at single-call granularity. In particular
/// [`create_period`](LedgerStore::create_period) performs the
/// check-and-insert for the at-most-one-open-period-per-owner constraint
/// inside the backend, so two concurrent opens cannot both succeed.
pub trait LedgerStore: Send + Sync {
    /// Registers the owner if unknown. Idempotent.
    fn ensure_owner(&self, owner: &OwnerId) -> Result<(), CoreError>;

    /// Returns the owner's open period, if any. Should the backend ever hold
    /// more than one open row for the same owner, the one with the highest
    /// id wins.
    fn get_open_period(&self, owner: &OwnerId) -> Result<Option<Period>, CoreError>;

    fn get_period(&self, period_id: u64) -> Result<Option<Period>, CoreError>;

    /// Inserts a new open period, assigning a per-owner monotonically
    /// increasing id. Fails with `Conflict` if the owner already has an open
    /// period.
    fn create_period(
        &self,
        owner: &OwnerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        opening_stock_cost: i64,
    ) -> Result<Period, CoreError>;

    /// Overwrites the opening valuation of an existing period.
    fn set_opening_stock(&self, period_id: u64, opening_stock_cost: i64)
        -> Result<(), CoreError>;

    /// Marks the period closed and records its closing valuation. Fails with
    /// `NotFound` for an unknown id and `Conflict` if already closed; a
    /// failed attempt leaves the stored closing value untouched.
    fn close_period(&self, period_id: u64, closing_stock_cost: i64) -> Result<Period, CoreError>;

    /// Inserts or replaces the sales row for (owner, period, date).
    fn upsert_daily_sale(
        &self,
        owner: &OwnerId,
        period_id: u64,
        date: NaiveDate,
        cash_amount: i64,
        card_amount: i64,
    ) -> Result<(), CoreError>;

    fn append_purchase(&self, purchase: &Purchase) -> Result<(), CoreError>;

    fn append_expense(&self, expense: &Expense) -> Result<(), CoreError>;

    /// Sums all committed rows for the period. Reflects every write that
    /// completed before this call.
    fn sum_totals(&self, owner: &OwnerId, period_id: u64) -> Result<PeriodTotals, CoreError>;

    /// Returns the owner's reminder setting, creating it with defaults on
    /// first read.
    fn get_reminder(&self, owner: &OwnerId) -> Result<ReminderSetting, CoreError>;

    fn set_reminder(&self, owner: &OwnerId, setting: &ReminderSetting) -> Result<(), CoreError>;
}
