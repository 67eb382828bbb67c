//! Validated sale, purchase, and expense entry against the open period.

use chrono::NaiveDate;

use daftar_domain::{Expense, OwnerId, Period, Purchase};

use crate::{error::ensure_non_negative, storage::LedgerStore, CoreError};

/// Records transaction rows. Sole writer of sales, purchases, and expenses;
/// every write requires an open period.
pub struct EntryService;

impl EntryService {
    /// Upserts the sales row for `date`: re-entering the same date replaces
    /// the previous amounts, supporting same-day correction without
    /// double-counting.
    pub fn record_sale(
        store: &dyn LedgerStore,
        owner: &OwnerId,
        date: NaiveDate,
        cash: i64,
        card: i64,
    ) -> Result<(), CoreError> {
        ensure_non_negative(cash, "cash amount")?;
        ensure_non_negative(card, "card amount")?;
        let period = Self::require_open(store, owner)?;
        store.upsert_daily_sale(owner, period.id, date, cash, card)
    }

    /// Appends an inventory purchase. Multiple purchases per day are
    /// independent events and are all retained.
    pub fn record_purchase(
        store: &dyn LedgerStore,
        owner: &OwnerId,
        date: NaiveDate,
        total_cost: i64,
        note: &str,
    ) -> Result<Purchase, CoreError> {
        ensure_non_negative(total_cost, "purchase cost")?;
        let period = Self::require_open(store, owner)?;
        let purchase = Purchase::new(owner.clone(), period.id, date, total_cost, note);
        store.append_purchase(&purchase)?;
        Ok(purchase)
    }

    /// Appends an operating expense.
    pub fn record_expense(
        store: &dyn LedgerStore,
        owner: &OwnerId,
        date: NaiveDate,
        amount: i64,
        note: &str,
    ) -> Result<Expense, CoreError> {
        ensure_non_negative(amount, "expense amount")?;
        let period = Self::require_open(store, owner)?;
        let expense = Expense::new(owner.clone(), period.id, date, amount, note);
        store.append_expense(&expense)?;
        Ok(expense)
    }

    fn require_open(store: &dyn LedgerStore, owner: &OwnerId) -> Result<Period, CoreError> {
        store.get_open_period(owner)?.ok_or(CoreError::NoOpenPeriod)
    }
}
