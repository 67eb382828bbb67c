//! Period lifecycle: open, close, roll-forward.

use chrono::NaiveDate;
use tracing::info;

use daftar_domain::{period_end, OwnerId, Period, PeriodStatus};

use crate::{error::ensure_non_negative, storage::LedgerStore, CoreError};

/// Owns period lifecycle transitions.
///
/// The store performs the atomic check-and-insert behind
/// [`open`](PeriodService::open), so the at-most-one-open-period invariant
/// holds even when two requests race.
pub struct PeriodService;

impl PeriodService {
    /// Opens a new period starting at `reference_date` and spanning 15 days.
    pub fn open(
        store: &dyn LedgerStore,
        owner: &OwnerId,
        opening_stock_cost: i64,
        reference_date: NaiveDate,
    ) -> Result<Period, CoreError> {
        ensure_non_negative(opening_stock_cost, "opening stock cost")?;
        store.ensure_owner(owner)?;
        let period = store.create_period(
            owner,
            reference_date,
            period_end(reference_date),
            opening_stock_cost,
        )?;
        info!(owner = %owner, period = period.id, start = %period.start_date, "opened accounting period");
        Ok(period)
    }

    /// Returns the owner's open period, or `None` if there is none.
    pub fn get_open(store: &dyn LedgerStore, owner: &OwnerId) -> Result<Option<Period>, CoreError> {
        store.get_open_period(owner)
    }

    /// Overwrites a period's opening valuation.
    ///
    /// Legal at any time; callers are expected to use it only before entries
    /// exist, since rewriting the opening value later silently changes
    /// historical cost-of-goods-sold.
    pub fn set_opening_stock(
        store: &dyn LedgerStore,
        period_id: u64,
        amount: i64,
    ) -> Result<(), CoreError> {
        ensure_non_negative(amount, "opening stock cost")?;
        store.set_opening_stock(period_id, amount)
    }

    /// Closes the period with the supplied closing valuation.
    ///
    /// A second close on the same period is rejected with `Conflict`; a
    /// closed period's financials never change.
    pub fn close(
        store: &dyn LedgerStore,
        period_id: u64,
        closing_stock_cost: i64,
    ) -> Result<Period, CoreError> {
        ensure_non_negative(closing_stock_cost, "closing stock cost")?;
        let period = store.close_period(period_id, closing_stock_cost)?;
        info!(owner = %period.owner, period = period.id, "closed accounting period");
        Ok(period)
    }

    /// Opens the follow-up period, carrying the closed period's closing
    /// valuation forward as the new opening valuation.
    pub fn roll_forward(store: &dyn LedgerStore, closed: &Period) -> Result<Period, CoreError> {
        let closing = match (closed.status, closed.closing_stock_cost) {
            (PeriodStatus::Closed, Some(value)) => value,
            _ => {
                return Err(CoreError::Conflict(format!(
                    "period {} is not closed yet",
                    closed.id
                )))
            }
        };
        let start = closed.next_start();
        store.create_period(&closed.owner, start, period_end(start), closing)
    }

    /// Closes the owner's open period and rolls into the next one.
    ///
    /// The two store calls run back-to-back with no other mutation between
    /// them. If the process dies after the close, the owner is left without
    /// an open period; the next [`get_open`](PeriodService::get_open) read
    /// reports that state so a period can be created manually.
    pub fn close_and_roll(
        store: &dyn LedgerStore,
        owner: &OwnerId,
        closing_stock_cost: i64,
    ) -> Result<(Period, Period), CoreError> {
        let open = store.get_open_period(owner)?.ok_or(CoreError::NoOpenPeriod)?;
        let closed = Self::close(store, open.id, closing_stock_cost)?;
        let next = Self::roll_forward(store, &closed)?;
        Ok((closed, next))
    }
}
