//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! This module exposes a simplified API that frontends (CLI, chat handlers,
//! HTTP handlers) can rely on without depending on the entire service
//! surface area. Every operation is owner-scoped and takes the store handle
//! explicitly, so callers can run several ledgers in one process and tests
//! can inject doubles.

use chrono::NaiveDate;

use daftar_domain::{Expense, OwnerId, Period, PeriodReport, Purchase, ReminderSetting};

use crate::{
    entry_service::EntryService, period_service::PeriodService,
    reminder_service::ReminderService, report_service::ReportService, storage::LedgerStore,
    CoreError,
};

/// Starts the ledger: opens the first period for `owner` beginning `today`.
/// Fails with `Conflict` if a period is already open.
pub fn api_start_ledger(
    store: &dyn LedgerStore,
    owner: &OwnerId,
    opening_stock_cost: i64,
    today: NaiveDate,
) -> Result<Period, CoreError> {
    PeriodService::open(store, owner, opening_stock_cost, today)
}

/// Returns the owner's open period, or `None` (not an error) if none exists.
pub fn api_current_period(
    store: &dyn LedgerStore,
    owner: &OwnerId,
) -> Result<Option<Period>, CoreError> {
    PeriodService::get_open(store, owner)
}

pub fn api_record_sale(
    store: &dyn LedgerStore,
    owner: &OwnerId,
    date: NaiveDate,
    cash: i64,
    card: i64,
) -> Result<(), CoreError> {
    EntryService::record_sale(store, owner, date, cash, card)
}

pub fn api_record_purchase(
    store: &dyn LedgerStore,
    owner: &OwnerId,
    date: NaiveDate,
    total_cost: i64,
    note: &str,
) -> Result<Purchase, CoreError> {
    EntryService::record_purchase(store, owner, date, total_cost, note)
}

pub fn api_record_expense(
    store: &dyn LedgerStore,
    owner: &OwnerId,
    date: NaiveDate,
    amount: i64,
    note: &str,
) -> Result<Expense, CoreError> {
    EntryService::record_expense(store, owner, date, amount, note)
}

/// Reports on the owner's open period: partial (pending valuation) while it
/// is running. Fails with `NoOpenPeriod` if none exists.
pub fn api_report(store: &dyn LedgerStore, owner: &OwnerId) -> Result<PeriodReport, CoreError> {
    let period = PeriodService::get_open(store, owner)?.ok_or(CoreError::NoOpenPeriod)?;
    let totals = store.sum_totals(owner, period.id)?;
    Ok(ReportService::summarize(&period, &totals))
}

/// Previews the final report for the open period using a hypothetical
/// closing valuation, without closing anything.
pub fn api_preview_report(
    store: &dyn LedgerStore,
    owner: &OwnerId,
    closing_stock_cost: i64,
) -> Result<PeriodReport, CoreError> {
    let period = PeriodService::get_open(store, owner)?.ok_or(CoreError::NoOpenPeriod)?;
    let totals = store.sum_totals(owner, period.id)?;
    ReportService::summarize_with_closing(&period, &totals, closing_stock_cost)
}

/// Closes the open period and opens the next one in the same logical
/// operation. Returns the final report of the closed period together with
/// the freshly opened period.
pub fn api_close_and_roll(
    store: &dyn LedgerStore,
    owner: &OwnerId,
    closing_stock_cost: i64,
) -> Result<(PeriodReport, Period), CoreError> {
    let (closed, next) = PeriodService::close_and_roll(store, owner, closing_stock_cost)?;
    let totals = store.sum_totals(owner, closed.id)?;
    Ok((ReportService::summarize(&closed, &totals), next))
}

pub fn api_get_reminder(
    store: &dyn LedgerStore,
    owner: &OwnerId,
) -> Result<ReminderSetting, CoreError> {
    ReminderService::setting(store, owner)
}

pub fn api_set_reminder(
    store: &dyn LedgerStore,
    owner: &OwnerId,
    hour: u32,
    minute: u32,
    enabled: bool,
) -> Result<ReminderSetting, CoreError> {
    ReminderService::update_setting(store, owner, hour, minute, enabled)
}
