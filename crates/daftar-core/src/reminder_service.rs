//! Daily reminder policy and the per-owner tick runner.

use chrono::{DateTime, Duration, Local, NaiveDate};
use tracing::warn;

use daftar_domain::{NotificationKind, OwnerId, Period, ReminderSetting};

use crate::{notify::Notifier, storage::LedgerStore, time::Clock, CoreError};

/// Decides what notification (if any) an owner receives on a given day.
///
/// The policy itself has no timing logic beyond the `today >= end_date`
/// comparison; an external scheduler invokes [`run_tick`](ReminderService::run_tick)
/// once per owner at the configured hour.
pub struct ReminderService;

impl ReminderService {
    /// Pure decision: disabled wins over everything, then "no open period"
    /// is checked before the date comparison.
    pub fn decide(
        setting: &ReminderSetting,
        open_period: Option<&Period>,
        today: NaiveDate,
    ) -> Option<NotificationKind> {
        if !setting.enabled {
            return None;
        }
        let Some(period) = open_period else {
            return Some(NotificationKind::PromptToStartPeriod);
        };
        if period.has_ended(today) {
            Some(NotificationKind::PeriodEndedPromptToClose {
                start_date: period.start_date,
                end_date: period.end_date,
            })
        } else {
            Some(NotificationKind::DailyEntryReminder)
        }
    }

    /// Runs one reminder tick for `owner` and returns the decision.
    ///
    /// Delivery failures are logged and never surface as ledger errors;
    /// subsequent ticks are unaffected.
    pub fn run_tick(
        store: &dyn LedgerStore,
        clock: &dyn Clock,
        notifier: &dyn Notifier,
        owner: &OwnerId,
    ) -> Result<Option<NotificationKind>, CoreError> {
        let setting = store.get_reminder(owner)?;
        let open = store.get_open_period(owner)?;
        let Some(notification) = Self::decide(&setting, open.as_ref(), clock.today()) else {
            return Ok(None);
        };
        if let Err(err) = notifier.deliver(owner, &notification) {
            warn!(owner = %owner, error = %err, "reminder delivery failed");
        }
        Ok(Some(notification))
    }

    /// Returns the owner's reminder setting, creating defaults on first read.
    pub fn setting(store: &dyn LedgerStore, owner: &OwnerId) -> Result<ReminderSetting, CoreError> {
        store.get_reminder(owner)
    }

    /// Validates and stores a new reminder setting.
    pub fn update_setting(
        store: &dyn LedgerStore,
        owner: &OwnerId,
        hour: u32,
        minute: u32,
        enabled: bool,
    ) -> Result<ReminderSetting, CoreError> {
        if hour >= 24 {
            return Err(CoreError::Validation(format!(
                "reminder hour must be 0-23, got {hour}"
            )));
        }
        if minute >= 60 {
            return Err(CoreError::Validation(format!(
                "reminder minute must be 0-59, got {minute}"
            )));
        }
        let setting = ReminderSetting {
            hour,
            minute,
            enabled,
        };
        store.set_reminder(owner, &setting)?;
        Ok(setting)
    }

    /// Next local instant strictly after `now` matching the configured
    /// hour:minute. Host schedulers use this to plan the next tick.
    pub fn next_fire_after(setting: &ReminderSetting, now: DateTime<Local>) -> DateTime<Local> {
        for offset in 0..3 {
            let date = now.date_naive() + Duration::days(offset);
            if let Some(candidate) = fire_time_on(setting, date) {
                if candidate > now {
                    return candidate;
                }
            }
        }
        // Unreachable for a validated setting; degrade to a daily cadence.
        now + Duration::days(1)
    }
}

fn fire_time_on(setting: &ReminderSetting, date: NaiveDate) -> Option<DateTime<Local>> {
    date.and_hms_opt(setting.hour, setting.minute, 0)?
        .and_local_timezone(Local)
        .earliest()
}
