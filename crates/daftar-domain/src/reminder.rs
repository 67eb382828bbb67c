//! Reminder preferences and the notifications the daily policy can emit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REMINDER_HOUR: u32 = 21;
pub const DEFAULT_REMINDER_MINUTE: u32 = 0;

/// Per-owner daily reminder preference. Created lazily with defaults on
/// first read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSetting {
    pub hour: u32,
    pub minute: u32,
    pub enabled: bool,
}

impl Default for ReminderSetting {
    fn default() -> Self {
        Self {
            hour: DEFAULT_REMINDER_HOUR,
            minute: DEFAULT_REMINDER_MINUTE,
            enabled: true,
        }
    }
}

/// Notification selected by the daily reminder policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// No period is open; the owner should start one.
    PromptToStartPeriod,
    /// The open period has run its course and awaits a closing valuation.
    PeriodEndedPromptToClose {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// Routine nudge to record today's activity.
    DailyEntryReminder,
}
