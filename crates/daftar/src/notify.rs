//! Terminal delivery of reminder notifications.

use daftar_core::{Notifier, NotifyError};
use daftar_domain::{NotificationKind, OwnerId};

/// User-facing text for each notification kind.
pub fn notification_text(notification: &NotificationKind) -> String {
    match notification {
        NotificationKind::PromptToStartPeriod => {
            "Reminder: no 15-day period is open.\n\
             Run `start` and enter the opening stock cost."
                .into()
        }
        NotificationKind::PeriodEndedPromptToClose {
            start_date,
            end_date,
        } => format!(
            "The 15-day period has ended!\n\
             Period: {start_date} -> {end_date}\n\
             Close it with the remaining stock's closing cost;\n\
             profit/loss is then computed automatically."
        ),
        NotificationKind::DailyEntryReminder => {
            "Reminder: did you record today's sales, expenses and purchases?".into()
        }
    }
}

/// Prints notifications to the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn deliver(
        &self,
        _owner: &OwnerId,
        notification: &NotificationKind,
    ) -> Result<(), NotifyError> {
        println!("{}", notification_text(notification));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn period_ended_text_carries_the_date_range() {
        let text = notification_text(&NotificationKind::PeriodEndedPromptToClose {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        });
        assert!(text.contains("2024-01-01 -> 2024-01-15"));
    }
}
