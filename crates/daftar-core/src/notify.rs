use thiserror::Error;

use daftar_domain::{NotificationKind, OwnerId};

/// Failure to hand a notification to the transport.
///
/// Purely observational: a failed delivery never alters ledger state and is
/// terminal for that tick only.
#[derive(Debug, Error)]
#[error("notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Delivers reminder notifications to an owner.
pub trait Notifier: Send + Sync {
    fn deliver(&self, owner: &OwnerId, notification: &NotificationKind)
        -> Result<(), NotifyError>;
}
