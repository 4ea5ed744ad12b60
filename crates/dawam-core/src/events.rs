use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reminder::Permission;

/// Every reminder state change produces an Event.
/// Frontends poll for events; the CLI prints them as they drain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A single-shot timer was armed for a future reminder.
    ReminderArmed {
        note_id: Uuid,
        fire_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    /// The notification was shown (either on timer expiry or immediately
    /// for past-due reminders).
    ReminderFired {
        note_id: Uuid,
        title: String,
        at: DateTime<Utc>,
    },
    /// A pending timer was invalidated before firing.
    ReminderCancelled {
        note_id: Uuid,
        at: DateTime<Utc>,
    },
    /// Scheduling did not arm a timer because notification permission was
    /// not granted.
    ReminderNotArmed {
        note_id: Uuid,
        permission: Permission,
        at: DateTime<Utc>,
    },
}
