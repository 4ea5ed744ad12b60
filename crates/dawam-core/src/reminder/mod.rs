//! One-shot note reminders.
//!
//! The scheduler is permission-gated: arming a timer requires the
//! notification surface to report `granted`. A reminder whose fire time
//! is at or before "now" fires immediately instead of arming a zero-delay
//! timer. Every armed timer carries a cancellation handle kept in a side
//! index keyed by note id, so deleting a note or disabling its reminder
//! invalidates the pending timer.
//!
//! ## State transitions
//!
//! ```text
//! Unarmed -> Armed -> Fired (auto-closed after the display window)
//!                 \-> Cancelled
//! ```
//!
//! Scheduling calls must run inside a Tokio runtime; timers are spawned
//! tasks. The scheduler itself holds no background thread.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::events::Event;
use crate::notes::Note;

/// Outcome of a notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    /// The user dismissed the request without deciding.
    Default,
}

/// Handle to a shown notification. `close` must be idempotent.
pub trait NotificationHandle: Send {
    fn close(&self);
}

/// The notification surface the scheduler drives. Mechanics (OS toasts,
/// terminal output, a test recorder) are up to the implementation.
pub trait NotificationSurface: Send + Sync {
    fn request_permission(&self) -> Permission;
    fn show(&self, title: &str, body: &str) -> Box<dyn NotificationHandle>;
}

/// What a scheduling call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum ReminderOutcome {
    /// The note carries no enabled reminder; nothing to do.
    NoReminder,
    /// Permission was not granted; no timer armed. The reminder will
    /// never fire -- callers should surface this to the user.
    NotArmed { permission: Permission },
    /// The fire time was at or before now; the notification was shown
    /// immediately.
    FiredImmediately,
    /// A single-shot timer is pending.
    Armed,
}

/// Schedules one-time notifications for note reminders.
pub struct ReminderScheduler {
    surface: Arc<dyn NotificationSurface>,
    /// How long a fired notification stays up before auto-close.
    display_window: Duration,
    permission: Mutex<Option<Permission>>,
    pending: Arc<Mutex<HashMap<Uuid, AbortHandle>>>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl ReminderScheduler {
    pub fn new(surface: Arc<dyn NotificationSurface>) -> Self {
        Self {
            surface,
            display_window: Duration::from_secs(10),
            permission: Mutex::new(None),
            pending: Arc::new(Mutex::new(HashMap::new())),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the auto-close window (tests use short windows).
    pub fn with_display_window(mut self, display_window: Duration) -> Self {
        self.display_window = display_window;
        self
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Read the reminder field of `note` and arrange a notification.
    ///
    /// The note itself is never mutated. Re-scheduling a note whose timer
    /// is still pending replaces (aborts) the old timer.
    pub fn schedule(&self, note: &Note) -> ReminderOutcome {
        let Some(fire_at) = note.active_reminder_at() else {
            return ReminderOutcome::NoReminder;
        };

        let permission = self.ensure_permission();
        if permission != Permission::Granted {
            self.push_event(Event::ReminderNotArmed {
                note_id: note.id,
                permission,
                at: Utc::now(),
            });
            return ReminderOutcome::NotArmed { permission };
        }

        let now = Utc::now();
        if fire_at <= now {
            self.fire(note.id, &note.title, &note.content);
            return ReminderOutcome::FiredImmediately;
        }

        let delay = (fire_at - now)
            .to_std()
            .unwrap_or(Duration::ZERO);
        let note_id = note.id;
        let title = note.title.clone();
        let body = note.content.clone();
        let surface = Arc::clone(&self.surface);
        let display_window = self.display_window;
        let pending = Arc::clone(&self.pending);
        let events = Arc::clone(&self.events);

        // Insert under the lock so the task cannot remove its entry
        // before it exists.
        let mut map = self.pending.lock().expect("pending index poisoned");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            show_and_auto_close(&*surface, display_window, &title, &body);
            events
                .lock()
                .expect("event buffer poisoned")
                .push(Event::ReminderFired { note_id, title, at: Utc::now() });
            pending
                .lock()
                .expect("pending index poisoned")
                .remove(&note_id);
        });
        if let Some(stale) = map.insert(note_id, handle.abort_handle()) {
            stale.abort();
        }
        drop(map);

        self.push_event(Event::ReminderArmed { note_id, fire_at, at: Utc::now() });
        ReminderOutcome::Armed
    }

    /// Invalidate the pending timer for a note, if any. Returns whether a
    /// timer was cancelled.
    pub fn cancel(&self, note_id: Uuid) -> bool {
        let handle = self
            .pending
            .lock()
            .expect("pending index poisoned")
            .remove(&note_id);
        match handle {
            Some(handle) => {
                handle.abort();
                self.push_event(Event::ReminderCancelled { note_id, at: Utc::now() });
                true
            }
            None => false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Number of timers still pending.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().expect("pending index poisoned").len()
    }

    /// Wait until every pending timer has fired or been cancelled.
    pub async fn wait_for_pending(&self) {
        while self.pending_count() > 0 {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    }

    /// Drain accumulated lifecycle events in order.
    pub fn drain_events(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock().expect("event buffer poisoned"))
    }

    /// Cached permission, requesting it from the surface on first use.
    /// A non-granted answer is not retried within this scheduler.
    fn ensure_permission(&self) -> Permission {
        let mut slot = self.permission.lock().expect("permission cache poisoned");
        match *slot {
            Some(permission) => permission,
            None => {
                let permission = self.surface.request_permission();
                *slot = Some(permission);
                permission
            }
        }
    }

    fn fire(&self, note_id: Uuid, title: &str, body: &str) {
        show_and_auto_close(&*self.surface, self.display_window, title, body);
        self.push_event(Event::ReminderFired {
            note_id,
            title: title.to_string(),
            at: Utc::now(),
        });
    }

    fn push_event(&self, event: Event) {
        self.events.lock().expect("event buffer poisoned").push(event);
    }
}

/// Show a notification and arrange its auto-close. Interaction may close
/// the handle earlier; `close` is idempotent.
fn show_and_auto_close(
    surface: &dyn NotificationSurface,
    display_window: Duration,
    title: &str,
    body: &str,
) {
    let handle = surface.show(title, body);
    tokio::spawn(async move {
        tokio::time::sleep(display_window).await;
        handle.close();
    });
}
