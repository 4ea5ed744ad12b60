//! Note records.
//!
//! Notes are exclusively owned by the notes store; the reminder scheduler
//! only reads the `reminder` field at submission time and never mutates a
//! note. The 500-character content cap is enforced by editing surfaces,
//! not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Optional one-time reminder attached to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub at: DateTime<Utc>,
    pub enabled: bool,
}

/// A user note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Immutable after creation.
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub reminder: Option<Reminder>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
            priority,
            completed: false,
            reminder: None,
        }
    }

    pub fn with_reminder(mut self, at: DateTime<Utc>) -> Self {
        self.reminder = Some(Reminder { at, enabled: true });
        self
    }

    /// The reminder timestamp, if a reminder is present and enabled.
    pub fn active_reminder_at(&self) -> Option<DateTime<Utc>> {
        self.reminder.filter(|r| r.enabled).map(|r| r.at)
    }
}
