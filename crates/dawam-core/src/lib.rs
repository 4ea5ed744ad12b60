//! # Dawam Core Library
//!
//! This library provides the core business logic for Dawam, a localized
//! (Arabic/English) work-calendar organizer. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary; any GUI is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Calendar**: Day classification (work / weekend / official holiday /
//!   personal leave) over a user work configuration and a compiled
//!   holiday calendar
//! - **Shift**: Repeating work/leave cycle calculator anchored at a start
//!   date, with lazy pattern previews
//! - **Stats**: Day-count aggregation over month/quarter/year windows
//! - **Reminders**: Permission-gated single-shot note reminders with
//!   cancellation handles
//! - **Storage**: SQLite-based note storage and TOML-based settings
//!
//! ## Key Components
//!
//! - [`DayClassifier`]: Ordered-rule date labeling
//! - [`ShiftPattern`]: Cycle position math and previews
//! - [`PeriodStats`]: Aggregated day counts with derived shares
//! - [`ReminderScheduler`]: One-shot notification timers
//! - [`Settings`] / [`Database`]: Configuration and note persistence

pub mod calendar;
pub mod error;
pub mod events;
pub mod geo;
pub mod notes;
pub mod reminder;
pub mod shift;
pub mod stats;
pub mod storage;

pub use calendar::{DayClassification, DayClassifier, DayKind, HolidayCalendar, Lang, WorkConfiguration, WorkSystem};
pub use error::{ConfigError, CoreError, DatabaseError, GeoError};
pub use events::Event;
pub use notes::{Note, Priority, Reminder};
pub use reminder::{NotificationSurface, Permission, ReminderOutcome, ReminderScheduler};
pub use shift::{ShiftDay, ShiftPattern};
pub use stats::{aggregate, Period, PeriodStats};
pub use storage::{Database, Settings};
