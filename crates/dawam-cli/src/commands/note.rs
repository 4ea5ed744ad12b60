use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Subcommand, ValueEnum};
use dawam_core::{
    Database, Note, NotificationSurface, Permission, Priority, ReminderOutcome, ReminderScheduler,
};
use dawam_core::reminder::NotificationHandle;
use std::sync::Arc;
use uuid::Uuid;

/// The note editing surface caps content length; the core does not.
const MAX_CONTENT_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Create a note
    Add {
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, value_enum, default_value = "medium")]
        priority: PriorityArg,
        /// Reminder time, RFC3339 or "YYYY-MM-DD HH:MM" (UTC)
        #[arg(long)]
        remind_at: Option<String>,
    },
    /// List all notes
    List,
    /// Toggle a note's completed flag
    Complete { id: Uuid },
    /// Delete a note
    Delete { id: Uuid },
    /// Arm all enabled future reminders and block until they fire
    Watch,
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        NoteAction::Add { title, content, priority, remind_at } => {
            if content.chars().count() > MAX_CONTENT_CHARS {
                return Err(format!("content exceeds {MAX_CONTENT_CHARS} characters").into());
            }
            let mut note = Note::new(title, content, priority.into());
            if let Some(raw) = remind_at {
                note = note.with_reminder(parse_remind_at(&raw)?);
            }
            db.insert_note(&note)?;

            let outcome = if note.reminder.is_some() {
                let scheduler = ReminderScheduler::new(Arc::new(TerminalSurface));
                let runtime = tokio::runtime::Runtime::new()?;
                runtime.block_on(async { scheduler.schedule(&note) })
            } else {
                ReminderOutcome::NoReminder
            };

            let output = serde_json::json!({ "note": note, "reminder": outcome });
            println!("{}", serde_json::to_string_pretty(&output)?);
            if matches!(outcome, ReminderOutcome::Armed) {
                eprintln!("reminder armed; run `dawam-cli note watch` to keep reminders live");
            }
        }
        NoteAction::List => {
            let notes = db.list_notes()?;
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        NoteAction::Complete { id } => match db.toggle_completed(id)? {
            Some(completed) => println!("{}", serde_json::json!({ "id": id, "completed": completed })),
            None => return Err(format!("no note with id {id}").into()),
        },
        NoteAction::Delete { id } => {
            if !db.delete_note(id)? {
                return Err(format!("no note with id {id}").into());
            }
            println!("{}", serde_json::json!({ "id": id, "deleted": true }));
        }
        NoteAction::Watch => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(watch(&db))?;
        }
    }
    Ok(())
}

async fn watch(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let scheduler = ReminderScheduler::new(Arc::new(TerminalSurface));
    let notes = db.list_notes()?;

    let mut armed = 0usize;
    for note in notes.iter().filter(|n| n.active_reminder_at().is_some()) {
        match scheduler.schedule(note) {
            ReminderOutcome::Armed | ReminderOutcome::FiredImmediately => armed += 1,
            ReminderOutcome::NotArmed { permission } => {
                eprintln!("reminder for '{}' not armed (permission: {permission:?})", note.title);
            }
            ReminderOutcome::NoReminder => {}
        }
    }

    if armed == 0 {
        println!("no enabled reminders");
        return Ok(());
    }

    scheduler.wait_for_pending().await;
    for event in scheduler.drain_events() {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}

fn parse_remind_at(raw: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map_err(|e| format!("invalid reminder time '{raw}': {e}"))?;
    Ok(naive.and_utc())
}

/// Notification surface for terminal sessions: permission is always
/// granted and notifications print to stdout.
struct TerminalSurface;

struct TerminalHandle;

impl NotificationHandle for TerminalHandle {
    fn close(&self) {}
}

impl NotificationSurface for TerminalSurface {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn show(&self, title: &str, body: &str) -> Box<dyn NotificationHandle> {
        println!("🔔 {title}: {body}");
        Box::new(TerminalHandle)
    }
}
