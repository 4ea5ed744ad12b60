//! SQLite-based note storage.
//!
//! Provides persistent storage for:
//! - User notes (with optional reminders)
//! - A key-value store for small application state

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::DatabaseError;
use crate::notes::{Note, Priority, Reminder};

use super::data_dir;

/// SQLite database for notes.
///
/// Notes are exclusively owned here: created on submit, mutated in place
/// on edit/toggle, removed on explicit delete.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/dawam/dawam.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, DatabaseError> {
        let path = data_dir()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?
            .join("dawam.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path,
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS notes (
                id               TEXT PRIMARY KEY,
                title            TEXT NOT NULL,
                content          TEXT NOT NULL DEFAULT '',
                created_at       TEXT NOT NULL,
                priority         TEXT NOT NULL DEFAULT 'medium',
                completed        INTEGER NOT NULL DEFAULT 0,
                reminder_at      TEXT,
                reminder_enabled INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_notes_created_at ON notes(created_at);",
        )?;
        Ok(())
    }

    /// Insert a new note.
    pub fn insert_note(&self, note: &Note) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO notes (id, title, content, created_at, priority, completed, reminder_at, reminder_enabled)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                note.id.to_string(),
                note.title,
                note.content,
                note.created_at.to_rfc3339(),
                priority_str(note.priority),
                note.completed,
                note.reminder.map(|r| r.at.to_rfc3339()),
                note.reminder.map(|r| r.enabled).unwrap_or(false),
            ],
        )?;
        Ok(())
    }

    /// Update an existing note in place (`created_at` stays immutable).
    /// Returns whether a row matched.
    pub fn update_note(&self, note: &Note) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET title = ?2, content = ?3, priority = ?4, completed = ?5,
                 reminder_at = ?6, reminder_enabled = ?7
             WHERE id = ?1",
            params![
                note.id.to_string(),
                note.title,
                note.content,
                priority_str(note.priority),
                note.completed,
                note.reminder.map(|r| r.at.to_rfc3339()),
                note.reminder.map(|r| r.enabled).unwrap_or(false),
            ],
        )?;
        Ok(changed > 0)
    }

    /// Toggle the completed flag. Returns the new state, or None when the
    /// note does not exist.
    pub fn toggle_completed(&self, id: Uuid) -> Result<Option<bool>, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE notes SET completed = NOT completed WHERE id = ?1",
            params![id.to_string()],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        let completed = self.conn.query_row(
            "SELECT completed FROM notes WHERE id = ?1",
            params![id.to_string()],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(Some(completed))
    }

    /// Delete a note. Returns whether a row was removed.
    pub fn delete_note(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id.to_string()])?;
        Ok(changed > 0)
    }

    /// Fetch one note by id.
    pub fn get_note(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, title, content, created_at, priority, completed, reminder_at, reminder_enabled
                 FROM notes WHERE id = ?1",
                params![id.to_string()],
                note_row,
            )
            .optional()?;
        row.map(decode_note).transpose()
    }

    /// All notes ordered by creation time.
    pub fn list_notes(&self) -> Result<Vec<Note>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, created_at, priority, completed, reminder_at, reminder_enabled
             FROM notes ORDER BY created_at",
        )?;
        let rows = stmt.query_map([], note_row)?;
        let mut notes = Vec::new();
        for row in rows {
            notes.push(decode_note(row?)?);
        }
        Ok(notes)
    }

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Raw note row before string fields are decoded.
type NoteRow = (String, String, String, String, String, bool, Option<String>, bool);

fn note_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<NoteRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn decode_note(row: NoteRow) -> Result<Note, DatabaseError> {
    let (id, title, content, created_at, priority, completed, reminder_at, reminder_enabled) = row;
    let id = Uuid::parse_str(&id)
        .map_err(|e| DatabaseError::CorruptRecord(format!("id '{id}': {e}")))?;
    let created_at = parse_timestamp(&created_at)?;
    let reminder = reminder_at
        .as_deref()
        .map(parse_timestamp)
        .transpose()?
        .map(|at| Reminder { at, enabled: reminder_enabled });
    Ok(Note {
        id,
        title,
        content,
        created_at,
        priority: parse_priority(&priority)?,
        completed,
        reminder,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::CorruptRecord(format!("timestamp '{raw}': {e}")))
}

fn priority_str(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(raw: &str) -> Result<Priority, DatabaseError> {
    match raw {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(DatabaseError::CorruptRecord(format!("priority '{other}'"))),
    }
}
