//! SQLite-based attendance storage.
//!
//! Provides persistent storage for recorded shifts (attendance entries).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use uuid::Uuid;

use super::{data_dir, migrations};
use crate::attendance::ShiftRecord;
use crate::error::{DatabaseError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

const SELECT_COLUMNS: &str =
    "SELECT id, date, start_time, end_time, break_minutes, comment, created_at, modified_at
     FROM attendance_entries";

/// Row as stored, before decoding into a [`ShiftRecord`].
struct RawEntry {
    id: String,
    date: String,
    start: String,
    end: String,
    break_minutes: u32,
    comment: Option<String>,
    created_at: String,
    modified_at: Option<String>,
}

impl RawEntry {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            start: row.get(2)?,
            end: row.get(3)?,
            break_minutes: row.get(4)?,
            comment: row.get(5)?,
            created_at: row.get(6)?,
            modified_at: row.get(7)?,
        })
    }

    fn decode(self) -> std::result::Result<ShiftRecord, DatabaseError> {
        let corrupt = |field: &str, value: &str| DatabaseError::CorruptRow {
            table: "attendance_entries".to_string(),
            message: format!("bad {field} '{value}' in entry {}", self.id),
        };

        let parse_timestamp = |field: &str, value: &str| {
            DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| corrupt(field, value))
        };

        Ok(ShiftRecord {
            id: Uuid::parse_str(&self.id).map_err(|_| corrupt("id", &self.id))?,
            date: NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
                .map_err(|_| corrupt("date", &self.date))?,
            start: NaiveTime::parse_from_str(&self.start, TIME_FORMAT)
                .map_err(|_| corrupt("start_time", &self.start))?,
            end: NaiveTime::parse_from_str(&self.end, TIME_FORMAT)
                .map_err(|_| corrupt("end_time", &self.end))?,
            break_minutes: self.break_minutes,
            comment: self.comment.clone(),
            created_at: parse_timestamp("created_at", &self.created_at)?,
            modified_at: self
                .modified_at
                .as_deref()
                .map(|value| parse_timestamp("modified_at", value))
                .transpose()?,
        })
    }
}

/// SQLite database for attendance storage.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/resteleven/resteleven.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("resteleven.db");
        Self::open_at(&path)
    }

    /// Open (or create) the database at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database (for tests).
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        migrations::migrate(&conn).map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Store a new entry and return it.
    ///
    /// # Errors
    /// Returns an error if the insert fails (including a duplicate id).
    pub fn add_entry(&self, entry: &ShiftRecord) -> Result<ShiftRecord> {
        self.conn.execute(
            "INSERT INTO attendance_entries
                (id, date, start_time, end_time, break_minutes, comment, created_at, modified_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.id.to_string(),
                entry.date.format(DATE_FORMAT).to_string(),
                entry.start.format(TIME_FORMAT).to_string(),
                entry.end.format(TIME_FORMAT).to_string(),
                entry.break_minutes,
                entry.comment,
                entry.created_at.to_rfc3339(),
                entry.modified_at.map(|dt| dt.to_rfc3339()),
            ],
        )?;
        tracing::debug!(id = %entry.id, date = %entry.date, "entry stored");
        Ok(entry.clone())
    }

    /// Replace an existing entry, stamping `modified_at`.
    ///
    /// Returns `None` if no entry has this id.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn update_entry(&self, entry: &ShiftRecord) -> Result<Option<ShiftRecord>> {
        let mut updated = entry.clone();
        updated.modified_at = Some(Utc::now());

        let changed = self.conn.execute(
            "UPDATE attendance_entries
             SET date = ?2, start_time = ?3, end_time = ?4, break_minutes = ?5,
                 comment = ?6, modified_at = ?7
             WHERE id = ?1",
            params![
                updated.id.to_string(),
                updated.date.format(DATE_FORMAT).to_string(),
                updated.start.format(TIME_FORMAT).to_string(),
                updated.end.format(TIME_FORMAT).to_string(),
                updated.break_minutes,
                updated.comment,
                updated.modified_at.map(|dt| dt.to_rfc3339()),
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        self.entry(updated.id)
    }

    /// Delete an entry. Returns whether a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn delete_entry(&self, id: Uuid) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM attendance_entries WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(removed > 0)
    }

    /// Look up a single entry by id.
    ///
    /// # Errors
    /// Returns an error if the query fails or the row is corrupt.
    pub fn entry(&self, id: Uuid) -> Result<Option<ShiftRecord>> {
        let raw = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id.to_string()],
                RawEntry::from_row,
            )
            .optional()?;
        Ok(raw.map(RawEntry::decode).transpose()?)
    }

    /// Entries between `from` and `to` (inclusive, either bound optional),
    /// ordered by date then start.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row is corrupt.
    pub fn entries(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Vec<ShiftRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_COLUMNS}
             WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date <= ?2)
             ORDER BY date, start_time"
        ))?;

        let from = from.map(|d| d.format(DATE_FORMAT).to_string());
        let to = to.map(|d| d.format(DATE_FORMAT).to_string());
        let rows = stmt.query_map(params![from, to], RawEntry::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.decode()?);
        }
        Ok(entries)
    }

    /// Most recent entry by date, ties broken by the latest end.
    ///
    /// # Errors
    /// Returns an error if the query fails or the row is corrupt.
    pub fn latest_entry(&self) -> Result<Option<ShiftRecord>> {
        let raw = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} ORDER BY date DESC, end_time DESC LIMIT 1"),
                [],
                RawEntry::from_row,
            )
            .optional()?;
        Ok(raw.map(RawEntry::decode).transpose()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(day: u32, start: (u32, u32), end: (u32, u32)) -> ShiftRecord {
        ShiftRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    #[test]
    fn add_and_fetch() {
        let db = Database::open_memory().unwrap();
        let entry = shift(6, (8, 0), (16, 30)).with_break(30).with_comment("office");
        db.add_entry(&entry).unwrap();

        let stored = db.entry(entry.id).unwrap().unwrap();
        assert_eq!(stored.date, entry.date);
        assert_eq!(stored.start, entry.start);
        assert_eq!(stored.end, entry.end);
        assert_eq!(stored.break_minutes, 30);
        assert_eq!(stored.comment.as_deref(), Some("office"));
        assert!(stored.modified_at.is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let db = Database::open_memory().unwrap();
        let entry = shift(6, (8, 0), (16, 0));
        db.add_entry(&entry).unwrap();
        assert!(db.add_entry(&entry).is_err());
    }

    #[test]
    fn entries_are_ordered_and_filtered() {
        let db = Database::open_memory().unwrap();
        db.add_entry(&shift(8, (9, 0), (17, 0))).unwrap();
        db.add_entry(&shift(6, (13, 0), (18, 0))).unwrap();
        db.add_entry(&shift(6, (6, 0), (10, 0))).unwrap();

        let all = db.entries(None, None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].start, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(all[2].date, NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());

        let from = NaiveDate::from_ymd_opt(2025, 1, 7);
        assert_eq!(db.entries(from, None).unwrap().len(), 1);
        let to = NaiveDate::from_ymd_opt(2025, 1, 6);
        assert_eq!(db.entries(None, to).unwrap().len(), 2);
    }

    #[test]
    fn latest_prefers_latest_end_on_same_day() {
        let db = Database::open_memory().unwrap();
        assert!(db.latest_entry().unwrap().is_none());

        db.add_entry(&shift(6, (6, 0), (10, 0))).unwrap();
        db.add_entry(&shift(6, (13, 0), (21, 0))).unwrap();
        db.add_entry(&shift(3, (8, 0), (23, 0))).unwrap();

        let latest = db.latest_entry().unwrap().unwrap();
        assert_eq!(latest.end, NaiveTime::from_hms_opt(21, 0, 0).unwrap());
    }

    #[test]
    fn update_stamps_modified_at() {
        let db = Database::open_memory().unwrap();
        let mut entry = shift(6, (8, 0), (16, 0));
        db.add_entry(&entry).unwrap();

        entry.end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let updated = db.update_entry(&entry).unwrap().unwrap();
        assert_eq!(updated.end, entry.end);
        assert!(updated.modified_at.is_some());

        assert!(db.update_entry(&shift(7, (8, 0), (16, 0))).unwrap().is_none());
    }

    #[test]
    fn delete_removes_entry() {
        let db = Database::open_memory().unwrap();
        let entry = shift(6, (8, 0), (16, 0));
        db.add_entry(&entry).unwrap();

        assert!(db.delete_entry(entry.id).unwrap());
        assert!(!db.delete_entry(entry.id).unwrap());
        assert!(db.entry(entry.id).unwrap().is_none());
    }

    #[test]
    fn corrupt_rows_are_reported() {
        let db = Database::open_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO attendance_entries (id, date, start_time, end_time, created_at)
                 VALUES ('not-a-uuid', '2025-01-06', '08:00:00', '16:00:00', '2025-01-06T16:00:00+00:00')",
                [],
            )
            .unwrap();

        let err = db.entries(None, None).unwrap_err();
        assert!(err.to_string().contains("Corrupt row"));
    }
}
