use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded shift.
///
/// Start and end are same-day times of day. Overnight shifts cannot be
/// represented; `end > start` is checked by [`super::validate_shift`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default)]
    pub break_minutes: u32,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl ShiftRecord {
    /// Create a new record with a fresh id and no break.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            start,
            end,
            break_minutes: 0,
            comment: None,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_break(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Day of week the shift was worked on.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Minutes between start and end, ignoring the break.
    pub fn span_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Minutes actually worked (span minus break). Negative for malformed records.
    pub fn worked_minutes(&self) -> i64 {
        self.span_minutes() - i64::from(self.break_minutes)
    }

    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    pub fn end_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.end)
    }
}
