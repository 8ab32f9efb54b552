//! Well-formedness checks for recorded shifts.
//!
//! An end before the start is a hard error; missing break time is only a
//! warning, matching statutory break recommendations (30 minutes from six
//! hours of work, 45 minutes from nine).

use chrono::NaiveTime;
use thiserror::Error;

use super::ShiftRecord;
use crate::error::ValidationError;

/// Span after which a 30 minute break is recommended.
const SIX_HOURS: i64 = 360;
/// Span after which a 45 minute break is recommended.
const NINE_HOURS: i64 = 540;

/// A problem found in a [`ShiftRecord`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The shift ends at or before its start.
    #[error("end ({end}) must be after start ({start})")]
    EndNotAfterStart { start: NaiveTime, end: NaiveTime },

    /// The break is shorter than recommended for the shift's span.
    #[error("shifts of {threshold_minutes} minutes or more should include at least {required} minutes of break (got {actual})")]
    ShortBreak {
        threshold_minutes: i64,
        required: u32,
        actual: u32,
    },
}

impl ValidationIssue {
    /// Whether this issue blocks storing the record.
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationIssue::EndNotAfterStart { .. })
    }
}

/// Collect every issue with `shift`, errors first.
pub fn validate_shift(shift: &ShiftRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if shift.end <= shift.start {
        issues.push(ValidationIssue::EndNotAfterStart {
            start: shift.start,
            end: shift.end,
        });
    }

    let span = shift.span_minutes();
    if span >= SIX_HOURS && shift.break_minutes < 30 {
        issues.push(ValidationIssue::ShortBreak {
            threshold_minutes: SIX_HOURS,
            required: 30,
            actual: shift.break_minutes,
        });
    }
    if span >= NINE_HOURS && shift.break_minutes < 45 {
        issues.push(ValidationIssue::ShortBreak {
            threshold_minutes: NINE_HOURS,
            required: 45,
            actual: shift.break_minutes,
        });
    }

    issues
}

/// Reject `shift` if it has a blocking issue, otherwise return its warnings.
///
/// # Errors
/// Returns [`ValidationError::InvalidShift`] for the first blocking issue.
pub fn ensure_valid(shift: &ShiftRecord) -> Result<Vec<ValidationIssue>, ValidationError> {
    let (errors, warnings): (Vec<_>, Vec<_>) =
        validate_shift(shift).into_iter().partition(ValidationIssue::is_error);

    match errors.into_iter().next() {
        Some(issue) => Err(ValidationError::InvalidShift(issue)),
        None => Ok(warnings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn shift(start: (u32, u32), end: (u32, u32), break_minutes: u32) -> ShiftRecord {
        ShiftRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
        .with_break(break_minutes)
    }

    #[test]
    fn well_formed_shift_has_no_issues() {
        assert!(validate_shift(&shift((8, 0), (16, 0), 30)).is_empty());
    }

    #[test]
    fn end_before_start_is_an_error() {
        let issues = validate_shift(&shift((16, 0), (8, 0), 0));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn equal_start_and_end_is_an_error() {
        let issues = validate_shift(&shift((9, 0), (9, 0), 0));
        assert!(issues.iter().any(ValidationIssue::is_error));
    }

    #[test]
    fn six_hour_shift_without_break_warns() {
        let issues = validate_shift(&shift((8, 0), (14, 0), 0));
        assert_eq!(
            issues,
            vec![ValidationIssue::ShortBreak {
                threshold_minutes: 360,
                required: 30,
                actual: 0
            }]
        );
        assert!(!issues[0].is_error());
    }

    #[test]
    fn nine_hour_shift_with_short_break_warns_once() {
        let issues = validate_shift(&shift((8, 0), (17, 30), 30));
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0],
            ValidationIssue::ShortBreak { required: 45, .. }
        ));
    }

    #[test]
    fn ensure_valid_returns_warnings_only() {
        let warnings = ensure_valid(&shift((8, 0), (18, 0), 0)).unwrap();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn ensure_valid_rejects_inverted_shift() {
        let err = ensure_valid(&shift((18, 0), (8, 0), 0)).unwrap_err();
        assert!(err.to_string().contains("must be after start"));
    }
}
