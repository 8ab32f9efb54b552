//! Minimum rest between consecutive shifts.

use chrono::{Duration, NaiveDate, NaiveTime};
use std::cmp::Ordering;

use super::minutes::{from_minutes, LAST_MINUTE};
use crate::attendance::ShiftRecord;

/// Minimum gap between the end of one shift and the start of the next.
pub const MIN_REST: Duration = Duration::hours(11);

/// Stateless checker for the rest constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestConstraintChecker;

impl RestConstraintChecker {
    /// Whether starting at `candidate_start` on `target_date` leaves at least
    /// [`MIN_REST`] after the previous shift. Trivially true without one.
    pub fn is_rest_satisfied(
        target_date: NaiveDate,
        candidate_start: NaiveTime,
        history: &[ShiftRecord],
    ) -> bool {
        let Some(previous) = Self::previous_shift(target_date, history) else {
            return true;
        };

        let rest = target_date.and_time(candidate_start) - previous.end_datetime();
        rest >= MIN_REST
    }

    /// Latest shift dated strictly before `target_date`, ties broken by the
    /// latest end.
    pub fn previous_shift(target_date: NaiveDate, history: &[ShiftRecord]) -> Option<&ShiftRecord> {
        history
            .iter()
            .filter(|shift| shift.date < target_date)
            .max_by_key(|shift| (shift.date, shift.end))
    }

    /// Earliest time of day on `target_date` that leaves [`MIN_REST`] after
    /// `previous`, pinned to `[00:00, 23:59]` when the boundary falls on
    /// another day.
    pub fn earliest_start(target_date: NaiveDate, previous: &ShiftRecord) -> NaiveTime {
        let earliest = previous.end_datetime() + MIN_REST;
        match earliest.date().cmp(&target_date) {
            Ordering::Equal => earliest.time(),
            Ordering::Less => NaiveTime::MIN,
            Ordering::Greater => from_minutes(LAST_MINUTE),
        }
    }

    /// Latest shift in `history`, ties broken by the latest end.
    pub fn most_recent_shift(history: &[ShiftRecord]) -> Option<&ShiftRecord> {
        history.iter().max_by_key(|shift| (shift.date, shift.end))
    }
}
