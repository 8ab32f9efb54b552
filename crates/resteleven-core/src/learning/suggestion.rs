//! Forward suggestions for a planned date.
//!
//! With a learned pattern the suggestion follows the pattern, moved later if
//! needed to respect [`MIN_REST`]. Without one it falls back to the most
//! recent shift's end plus [`MIN_REST`] as a same-day time (so late shifts
//! pin the fallback to 23:59), with a fixed low confidence.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::confidence::{round2, COLD_START_CONFIDENCE, REST_PENALTY};
use super::minutes::add_clamped;
use super::pattern::{LearnedPattern, PatternStore};
use super::rest::{RestConstraintChecker, MIN_REST};
use crate::attendance::ShiftRecord;

/// Length assumed for a shift when nothing better is known.
const DEFAULT_SHIFT: Duration = Duration::hours(8);

/// Suggested clock-in/clock-out window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Rounded to two decimals
    pub confidence: f64,
    /// Whether the unmodified pattern already respected the rest period.
    /// Always false for cold-start suggestions.
    pub respects_rest: bool,
}

/// Builds [`Suggestion`]s from a [`PatternStore`] and shift history.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionBuilder<'a> {
    patterns: &'a PatternStore,
}

impl<'a> SuggestionBuilder<'a> {
    pub fn new(patterns: &'a PatternStore) -> Self {
        Self { patterns }
    }

    /// Suggest a window for `target_date`.
    ///
    /// Returns `None` only when there is neither a pattern for the weekday nor
    /// any history to fall back on.
    pub fn build(&self, target_date: NaiveDate, history: &[ShiftRecord]) -> Option<Suggestion> {
        match self.patterns.get(target_date.weekday()) {
            Some(pattern) => Some(Self::from_pattern(&pattern, target_date, history)),
            None => Self::cold_start(history),
        }
    }

    fn cold_start(history: &[ShiftRecord]) -> Option<Suggestion> {
        let last = RestConstraintChecker::most_recent_shift(history)?;
        let start = add_clamped(last.end, MIN_REST);
        let end = add_clamped(start, DEFAULT_SHIFT);

        tracing::debug!(after = %last.end_datetime(), %start, %end, "cold-start suggestion");
        Some(Suggestion {
            start,
            end,
            confidence: COLD_START_CONFIDENCE,
            respects_rest: false,
        })
    }

    fn from_pattern(pattern: &LearnedPattern, target_date: NaiveDate, history: &[ShiftRecord]) -> Suggestion {
        let mut start = pattern.avg_start;
        let mut end = pattern.avg_end;
        let mut confidence = pattern.confidence;

        let respects_rest = RestConstraintChecker::is_rest_satisfied(target_date, start, history);
        if !respects_rest {
            if let Some(previous) = RestConstraintChecker::previous_shift(target_date, history) {
                let earliest = RestConstraintChecker::earliest_start(target_date, previous);
                if earliest > start {
                    start = earliest;
                    end = add_clamped(start, pattern_duration(pattern));
                }
            }
            confidence *= REST_PENALTY;

            tracing::debug!(
                %target_date,
                from = %pattern.avg_start,
                to = %start,
                "suggestion moved to respect minimum rest"
            );
        }

        Suggestion {
            start,
            end,
            confidence: round2(confidence),
            respects_rest,
        }
    }
}

/// Average shift length of `pattern`, or the default if it is not positive.
fn pattern_duration(pattern: &LearnedPattern) -> Duration {
    let duration = pattern.avg_end - pattern.avg_start;
    if duration > Duration::zero() {
        duration
    } else {
        DEFAULT_SHIFT
    }
}
