//! Per-weekday shift patterns.
//!
//! Each weekday has at most one [`LearnedPattern`], an exponential moving
//! average of the start and end times observed on that day.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::confidence::{clamp_alpha, confidence_for, INITIAL_CONFIDENCE};
use super::minutes::blend;
use crate::attendance::ShiftRecord;

/// Learned habit for a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearnedPattern {
    pub weekday: Weekday,
    /// Smoothed start time of day
    pub avg_start: NaiveTime,
    /// Smoothed end time of day
    pub avg_end: NaiveTime,
    /// Confidence level (0.20-0.99)
    pub confidence: f64,
    /// Number of shifts folded into this pattern
    pub samples: u32,
}

impl LearnedPattern {
    /// Pattern seeded from a single shift.
    fn seed(shift: &ShiftRecord) -> Self {
        Self {
            weekday: shift.weekday(),
            avg_start: shift.start,
            avg_end: shift.end,
            confidence: INITIAL_CONFIDENCE,
            samples: 1,
        }
    }

    /// Fold another shift into the averages.
    fn observe(&mut self, shift: &ShiftRecord, alpha: f64) {
        self.avg_start = blend(self.avg_start, shift.start, alpha);
        self.avg_end = blend(self.avg_end, shift.end, alpha);
        self.samples += 1;
        self.confidence = confidence_for(self.samples, alpha);
    }
}

/// Owner of the seven weekday slots for one user session.
///
/// Slots are indexed by days from Monday. The store is not durable; rebuild it
/// with [`PatternStore::replay`] from stored history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternStore {
    slots: [Option<LearnedPattern>; 7],
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn from `shift` and return the updated pattern for its weekday.
    ///
    /// `alpha` is clamped into `[0.05, 0.9]`.
    pub fn update(&mut self, shift: &ShiftRecord, alpha: f64) -> LearnedPattern {
        let alpha = clamp_alpha(alpha);
        let slot = &mut self.slots[slot_index(shift.weekday())];

        if let Some(pattern) = slot.as_mut() {
            pattern.observe(shift, alpha);
            tracing::debug!(
                weekday = %pattern.weekday,
                samples = pattern.samples,
                confidence = pattern.confidence,
                "pattern updated"
            );
            return *pattern;
        }

        let pattern = LearnedPattern::seed(shift);
        tracing::debug!(weekday = %pattern.weekday, start = %pattern.avg_start, end = %pattern.avg_end, "pattern created");
        *slot = Some(pattern);
        pattern
    }

    /// Learned pattern for `weekday`, if any shift was observed on it.
    pub fn get(&self, weekday: Weekday) -> Option<LearnedPattern> {
        self.slots[slot_index(weekday)]
    }

    /// Rebuild a store by feeding `history` through [`update`](Self::update)
    /// in chronological order.
    pub fn replay<'a, I>(history: I, alpha: f64) -> Self
    where
        I: IntoIterator<Item = &'a ShiftRecord>,
    {
        let mut ordered: Vec<&ShiftRecord> = history.into_iter().collect();
        ordered.sort_by_key(|shift| (shift.date, shift.start, shift.end));

        let mut store = Self::new();
        for shift in ordered {
            store.update(shift, alpha);
        }
        store
    }

    /// Learned patterns in weekday order, Monday first.
    pub fn patterns(&self) -> impl Iterator<Item = &LearnedPattern> {
        self.slots.iter().flatten()
    }

    /// Number of weekdays with a pattern.
    pub fn len(&self) -> usize {
        self.patterns().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

fn slot_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}
