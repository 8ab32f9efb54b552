//! Adaptive shift suggestions.
//!
//! This module learns a worker's habits per weekday and proposes the next
//! clock-in/clock-out window while keeping the minimum rest between shifts.
//!
//! - [`PatternStore`]: seven weekday slots, each an exponential moving average
//!   of observed start and end times
//! - [`RestConstraintChecker`]: does a candidate start leave 11 hours of rest?
//! - [`SuggestionBuilder`]: combines both, with a cold-start fallback
//!
//! Nothing here performs I/O or returns errors. Missing data yields `None` and
//! out-of-range tunables are clamped.
//!
//! All time math is same-day minutes since midnight, clamped to `[00:00,
//! 23:59]`. Shifts crossing midnight are not modelled.

pub mod confidence;
pub mod minutes;
mod pattern;
mod rest;
mod suggestion;

pub use confidence::DEFAULT_ALPHA;
pub use pattern::{LearnedPattern, PatternStore};
pub use rest::{RestConstraintChecker, MIN_REST};
pub use suggestion::{Suggestion, SuggestionBuilder};
