//! # RestEleven Core Library
//!
//! This library provides the core business logic for RestEleven, a personal
//! attendance tracker that suggests the next clock-in/clock-out window from a
//! worker's habits while keeping at least eleven hours of rest between shifts.
//! All operations are available through the standalone `resteleven` CLI.
//!
//! ## Architecture
//!
//! - **Learning**: per-weekday pattern learner, rest-constraint checker and
//!   suggestion builder. Pure computation, no I/O.
//! - **Attendance**: shift records and their validation
//! - **Reminder**: turns a suggestion into a reminder to record attendance
//! - **Storage**: SQLite-based attendance storage and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`PatternStore`]: learned habits per weekday
//! - [`SuggestionBuilder`]: next-shift suggestions
//! - [`Database`]: attendance persistence
//! - [`Config`]: application configuration management

pub mod attendance;
pub mod error;
pub mod learning;
pub mod reminder;
pub mod storage;

pub use attendance::{ensure_valid, validate_shift, ShiftRecord, ValidationIssue};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use learning::{
    LearnedPattern, PatternStore, RestConstraintChecker, Suggestion, SuggestionBuilder,
    DEFAULT_ALPHA, MIN_REST,
};
pub use reminder::{plan_reminder, ReminderPlan, ReminderPreference};
pub use storage::{Config, Database};
