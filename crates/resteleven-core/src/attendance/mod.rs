//! Attendance records and their well-formedness checks.
//!
//! A [`ShiftRecord`] is one recorded working day. Records are validated by
//! [`validate_shift`] before they are stored or fed into the learning engine.

mod record;
mod validation;

pub use record::ShiftRecord;
pub use validation::{ensure_valid, validate_shift, ValidationIssue};
