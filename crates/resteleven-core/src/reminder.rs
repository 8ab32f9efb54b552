//! Reminder planning.
//!
//! Turns the user's reminder preference and the current suggestion into a
//! concrete reminder. Delivery (push, desktop notification) is left to the
//! caller.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::learning::Suggestion;

/// When and whether to remind the user to record attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPreference {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_preferred_time")]
    pub preferred_time: NaiveTime,
    #[serde(default = "default_lead_minutes")]
    pub lead_minutes: u32,
}

fn default_preferred_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn default_lead_minutes() -> u32 {
    15
}

impl Default for ReminderPreference {
    fn default() -> Self {
        Self {
            enabled: false,
            preferred_time: default_preferred_time(),
            lead_minutes: default_lead_minutes(),
        }
    }
}

/// A reminder ready to hand to a notification backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPlan {
    /// Time of day to fire. Wraps around midnight like a clock.
    pub fire_at: NaiveTime,
    pub title: String,
    pub body: String,
}

/// Plan the daily reminder, or `None` if reminders are disabled.
pub fn plan_reminder(
    preference: &ReminderPreference,
    suggestion: Option<&Suggestion>,
) -> Option<ReminderPlan> {
    if !preference.enabled {
        return None;
    }

    let fire_at = preference.preferred_time - Duration::minutes(i64::from(preference.lead_minutes));
    let body = match suggestion {
        Some(s) => format!(
            "Next suggestion {} ({:.0}%)",
            s.start.format("%H:%M"),
            s.confidence * 100.0
        ),
        None => "Reminder to record your attendance".to_string(),
    };

    Some(ReminderPlan {
        fire_at,
        title: "RestEleven".to_string(),
        body,
    })
}
