//! Next-shift suggestion command.

use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use resteleven_core::{
    plan_reminder, Config, Database, PatternStore, ReminderPlan, Suggestion, SuggestionBuilder,
};

use super::parse_date;

#[derive(Args)]
pub struct SuggestArgs {
    /// Date to plan (YYYY-MM-DD, default: tomorrow)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SuggestOutput {
    date: NaiveDate,
    suggestion: Option<Suggestion>,
    reminder: Option<ReminderPlan>,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let history = db.entries(None, None)?;

    let store = PatternStore::replay(&history, config.learning.alpha);
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive() + Duration::days(1));
    let learned = store.get(date.weekday()).is_some();
    let suggestion = SuggestionBuilder::new(&store).build(date, &history);
    let reminder = plan_reminder(&config.reminder, suggestion.as_ref());

    if args.json {
        let output = SuggestOutput {
            date,
            suggestion,
            reminder,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Suggestion for {} ({})", date, date.format("%A"));
    match suggestion {
        Some(s) => {
            println!("  Start:      {}", s.start.format("%H:%M"));
            println!("  End:        {}", s.end.format("%H:%M"));
            println!("  Confidence: {:.0}%", s.confidence * 100.0);
            if let Some(note) = suggestion_note(learned, &s) {
                println!("  Note: {note}");
            }
        }
        None => println!("  No data yet. Record a few shifts first."),
    }

    if let Some(plan) = reminder {
        println!("\nReminder at {}: {}", plan.fire_at.format("%H:%M"), plan.body);
    }

    Ok(())
}

/// Explains where a suggestion came from when it is not the plain pattern.
fn suggestion_note(learned: bool, suggestion: &Suggestion) -> Option<&'static str> {
    if !learned {
        Some("no pattern for this weekday yet; based on 11h after your latest shift")
    } else if !suggestion.respects_rest {
        Some("adjusted to keep 11h of rest after the previous shift")
    } else {
        None
    }
}
