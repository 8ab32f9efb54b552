//! Attendance entry commands.

use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use uuid::Uuid;

use resteleven_core::{ensure_valid, Database, ShiftRecord};

use super::{parse_date, parse_time};

#[derive(Subcommand)]
pub enum EntryAction {
    /// Record a shift
    Add {
        /// Date worked (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        /// Clock-in time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        /// Clock-out time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        end: NaiveTime,
        /// Break in minutes
        #[arg(long = "break", default_value_t = 0)]
        break_minutes: u32,
        /// Free-form comment
        #[arg(long)]
        comment: Option<String>,
    },
    /// List recorded shifts
    List {
        /// First date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        /// Last date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a recorded shift
    Edit {
        /// Entry ID (default: most recent entry)
        id: Option<Uuid>,
        /// New date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// New clock-in time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        start: Option<NaiveTime>,
        /// New clock-out time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        end: Option<NaiveTime>,
        /// New break in minutes
        #[arg(long = "break")]
        break_minutes: Option<u32>,
        /// New comment
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete a shift
    Remove {
        /// Entry ID
        id: Uuid,
    },
}

pub fn run(action: EntryAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        EntryAction::Add {
            date,
            start,
            end,
            break_minutes,
            comment,
        } => {
            let mut entry = ShiftRecord::new(date, start, end).with_break(break_minutes);
            entry.comment = comment;

            let warnings = ensure_valid(&entry)?;
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }

            let stored = db.add_entry(&entry)?;
            println!("Entry recorded: {}", stored.id);
            println!(
                "  {} {}-{} (worked {} min)",
                stored.date,
                stored.start.format("%H:%M"),
                stored.end.format("%H:%M"),
                stored.worked_minutes()
            );
        }
        EntryAction::List { from, to, json } => {
            let entries = db.entries(from, to)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No entries recorded.");
            } else {
                for entry in &entries {
                    println!(
                        "{}  {} {} {}-{}  break {:>3} min{}",
                        entry.id,
                        entry.date,
                        entry.date.format("%a"),
                        entry.start.format("%H:%M"),
                        entry.end.format("%H:%M"),
                        entry.break_minutes,
                        entry
                            .comment
                            .as_deref()
                            .map(|c| format!("  # {c}"))
                            .unwrap_or_default()
                    );
                }
            }
        }
        EntryAction::Edit {
            id,
            date,
            start,
            end,
            break_minutes,
            comment,
        } => {
            let mut entry = match id {
                Some(id) => db.entry(id)?.ok_or(format!("entry not found: {id}"))?,
                None => db.latest_entry()?.ok_or("no entries recorded")?,
            };

            if let Some(d) = date { entry.date = d; }
            if let Some(s) = start { entry.start = s; }
            if let Some(e) = end { entry.end = e; }
            if let Some(b) = break_minutes { entry.break_minutes = b; }
            if let Some(c) = comment { entry.comment = Some(c); }

            let warnings = ensure_valid(&entry)?;
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }

            let updated = db
                .update_entry(&entry)?
                .ok_or(format!("entry not found: {}", entry.id))?;
            println!("Entry updated: {}", updated.id);
            println!(
                "  {} {}-{} (worked {} min)",
                updated.date,
                updated.start.format("%H:%M"),
                updated.end.format("%H:%M"),
                updated.worked_minutes()
            );
        }
        EntryAction::Remove { id } => {
            if db.delete_entry(id)? {
                println!("Entry removed: {id}");
            } else {
                return Err(format!("entry not found: {id}").into());
            }
        }
    }
    Ok(())
}
