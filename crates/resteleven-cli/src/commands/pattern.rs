//! Learned pattern command for displaying weekday habits.

use chrono::Weekday;
use clap::Subcommand;

use resteleven_core::{Config, Database, LearnedPattern, PatternStore};

use super::parse_day;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Subcommand)]
pub enum PatternAction {
    /// Show learned patterns
    Show {
        /// Day of week (0-6 or mon/tue/wed/thu/fri/sat/sun)
        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PatternAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PatternAction::Show { day, json } => show_patterns(day, json),
    }
}

fn show_patterns(day: Option<Weekday>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let history = db.entries(None, None)?;
    let store = PatternStore::replay(&history, config.learning.alpha);

    let days: Vec<Weekday> = match day {
        Some(d) => vec![d],
        None => WEEK.to_vec(),
    };

    if json {
        let patterns: Vec<LearnedPattern> = days.iter().filter_map(|d| store.get(*d)).collect();
        println!("{}", serde_json::to_string_pretty(&patterns)?);
        return Ok(());
    }

    println!("\nLearned patterns (alpha {:.2}):", config.learning.alpha);
    println!("{}", "─".repeat(50));
    for d in days {
        println!("{}", render_row(d, store.get(d).as_ref()));
    }
    println!("{}", "─".repeat(50));

    if store.is_empty() {
        println!("\n  Tip: record shifts with `resteleven entry add` to build patterns.");
    }
    Ok(())
}

fn render_row(day: Weekday, pattern: Option<&LearnedPattern>) -> String {
    match pattern {
        Some(p) => {
            let bar_length = (p.confidence * 20.0).round() as usize;
            format!(
                "{} {}-{} {}{} {:>3.0}% ({} samples)",
                day,
                p.avg_start.format("%H:%M"),
                p.avg_end.format("%H:%M"),
                "█".repeat(bar_length),
                " ".repeat(20 - bar_length.min(20)),
                p.confidence * 100.0,
                p.samples
            )
        }
        None => format!("{day} ·  no data"),
    }
}
