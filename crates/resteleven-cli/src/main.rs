use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "resteleven", version, about = "RestEleven attendance CLI")]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recorded shifts
    Entry {
        #[command(subcommand)]
        action: commands::entry::EntryAction,
    },
    /// Suggest the next shift window
    Suggest(commands::suggest::SuggestArgs),
    /// Learned weekday patterns
    Pattern {
        #[command(subcommand)]
        action: commands::pattern::PatternAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("RESTELEVEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Entry { action } => commands::entry::run(action),
        Commands::Suggest(args) => commands::suggest::run(args),
        Commands::Pattern { action } => commands::pattern::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
