//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cvoca_core::TimeWindow;

/// cvoca-events - Browse association events from the command line
#[derive(Debug, Parser)]
#[command(name = "cvoca-events")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CVOCA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Read events from a local data directory instead of the website
    ///
    /// Takes precedence over `--base-url`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the static data path
    #[arg(long, env = "CVOCA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List events matching the given filters
    List(ListArgs),

    /// Show the next upcoming events
    Upcoming {
        /// Number of events to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the Google Calendar link of an event
    CalendarUrl {
        /// Event identifier
        id: u64,
    },

    /// List the tags used by events
    Tags,

    /// List the organizing committees
    Organizers,

    /// Show committee rosters
    Committees {
        /// Case-insensitive search over committee and member names
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Print JSON-LD structured data
    ///
    /// With an event identifier, prints the event and breadcrumb documents;
    /// without one, prints the organization document.
    Schema {
        /// Event identifier
        id: Option<u64>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Filters for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive search over title and description
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only events organized by this committee ("all" for any)
    #[arg(long, short)]
    pub organizer: Option<String>,

    /// Only events carrying this tag ("all" for any)
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Time window: upcoming, past or all
    #[arg(long, short)]
    pub when: Option<TimeWindow>,

    /// Maximum number of events to display
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Print calendar links under each event
    #[arg(long)]
    pub links: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Show configuration file path
    Path,
}
