use crate::core::checkin::StartAgainPolicy;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rStudyplan
/// CLI application to follow a weekly study timetable with SQLite
#[derive(Parser)]
#[command(
    name = "rstudyplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A study timetable CLI: plan weekly sessions, check in, mark them complete (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Sign in (the user is created on first login)
    Login {
        /// Email identifying the user
        email: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Add a session to the weekly timetable
    Add {
        /// Day of the week (Monday..Sunday, or Mon..Sun)
        day: String,

        /// Time slot label, e.g. "8:30 – 10:20 am"
        time_slot: String,

        /// Focus area, e.g. "DSA coding"
        focus_area: String,
    },

    /// Edit a timetable session
    Edit {
        /// Timetable entry id (see `list`)
        id: i64,

        /// New day
        #[arg(long)]
        day: Option<String>,

        /// New time slot label
        #[arg(long = "slot")]
        time_slot: Option<String>,

        /// New focus area
        #[arg(long = "focus")]
        focus_area: Option<String>,
    },

    /// Delete a timetable session (its check-in history is kept)
    Del {
        /// Timetable entry id (see `list`)
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Fill an empty timetable with the default weekly plan
    Seed {
        /// Seed even if the timetable already has entries
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the timetable grouped by day, with each session's state
    List {
        /// Only show this day (Monday..Sunday, or Mon..Sun)
        #[arg(long, conflicts_with = "today")]
        day: Option<String>,

        /// Only show today's sessions
        #[arg(long = "today")]
        today: bool,
    },

    /// Check in to a session ("start again" when it is already completed)
    Checkin {
        /// Timetable entry id (see `list`)
        id: i64,

        /// Override the configured start-again policy
        #[arg(long, value_enum)]
        policy: Option<StartAgainPolicy>,
    },

    /// Mark a checked-in session as completed
    Complete {
        /// Timetable entry id (see `list`)
        id: i64,
    },

    /// Show the check-in history (newest first)
    History {
        /// Only records belonging to this timetable entry
        #[arg(long = "entry")]
        entry: Option<i64>,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz on Unix)
        #[arg(long)]
        compress: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the check-in history
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
