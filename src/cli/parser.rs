use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftgrid
#[derive(Parser)]
#[command(
    name = "shiftgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Monthly shift schedule: build per-line employee/day grids from task-tracker records and apply manual overrides",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (members.json, catalog.json, tasks*.json)
    #[arg(global = true, long = "data", value_name = "DIR")]
    pub data: Option<String>,

    /// Override the overrides file (YAML/JSON list of manual patches)
    #[arg(global = true, long = "overrides", value_name = "FILE")]
    pub overrides: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Verbose diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with defaults
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the schedule grid of a month
    Show {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        /// Only this line (L1 or L2)
        #[arg(long, short)]
        line: Option<String>,

        /// Manual override, e.g. "L1|2024|3|7|15=09:00-18:00@2500" (repeatable)
        #[arg(long = "set", value_name = "KEY=RANGE@AMOUNT")]
        set: Vec<String>,
    },

    /// Export the schedule grid of one line
    Export {
        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, short, default_value = "L1")]
        line: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "set", value_name = "KEY=RANGE@AMOUNT")]
        set: Vec<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List employees per line
    Roster {
        /// L1, L2 or extra (all when omitted)
        #[arg(long, short)]
        line: Option<String>,

        /// Classify by department/position keywords instead of department rules
        #[arg(long)]
        keywords: bool,
    },

    /// List shift templates per line
    Templates {
        #[arg(long, short)]
        line: Option<String>,
    },

    /// Convert a UTC due instant and a duration into the local shift range
    Convert {
        /// Due instant, e.g. 2024-03-14T22:00:00Z
        #[arg(long)]
        due: String,

        /// Shift length in minutes
        #[arg(long, default_value_t = 0)]
        duration: i64,
    },
}
