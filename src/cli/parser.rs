use crate::export::ExportFormat;
use crate::models::{Coords, WorkoutKind};
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for mapty
#[derive(Parser)]
#[command(
    name = "mapty",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pin running and cycling workouts on a map and keep them in a local store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Current position reported by the location service (LAT,LNG).
    /// Overrides `home_position` from the configuration file.
    #[arg(
        global = true,
        long = "position",
        value_name = "LAT,LNG",
        allow_hyphen_values = true,
        value_parser = parse_coords
    )]
    pub position: Option<Coords>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_coords(s: &str) -> Result<Coords, String> {
    s.parse::<Coords>().map_err(|e| e.to_string())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Record a workout: click the map, then submit the form
    Add {
        /// Workout type
        #[arg(value_enum)]
        kind: WorkoutKind,

        /// Distance in km
        #[arg(long, allow_hyphen_values = true)]
        distance: String,

        /// Duration in minutes
        #[arg(long, allow_hyphen_values = true)]
        duration: String,

        /// Cadence in steps/min (running)
        #[arg(long, allow_hyphen_values = true)]
        cadence: Option<String>,

        /// Elevation gain in meters (cycling)
        #[arg(long, allow_hyphen_values = true)]
        elevation: Option<String>,

        /// Latitude of the map click (default: current position)
        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,

        /// Longitude of the map click (default: current position)
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,
    },

    /// List recorded workouts, newest first
    List,

    /// Select a workout: move the map to it and count the interaction
    Select {
        /// Workout id, as shown by `list`
        id: String,
    },

    /// Show the map view and every workout marker
    Map,

    /// Interactive session: read map clicks, form submissions and
    /// selections from standard input
    Session,

    /// Delete every workout (no confirmation)
    Reset,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export workouts to a file
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "json")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
