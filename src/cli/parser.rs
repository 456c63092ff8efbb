use crate::export::ExportFormat;
use crate::models::Item;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for qrattend
/// CLI application to register QR-code attendance with SQLite
#[derive(Parser)]
#[command(
    name = "qrattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "A QR attendance register: scan a code, pick the handed-out item, keep the list in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the available capture devices
    Cameras,

    /// Scan a code and record attendance
    Scan {
        /// Code to record directly, without reading from the scanner
        code: Option<String>,

        #[arg(long = "device", help = "Capture device id (see `cameras`)")]
        device: Option<String>,

        #[arg(
            long = "file",
            value_name = "FILE",
            conflicts_with = "code",
            help = "Decode a saved scan instead of reading the scanner"
        )]
        file: Option<String>,

        #[arg(long = "item", value_enum, help = "Item handed out (asked interactively if omitted)")]
        item: Option<Item>,

        #[arg(
            long = "continuous",
            conflicts_with_all = ["code", "file"],
            help = "Keep scanning until the input ends"
        )]
        continuous: bool,
    },

    /// List attendance records, newest first
    List {
        #[arg(long, short, help = "Case-insensitive substring of the QR code")]
        search: Option<String>,

        #[arg(
            long,
            short,
            conflicts_with_all = ["from", "to"],
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
        )]
        period: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "First day included")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Last day included")]
        to: Option<String>,
    },

    /// Show the dashboard counters
    Stats,

    /// Change the item flags of a record
    Edit {
        id: i64,

        #[arg(long, value_name = "BOOL", help = "Egg handed out (true/false)")]
        egg: Option<bool>,

        #[arg(long, value_name = "BOOL", help = "Banana handed out (true/false)")]
        banana: Option<bool>,
    },

    /// Delete a record by ID
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every record
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the register
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: Attendance_Report_<today>.<ext>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Write the register to a JSON backup file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Replace the register with the content of a backup file
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
