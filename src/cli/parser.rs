use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fichajes
/// CLI client for the fichajesPi employee time-clock server
#[derive(Parser)]
#[command(
    name = "fichajes",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time-clock CLI: clock in/out and manage employees, clock events and weekly schedules over the fichajesPi REST API",
    long_about = None
)]
pub struct Cli {
    /// Override the configured backend base URL (useful for tests or a second server)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Override the configured bearer token
    #[arg(global = true, long = "token")]
    pub token: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file (use --api-url to set the backend)
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Fill missing configuration fields with defaults")]
        migrate: bool,

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

    /// Show your own employee record and whether you are clocked in
    Status,

    /// Clock in or out; a work-duration estimate precedes every clock-in
    Clock {
        /// Estimated hours for this work period (1.0 to 12.0, steps of 0.25);
        /// only used when clocking in. Default comes from the config file.
        #[arg(long = "hours", value_name = "HOURS")]
        hours: Option<f64>,
    },

    /// Employee records and password management
    Employee {
        #[command(subcommand)]
        command: EmployeeCmd,
    },

    /// Clock events: detail, edit, listings and export
    Event {
        #[command(subcommand)]
        command: EventCmd,
    },

    /// Weekly schedules (numbered shifts per employee and weekday)
    Schedule {
        #[command(subcommand)]
        command: ScheduleCmd,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCmd {
    /// Show an employee record (your own when no id is given)
    Show {
        id: Option<i64>,
    },

    /// Update fields of an employee record
    Update {
        id: i64,

        #[arg(long = "number")]
        number: Option<String>,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        #[arg(long = "dni")]
        dni: Option<String>,

        /// Set the on-vacation flag (true/false)
        #[arg(long = "vacations", value_name = "BOOL")]
        vacations: Option<bool>,

        /// Set the on-leave flag (true/false)
        #[arg(long = "on-leave", value_name = "BOOL")]
        on_leave: Option<bool>,
    },

    /// Delete an employee record (irreversible)
    Del {
        id: i64,

        #[arg(long = "yes", help = "Confirm the deletion")]
        yes: bool,
    },

    /// List employees (paged)
    List {
        #[arg(long, default_value_t = 0)]
        page: u64,

        #[arg(long, default_value_t = 20)]
        size: u64,

        #[arg(long, default_value = "id", help = "Sort field")]
        order: String,

        #[arg(long = "desc", help = "Sort descending instead of ascending")]
        desc: bool,

        #[arg(long = "number", help = "Filter by employee number")]
        number: Option<String>,

        #[arg(long = "name", help = "Filter by employee name")]
        name: Option<String>,

        #[arg(long = "email", help = "Filter by email")]
        email: Option<String>,

        #[arg(long = "working", value_name = "BOOL", help = "Filter by working state")]
        working: Option<bool>,

        #[arg(long = "all", help = "Fetch the full filtered list, ignoring paging")]
        all: bool,
    },

    /// Look up an employee id by number (public endpoint)
    Find {
        number: String,
    },

    /// Change your own password
    Passwd {
        id: i64,

        #[arg(long = "old")]
        old: String,

        #[arg(long = "new")]
        new: String,
    },

    /// Admin: reset a password and send it by email
    ResetPassword {
        id: i64,
    },

    /// Admin: set a password manually
    SetPassword {
        id: i64,
        password: String,
    },
}

#[derive(Subcommand)]
pub enum EventCmd {
    /// Show one clock event with its local-time projection
    Show {
        id: i64,
    },

    /// Edit a clock event; date and time are entered in the display zone
    Edit {
        id: i64,

        /// Local date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long = "date")]
        date: Option<String>,

        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long = "time")]
        time: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long = "origin")]
        origin: Option<String>,
    },

    /// Delete a clock event (irreversible)
    Del {
        id: i64,

        #[arg(long = "yes", help = "Confirm the deletion")]
        yes: bool,
    },

    /// List clock events (paged)
    List {
        #[arg(long, default_value_t = 0)]
        page: u64,

        #[arg(long, default_value_t = 20)]
        size: u64,

        #[arg(long, default_value = "id", help = "Sort field")]
        order: String,

        #[arg(long = "desc", help = "Sort descending instead of ascending")]
        desc: bool,

        #[arg(long = "number", help = "Filter by employee number")]
        number: Option<String>,

        #[arg(long = "type", help = "Filter by event type")]
        kind: Option<String>,

        /// First UTC day to include (YYYY-MM-DD)
        #[arg(long = "from")]
        from: Option<String>,

        /// Last UTC day to include (YYYY-MM-DD)
        #[arg(long = "to")]
        to: Option<String>,
    },

    /// Export the filtered event list to a local file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long = "number", help = "Filter by employee number")]
        number: Option<String>,

        #[arg(long = "type", help = "Filter by event type")]
        kind: Option<String>,

        #[arg(long = "from", help = "First UTC day to include (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Last UTC day to include (YYYY-MM-DD)")]
        to: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ScheduleCmd {
    /// Show the stored shifts of an employee (optionally one weekday)
    Show {
        employee: i64,

        /// Weekday 1-7 (1 = Monday)
        #[arg(long = "day")]
        day: Option<String>,
    },

    /// Replace the shift list of one employee/weekday
    Set {
        employee: i64,

        /// Weekday 1-7 (1 = Monday)
        day: String,

        /// Shift spec HH:MM-HH:MM[:description]; repeat for several shifts.
        /// Shift numbers are assigned in the order given.
        #[arg(long = "shift", value_name = "SPEC", required = true)]
        shifts: Vec<String>,

        /// IANA timezone tag stored with the shifts (default: configured zone)
        #[arg(long = "timezone")]
        timezone: Option<String>,
    },

    /// Delete one stored schedule row by its id
    Del {
        id: i64,
    },

    /// List every active schedule row (admin overview)
    List,

    /// List employees that have shifts on a weekday
    Who {
        /// Weekday 1-7 (1 = Monday)
        day: String,
    },

    /// Print the weekday numbering used by the backend
    Days,

    /// Print the offered timezone catalog
    Zones,
}
