use clap::{ArgAction, Parser, Subcommand};

/// Fetch match data from a World Cup API origin and read cookie strings
#[derive(Parser, Debug)]
#[command(name = "wc", version, about, long_about = None)]
pub struct Cli {
    /// Origin the API paths are resolved against [default: $WC_ORIGIN]
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Request timeout in seconds [default: $WC_TIMEOUT_SECS, else none]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Cookie string, in `document.cookie` form [default: $WC_COOKIE]
    #[arg(long, global = true)]
    pub cookie: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the matches of a group stage
    Group {
        group: String,
    },

    /// Load several group stages concurrently
    Groups {
        #[arg(required = true)]
        groups: Vec<String>,
    },

    /// Load the countries drawn into a group
    CountryGroup {
        group: String,
    },

    /// Show the API version
    Version,

    /// Look up a cookie by name
    Cookie {
        name: String,

        /// Compare raw keys without trimming whitespace
        #[arg(long)]
        untrimmed: bool,
    },
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
