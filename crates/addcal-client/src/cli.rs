//! Command-line interface definition.

use std::path::PathBuf;

use addcal_core::{DurationValue, EventData, LogFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// addcal - "Add to calendar" links and buttons
#[derive(Debug, Parser)]
#[command(name = "addcal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "ADDCAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormatArg::Compact, global = true)]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

/// Log format selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Event fields, from a file and/or individual flags.
///
/// Flags override values read from the file.
#[derive(Debug, Clone, Default, Args)]
pub struct EventArgs {
    /// Read the event from a TOML or JSON file
    #[arg(long, short = 'e')]
    pub event: Option<PathBuf>,

    /// Event title
    #[arg(long)]
    pub summary: Option<String>,

    /// Event description
    #[arg(long)]
    pub description: Option<String>,

    /// Event location
    #[arg(long)]
    pub location: Option<String>,

    /// Start date-time (e.g. 2015-01-01T10:00:00)
    #[arg(long)]
    pub start: Option<String>,

    /// End date-time; takes precedence over --duration
    #[arg(long)]
    pub end: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    pub duration: Option<String>,

    /// Organizer name
    #[arg(long)]
    pub organizer: Option<String>,

    /// Organizer email
    #[arg(long)]
    pub organizer_email: Option<String>,
}

impl EventArgs {
    /// Returns the fields given as flags.
    pub fn overrides(&self) -> EventData {
        EventData {
            summary: self.summary.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            duration: self.duration.clone().map(DurationValue::Text),
            organizer: self.organizer.clone(),
            organizer_email: self.organizer_email.clone(),
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the link for one provider (google, yahoo, ical, outlook, live)
    Link {
        /// Provider name
        provider: String,

        #[command(flatten)]
        event: EventArgs,

        /// ICS generator endpoint for ical/outlook links
        #[arg(long)]
        generator_url: Option<String>,

        /// Percent-encode field values
        #[arg(long)]
        url_encode: bool,
    },

    /// Print HTML buttons for several providers
    Buttons {
        /// Provider names; defaults to the configured list
        providers: Vec<String>,

        #[command(flatten)]
        event: EventArgs,

        /// Use inline styles instead of CSS classes
        #[arg(long)]
        inline_style: bool,

        /// ICS generator endpoint for ical/outlook/other buttons
        #[arg(long)]
        generator_url: Option<String>,

        /// Percent-encode field values
        #[arg(long)]
        url_encode: bool,

        /// Prefix the markup with a <style> block
        #[arg(long)]
        with_style: bool,
    },

    /// Print the button stylesheet
    Style,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
