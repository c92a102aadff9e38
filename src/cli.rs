use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blitzboard",
    version,
    about = "Wiki cleanup competition leaderboard CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the leaderboard for one contest
    Board(BoardCommand),
    /// List the scored edits, most recent first
    Edits(EditsCommand),
    /// Show the parsed Focused Flow sessions
    Sessions(SessionsCommand),
    /// Print the contest calendar
    Contests(ContestsCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ContestChoice {
    Week1,
    Week2,
    Overall,
}

impl ContestChoice {
    pub fn label(&self) -> &'static str {
        match self {
            ContestChoice::Week1 => crate::calendar::WEEK_1,
            ContestChoice::Week2 => crate::calendar::WEEK_2,
            ContestChoice::Overall => crate::calendar::OVERALL,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Table,
}

/// Shared feed and calendar selection.
#[derive(Args)]
pub struct FeedArgs {
    /// Competition config file (default: ./competition.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON export of page-version history
    #[arg(long, conflicts_with = "sample")]
    pub edits: Option<PathBuf>,

    /// CSV export of the Focused Flow signup sheet
    #[arg(long, conflicts_with = "sample")]
    pub sessions: Option<PathBuf>,

    /// Use the built-in demo feeds instead of exports
    #[arg(long)]
    pub sample: bool,

    /// Reference instant for the rolling calendar (RFC 3339; default now)
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(Args)]
pub struct BoardCommand {
    #[command(flatten)]
    pub feeds: FeedArgs,

    #[arg(short, long, value_enum, default_value = "overall")]
    pub contest: ContestChoice,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// How many rows to show; 0 shows the full ranking
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Args)]
pub struct EditsCommand {
    #[command(flatten)]
    pub feeds: FeedArgs,

    #[arg(short, long, value_enum, default_value = "overall")]
    pub contest: ContestChoice,
}

#[derive(Args)]
pub struct SessionsCommand {
    #[command(flatten)]
    pub feeds: FeedArgs,
}

#[derive(Args)]
pub struct ContestsCommand {
    /// Competition config file (default: ./competition.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference instant for the rolling calendar (RFC 3339; default now)
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,
}
