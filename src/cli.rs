use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Club recommendations from your own shot history.
#[derive(Parser)]
#[command(
    name = "caddie",
    version,
    about = "Club recommendations from your own shot history"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Recommend a club for a shot.
    Recommend(RecommendArgs),
    /// Write the 2D decision-space view of a shot as JSON.
    Visualize(VisualizeArgs),
    /// Show per-club distance statistics.
    Clubs(ClubsArgs),
}

/// Where the shot log and settings come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to TOML configuration file. Defaults are used when the file is
    /// absent.
    #[arg(short, long, default_value = "caddie.toml")]
    pub config: PathBuf,

    /// Override the shot-log CSV path from config.
    #[arg(short, long)]
    pub shots: Option<PathBuf>,

    /// Override whose shots to analyse.
    #[arg(short, long)]
    pub user: Option<String>,
}

/// The shot being asked about.
#[derive(Args)]
pub struct QueryArgs {
    /// Distance to the target in yards.
    pub distance: String,

    /// Lie: Fairway, Rough, Sand or "Tee Box".
    #[arg(short, long, default_value = "Fairway")]
    pub lie: String,

    /// Hole bend: Straight, "Dogleg Left" or "Dogleg Right".
    #[arg(short, long, default_value = "Straight")]
    pub bend: String,

    /// Intended shot shape: Straight, Fade, Draw, Slice or Hook.
    #[arg(long)]
    pub shape: Option<String>,
}

/// Neighbor-model overrides shared by `recommend` and `visualize`.
#[derive(Args, Default)]
pub struct ModelArgs {
    /// Override the smallest neighborhood size from config (3..=10).
    #[arg(long)]
    pub k_min: Option<usize>,

    /// Override the largest neighborhood size from config (3..=10).
    #[arg(long)]
    pub k_max: Option<usize>,
}

/// Arguments for the `recommend` subcommand.
#[derive(Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Print the recommendation as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `visualize` subcommand.
#[derive(Args)]
pub struct VisualizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Path for the JSON payload; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `clubs` subcommand.
#[derive(Args)]
pub struct ClubsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the statistics as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
