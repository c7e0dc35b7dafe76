use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bsift",
    about = "Heuristic origin screening for organic compounds",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Screen detected compounds for biotic signatures
    #[command(visible_alias = "s")]
    Screen(ScreenArgs),

    /// Simulate impact-driven organic synthesis
    #[command(visible_alias = "i")]
    Impact(ImpactArgs),
}

/// Options shared by all commands.
#[derive(Args)]
pub struct CommonOptions {
    /// Report file (TOML; stdout if omitted and redirected)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Custom heuristic parameters (TOML file)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Suppress banner and summary tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ScreenArgs {
    /// Compound list (TOML; stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub io: CommonOptions,
}

#[derive(Args)]
pub struct ImpactArgs {
    #[command(flatten)]
    pub event: EventOptions,

    #[command(flatten)]
    pub io: CommonOptions,
}

/// Physical description of the impact to simulate.
#[derive(Args)]
#[command(next_help_heading = "Impact Event")]
pub struct EventOptions {
    /// Impact velocity (km/s)
    #[arg(long, value_name = "KM_S", allow_hyphen_values = true)]
    pub velocity: f64,

    /// Impact angle in degrees from vertical
    #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
    pub angle: f64,

    /// Target composition label, substring-matched for "carbonaceous"
    #[arg(long, value_name = "TEXT")]
    pub composition: String,
}

pub fn parse() -> Cli {
    Cli::parse()
}
