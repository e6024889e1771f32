use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "greenaudit",
    version,
    about = "ESG disclosure audit: policy talk versus financial walk"
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
    /// Score every report in a directory
    Audit(AuditCommand),
    /// Show the forensic evidence for one company
    Show(ShowCommand),
    /// Interactive session over a directory's results
    Explore(ExploreCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Permissive,
    Strict,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ScanArgs {
    /// Pages read from the start of each document
    #[arg(long)]
    pub max_pages: Option<usize>,
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(Args)]
pub struct AuditCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Exit with code 2 when any company's risk reaches this score
    #[arg(long)]
    pub fail_above: Option<f64>,
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Args)]
pub struct ShowCommand {
    pub path: PathBuf,
    pub company: String,
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Args)]
pub struct ExploreCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Csv,
    Scatter,
}
