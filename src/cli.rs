use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Locus indoor self-localization from wireless signal strengths.
#[derive(Parser)]
#[command(
    name = "locus",
    version,
    about = "Indoor self-localization from wireless signal strengths"
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
    /// Build a dataset bundle from per-room scan dump files.
    Prepare(PrepareArgs),
    /// Evaluate classification accuracy on a dataset bundle.
    Evaluate(EvaluateArgs),
    /// Classify recorded scans against a dataset bundle.
    Classify(ClassifyArgs),
}

/// Arguments for the `prepare` subcommand.
#[derive(clap::Args)]
pub struct PrepareArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "locus.toml")]
    pub config: PathBuf,

    /// Override survey dump directory from config.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Override output bundle path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override train/test split seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "locus.toml")]
    pub config: PathBuf,

    /// Override dataset bundle path from config.
    #[arg(short, long)]
    pub bundle: Option<PathBuf>,

    /// Path for diagnostics JSON output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override neighborhood size from config.
    #[arg(short = 'k', long)]
    pub max_k: Option<usize>,
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "locus.toml")]
    pub config: PathBuf,

    /// Override dataset bundle path from config.
    #[arg(short, long)]
    pub bundle: Option<PathBuf>,

    /// Scan dump file to classify.
    #[arg(short, long)]
    pub scan: PathBuf,

    /// Override neighborhood size from config.
    #[arg(short = 'k', long)]
    pub max_k: Option<usize>,
}
