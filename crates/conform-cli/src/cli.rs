use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "conform",
    about = "Structural equality checks for JSON and TOML documents",
    version,
)]
pub struct Cli {
    /// Document holding the expected value
    pub expected: PathBuf,
    /// Document holding the actual value
    pub actual: PathBuf,

    /// Sort collections by value before comparing
    #[arg(long)]
    pub canonicalize: bool,
    /// Compare strings case-insensitively
    #[arg(long)]
    pub ignore_case: bool,
    /// Allowed distance between two numbers
    #[arg(long)]
    pub delta: Option<f64>,
    /// Maximum nesting depth to walk
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// TOML file with comparison settings (flags override it)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
