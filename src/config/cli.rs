use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "responsible-resolver")]
#[command(about = "Resolve the responsible manager for an incoming order")]
pub struct CliConfig {
    /// Mapping document (.json or .toml)
    #[arg(long)]
    pub mapping: String,

    /// Order record as a JSON file
    #[arg(long)]
    pub order: String,

    /// Emit logs as one JSON object per line (service deployments)
    #[arg(long)]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
