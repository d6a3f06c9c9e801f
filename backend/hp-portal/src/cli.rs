use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hp-portal")]
#[command(about = "Healthcare portal session and routing console")]
#[command(version)]
pub struct Cli {
    /// Configuration directory (default: HP_CONFIG_DIR, else ./.hp)
    #[arg(long)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Log level override (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub(crate) log_level: Option<String>,
}
