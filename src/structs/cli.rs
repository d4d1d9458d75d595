use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "crm-prioritizer")]
#[clap(about = "Rule-based client prioritization for CRM dashboards", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/crm-prioritizer/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
