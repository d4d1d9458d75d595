use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::priority_level::PriorityLevel;
use crate::structs::signal_args::SignalArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Score answers without saving anything
    Score {
        #[clap(flatten)]
        signals: SignalArgs,
        /// Show the priority after each stage
        #[clap(long)]
        explain: bool,
        /// Print the breakdown as JSON
        #[clap(long)]
        json: bool,
    },
    /// Score a client and save the result
    Prioritize {
        #[clap(long)]
        client_id: String,
        #[clap(flatten)]
        signals: SignalArgs,
        /// Image to send to the content analysis service first
        #[clap(long)]
        image: Option<PathBuf>,
        /// Save this label instead of the computed one
        #[clap(long = "priority")]
        priority_override: Option<PriorityLevel>,
        /// Replace an existing prioritization for the client
        #[clap(long)]
        force: bool,
    },
    /// Show saved prioritizations
    List,
    /// Show the top clients by priority and open deals
    Rank {
        /// JSON array of clients
        #[clap(long)]
        clients: PathBuf,
        /// JSON array of deals
        #[clap(long)]
        deals: Option<PathBuf>,
        #[clap(short, long)]
        limit: Option<usize>,
    },
}
