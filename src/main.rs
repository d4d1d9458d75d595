use clap::Parser;
use crm_prioritizer::errors::ErrorHandler;
use crm_prioritizer::structs::cli::Cli;
use crm_prioritizer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
