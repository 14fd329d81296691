use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use habit_dashboard::config::config_manager::ConfigManager;
use habit_dashboard::enums::commands::Commands;
use habit_dashboard::errors::ErrorHandler;
use habit_dashboard::structs::cli::Cli;
use habit_dashboard::structs::config::config::Config;
use habit_dashboard::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `init` writes the file the other commands read.
    let initializing = matches!(cli.command, Commands::Init);
    let config = if initializing {
        Config::default()
    } else {
        ConfigManager::load(cli.config.as_deref()).context("loading configuration")?
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(config.output.log_level.as_str()))
        .format_timestamp(None)
        .init();
    if !initializing {
        ConfigManager::report_source(cli.config.as_deref(), &config);
    }

    let mut runner = CommandRunner::new(config, cli.config);
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
