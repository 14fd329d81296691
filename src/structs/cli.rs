use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "habit-dashboard")]
#[clap(about = "Habit analytics dashboard", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ~/habit-dashboard/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
