use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Load and validate the configuration
    Validate,
    /// Fetch analytics once and print the chart datasets
    Show {
        #[clap(short, long)]
        category: Option<String>,
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Fetch only the activity heatmap
    Heatmap {
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Refresh periodically until interrupted
    Watch {
        #[clap(short, long)]
        interval: Option<u64>,
        #[clap(short, long)]
        category: Option<String>,
    },
}
