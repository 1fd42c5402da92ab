use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "repovet")]
#[clap(about = "Simulated repository trust assessment", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
