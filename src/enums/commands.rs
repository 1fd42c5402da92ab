use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulated trust scan against a repository target
    Scan {
        /// Repository target: owner/repo or a full repository URL
        target: String,
        /// Fixed seed for a reproducible scan
        #[clap(short, long)]
        seed: Option<u64>,
        /// Print the report as JSON instead of the formatted view
        #[clap(long)]
        json: bool,
    },
    /// Interactive mode: set a target, scan, inspect results
    Interactive,
    /// List the example targets
    Examples,
}
