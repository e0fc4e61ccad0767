use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod locator;
mod query;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("orthomcl_jumper=debug,info")
    } else {
        EnvFilter::new("orthomcl_jumper=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::jump::run(cli.jump, cli.format, cli.verbose)
}
