use anyhow::Result;
use clap::Parser;
use sun_graph::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with RUST_LOG=debug).
    let cli = Cli::parse();
    sun_graph::run(cli).await
}
