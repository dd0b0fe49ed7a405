//! Pantry - Entry Point

use clap::Parser;
use pantry::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
