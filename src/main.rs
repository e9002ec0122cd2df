use clap::Parser;
use pet_battler::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Load => cli::load::run().await,
        Command::Search(args) => cli::search::run(args).await,
        Command::Counters(args) => cli::counters::run(args).await,
    }
}
