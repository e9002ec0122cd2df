//! Search command - embedding similarity search

use clap::{Args, ValueEnum};

/// Which collection to search
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchKind {
    Pets,
    Abilities,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Collection to search
    #[arg(long, value_enum, default_value = "pets")]
    pub kind: SearchKind,

    /// Number of results; defaults to the configured top_k
    #[arg(long)]
    pub top_k: Option<usize>,
}

/// Load the data, build the index for the requested collection, search
pub async fn run(args: SearchArgs) -> anyhow::Result<()> {
    let (config, state) = super::bootstrap().await?;

    super::load_reference_data(&config, &state).await?;

    let k = args.top_k.unwrap_or(config.search.top_k);

    match args.kind {
        SearchKind::Pets => {
            state.search.build_pets().await?;

            for hit in state.search.search_pets(&args.query, k).await? {
                println!("{:.4}  {}", hit.score, hit.item);
            }
        }
        SearchKind::Abilities => {
            state.search.build_abilities().await?;

            for hit in state.search.search_abilities(&args.query, k).await? {
                println!("{:.4}  {}", hit.score, hit.item);
            }
        }
    }

    Ok(())
}
