//! CLI module for Pet Battler
//!
//! Provides subcommands for working with the reference data:
//! - `load`: bulk-load the pet and ability tables and report counts
//! - `search`: embedding similarity search over pets or abilities
//! - `counters`: type-effectiveness queries against a target type

pub mod counters;
pub mod load;
pub mod search;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::store::{AbilityRow, BulkLoadReport, PetRow};
use crate::infrastructure::logging::{init_logging, LoggingConfig};
use crate::AppState;

/// Pet Battler - battle pet reference data and effectiveness queries
#[derive(Parser)]
#[command(name = "pet-battler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bulk-load the reference tables and report loaded/skipped counts
    Load,

    /// Find the entities most similar to a free-text query
    Search(search::SearchArgs),

    /// List counters, defenders and double-tappers for a pet type
    Counters(counters::CountersArgs),
}

/// Common startup: env, config, logging, application state
pub(crate) async fn bootstrap() -> anyhow::Result<(AppConfig, AppState)> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();

    init_logging(&LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let state = crate::create_app_state_with_config(&config).await?;
    Ok((config, state))
}

/// Load both reference tables from the configured JSON files
pub(crate) async fn load_reference_data(
    config: &AppConfig,
    state: &AppState,
) -> anyhow::Result<(BulkLoadReport, BulkLoadReport)> {
    let pet_rows: Vec<PetRow> = read_rows(&config.data.pets_file)?;
    let ability_rows: Vec<AbilityRow> = read_rows(&config.data.abilities_file)?;

    let pets = state.store.bulk_load_pets(pet_rows).await?;
    let abilities = state.store.bulk_load_abilities(ability_rows).await?;

    info!(
        pets_loaded = pets.loaded,
        pets_skipped = pets.skipped,
        abilities_loaded = abilities.loaded,
        abilities_skipped = abilities.skipped,
        "Reference data loaded"
    );

    Ok((pets, abilities))
}

fn read_rows<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<Vec<T>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path.display(), e))?;

    let rows = serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;

    Ok(rows)
}
