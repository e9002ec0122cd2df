//! Load command - bulk-loads the reference tables

/// Load both tables and print the per-table outcome
pub async fn run() -> anyhow::Result<()> {
    let (config, state) = super::bootstrap().await?;

    let (pets, abilities) = super::load_reference_data(&config, &state).await?;

    println!(
        "Pets: {} loaded, {} skipped",
        pets.loaded, pets.skipped
    );
    println!(
        "Abilities: {} loaded, {} skipped",
        abilities.loaded, abilities.skipped
    );

    Ok(())
}
