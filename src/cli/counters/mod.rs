//! Counters command - type-effectiveness queries

use clap::Args;

use crate::domain::pet_type::PetType;

#[derive(Debug, Args)]
pub struct CountersArgs {
    /// Target pet type, e.g. "Undead"
    pub pet_type: String,
}

/// Print the pets strong against, defensive against and double-tapping
/// the given type
pub async fn run(args: CountersArgs) -> anyhow::Result<()> {
    let (config, state) = super::bootstrap().await?;

    super::load_reference_data(&config, &state).await?;

    let target: PetType = args.pet_type.parse()?;

    let strong = state.engine.list_pets_strong_against(target).await?;
    println!("Strong against {} ({}):", target, strong.len());
    for pet in &strong {
        println!("  {} (ID: {})", pet.name, pet.id);
    }

    let defensive = state.engine.list_pets_defensive_against(target).await?;
    println!("Defensive against {} ({}):", target, defensive.len());
    for pet in &defensive {
        println!("  {} (ID: {})", pet.name, pet.id);
    }

    let tappers = state.engine.double_tappers(target).await?;
    println!("Double-tappers ({}):", tappers.len());
    for pet in &tappers {
        println!("  {} (ID: {})", pet.name, pet.id);
    }

    Ok(())
}
