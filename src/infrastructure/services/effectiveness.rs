//! Type-effectiveness queries composed from the chart and the store

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ability::{is_damage_ability, Ability};
use crate::domain::battle_pet::BattlePet;
use crate::domain::pet_type::PetType;
use crate::domain::store::PetStore;
use crate::domain::type_chart::TypeChart;
use crate::domain::DomainError;

/// Stateless query engine over the type chart and the entity store.
///
/// Every operation is a fresh composition of independent reads; there is no
/// cross-call snapshot guarantee, which is fine for a data set that is
/// static after the initial bulk load.
#[derive(Debug)]
pub struct EffectivenessEngine {
    store: Arc<dyn PetStore>,
    chart: TypeChart,
}

impl EffectivenessEngine {
    pub fn new(store: Arc<dyn PetStore>, chart: TypeChart) -> Self {
        Self { store, chart }
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    /// Pets referencing at least one ability of the given type
    pub async fn find_pets_with_ability_type(
        &self,
        ability_type: PetType,
    ) -> Result<Vec<BattlePet>, DomainError> {
        let ability_ids: HashSet<i64> = self
            .store
            .list_abilities_by_type(ability_type)
            .await?
            .iter()
            .map(|a| a.id)
            .collect();

        self.pets_referencing(&ability_ids).await
    }

    /// Pets carrying a damaging ability of a type that counters `target_type`
    pub async fn list_pets_strong_against(
        &self,
        target_type: PetType,
    ) -> Result<Vec<BattlePet>, DomainError> {
        let counter_types = self.chart.types_strong_against(target_type);
        debug!(?target_type, ?counter_types, "Resolving offensive counters");

        let mut ability_ids = HashSet::new();

        for counter_type in counter_types {
            for ability in self.store.list_abilities_by_type(counter_type).await? {
                if is_damage_ability(&ability.damage, &ability.description) {
                    ability_ids.insert(ability.id);
                }
            }
        }

        self.pets_referencing(&ability_ids).await
    }

    /// Pets whose own type appears in the chart's weak relation for
    /// `attack_type`.
    ///
    /// The weak relation is read literally, with no inversion through the
    /// strong relation; see the defensive-lookup tests.
    pub async fn list_pets_defensive_against(
        &self,
        attack_type: PetType,
    ) -> Result<Vec<BattlePet>, DomainError> {
        let mut defender_types: Vec<PetType> =
            self.chart.weak_against(attack_type).into_iter().collect();
        defender_types.sort_by_key(|t| t.as_str());

        let mut pets = Vec::new();

        for defender_type in defender_types {
            pets.extend(self.store.list_pets_by_type(defender_type).await?);
        }

        Ok(pets)
    }

    /// Pets both offensively strong against and defensive against `pet_type`,
    /// intersected by pet identity with no duplicates
    pub async fn double_tappers(&self, pet_type: PetType) -> Result<Vec<BattlePet>, DomainError> {
        let strong = self.list_pets_strong_against(pet_type).await?;
        let defensive_ids: HashSet<i64> = self
            .list_pets_defensive_against(pet_type)
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        let mut seen = HashSet::new();
        let tappers = strong
            .into_iter()
            .filter(|pet| defensive_ids.contains(&pet.id) && seen.insert(pet.id))
            .collect();

        Ok(tappers)
    }

    /// Whether an ability's type counters the defender's type
    pub fn ability_is_effective_against(&self, ability: &Ability, defender_type: PetType) -> bool {
        self.chart
            .strong_against(ability.pet_type)
            .contains(&defender_type)
    }

    /// Whether any of the attacker's resolvable abilities counters the
    /// defender's type. Empty slots and dangling references drop out.
    pub async fn attacker_is_effective_against(
        &self,
        attacker: &BattlePet,
        defender: &BattlePet,
    ) -> Result<bool, DomainError> {
        let ability_ids: Vec<i64> = attacker.filled_ability_ids().collect();
        let abilities = self.store.get_abilities_by_ids(&ability_ids).await?;

        Ok(abilities
            .iter()
            .any(|ability| self.ability_is_effective_against(ability, defender.pet_type)))
    }

    async fn pets_referencing(
        &self,
        ability_ids: &HashSet<i64>,
    ) -> Result<Vec<BattlePet>, DomainError> {
        if ability_ids.is_empty() {
            return Ok(Vec::new());
        }

        let pets = self
            .store
            .list_pets()
            .await?
            .into_iter()
            .filter(|pet| pet.filled_ability_ids().any(|id| ability_ids.contains(&id)))
            .collect();

        Ok(pets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::battle_pet::BattlePetFields;
    use crate::domain::store::MockPetStore;

    fn pet(id: i64, pet_type: PetType, abilities: Vec<i64>) -> BattlePet {
        BattlePet::new(BattlePetFields {
            id,
            name: format!("Pet {}", id),
            level: 25,
            health: 1500,
            power: 300,
            speed: 280,
            breed: "P/P".to_string(),
            abilities,
            source: "Pet Battle".to_string(),
            pet_type,
            popularity: 5,
            is_untameable: false,
        })
    }

    fn damage_ability(id: i64, pet_type: PetType) -> Ability {
        Ability {
            id,
            name: format!("Strike {}", id),
            damage: "20".to_string(),
            healing: "0".to_string(),
            duration: "1".to_string(),
            cooldown: "0".to_string(),
            accuracy: "100".to_string(),
            pet_type,
            popularity: 5,
            description: format!("Deals 20 {} damage.", pet_type),
        }
    }

    fn utility_ability(id: i64, pet_type: PetType) -> Ability {
        Ability {
            id,
            name: format!("Shield {}", id),
            damage: "0".to_string(),
            healing: "0".to_string(),
            duration: "3".to_string(),
            cooldown: "5".to_string(),
            accuracy: "100".to_string(),
            pet_type,
            popularity: 5,
            description: "Blocks the next attack.".to_string(),
        }
    }

    fn engine(store: MockPetStore) -> EffectivenessEngine {
        EffectivenessEngine::new(Arc::new(store), TypeChart::standard())
    }

    #[tokio::test]
    async fn test_find_pets_with_ability_type() {
        let store = MockPetStore::new()
            .with_abilities(vec![
                damage_ability(100, PetType::Undead),
                damage_ability(200, PetType::Beast),
            ])
            .with_pets(vec![
                pet(1, PetType::Critter, vec![100]),
                pet(2, PetType::Beast, vec![200]),
                pet(3, PetType::Humanoid, vec![]),
            ]);

        let pets = engine(store)
            .find_pets_with_ability_type(PetType::Undead)
            .await
            .unwrap();

        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].id, 1);
    }

    #[tokio::test]
    async fn test_sentinel_slots_never_match() {
        // Pet 1 has only empty slots; an ability id of -1 must not resolve.
        let store = MockPetStore::new()
            .with_ability(damage_ability(100, PetType::Undead))
            .with_pet(pet(1, PetType::Critter, vec![]));

        let pets = engine(store)
            .find_pets_with_ability_type(PetType::Undead)
            .await
            .unwrap();

        assert!(pets.is_empty());
    }

    #[tokio::test]
    async fn test_strong_against_requires_damaging_ability() {
        // Undead counters Humanoid. Pet 1 carries a damaging Undead ability,
        // pet 2 only a utility Undead ability.
        let store = MockPetStore::new()
            .with_abilities(vec![
                damage_ability(100, PetType::Undead),
                utility_ability(101, PetType::Undead),
            ])
            .with_pets(vec![
                pet(1, PetType::Critter, vec![100]),
                pet(2, PetType::Critter, vec![101]),
            ]);

        let pets = engine(store)
            .list_pets_strong_against(PetType::Humanoid)
            .await
            .unwrap();

        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].id, 1);
    }

    #[tokio::test]
    async fn test_defensive_lookup_reads_weak_relation_literally() {
        // The chart lists Undead under weak_against(Dragonkin). The lookup
        // takes that set as-is; it does not invert strong_against, even
        // though the two readings of "weak" disagree. Changing this would
        // change which pets count as defensive.
        let store = MockPetStore::new().with_pets(vec![
            pet(1, PetType::Undead, vec![]),
            pet(2, PetType::Magic, vec![]),
        ]);

        let pets = engine(store)
            .list_pets_defensive_against(PetType::Dragonkin)
            .await
            .unwrap();

        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].pet_type, PetType::Undead);
    }

    #[tokio::test]
    async fn test_double_tappers_is_intersection_without_duplicates() {
        // Against Humanoid: offense needs a damaging Undead ability
        // (Undead counters Humanoid); defense needs the pet itself to be
        // Critter (the chart lists Critter under weak_against(Humanoid)).
        let store = MockPetStore::new()
            .with_ability(damage_ability(100, PetType::Undead))
            .with_pets(vec![
                pet(1, PetType::Critter, vec![100, 100]),
                pet(2, PetType::Critter, vec![]),
                pet(3, PetType::Beast, vec![100]),
            ]);

        let eng = engine(store);

        let tappers = eng.double_tappers(PetType::Humanoid).await.unwrap();
        assert_eq!(tappers.len(), 1);
        assert_eq!(tappers[0].id, 1);

        let strong: HashSet<i64> = eng
            .list_pets_strong_against(PetType::Humanoid)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        let defensive: HashSet<i64> = eng
            .list_pets_defensive_against(PetType::Humanoid)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();

        for tapper in &tappers {
            assert!(strong.contains(&tapper.id));
            assert!(defensive.contains(&tapper.id));
        }
    }

    #[tokio::test]
    async fn test_ability_effective_against_follows_chart() {
        let eng = engine(MockPetStore::new());
        let bite = damage_ability(1, PetType::Beast);

        // Beast counters Critter and nothing else.
        assert!(eng.ability_is_effective_against(&bite, PetType::Critter));
        assert!(!eng.ability_is_effective_against(&bite, PetType::Undead));
    }

    #[tokio::test]
    async fn test_attacker_effective_when_any_ability_counters() {
        let store = MockPetStore::new().with_abilities(vec![
            damage_ability(100, PetType::Beast),
            damage_ability(200, PetType::Magic),
        ]);
        let eng = engine(store);

        let attacker = pet(1, PetType::Beast, vec![100, 200]);
        let critter = pet(2, PetType::Critter, vec![]);
        let humanoid = pet(3, PetType::Humanoid, vec![]);

        // Beast ability counters Critter; nothing counters Humanoid.
        assert!(eng
            .attacker_is_effective_against(&attacker, &critter)
            .await
            .unwrap());
        assert!(!eng
            .attacker_is_effective_against(&attacker, &humanoid)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_attacker_with_dangling_references_is_not_effective() {
        // Ability 999 does not exist; unresolvable slots drop out.
        let eng = engine(MockPetStore::new());

        let attacker = pet(1, PetType::Beast, vec![999]);
        let defender = pet(2, PetType::Critter, vec![]);

        assert!(!eng
            .attacker_is_effective_against(&attacker, &defender)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let eng = engine(MockPetStore::new().with_error("store down"));

        let result = eng.find_pets_with_ability_type(PetType::Beast).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
