//! Static type-effectiveness chart

use std::collections::{HashMap, HashSet};

use crate::domain::pet_type::PetType;

/// Strong/weak relation entry for a single pet type
#[derive(Debug, Clone)]
pub struct Matchup {
    strong_against: HashSet<PetType>,
    weak_against: HashSet<PetType>,
}

impl Matchup {
    fn new(strong: &[PetType], weak: &[PetType]) -> Self {
        Self {
            strong_against: strong.iter().copied().collect(),
            weak_against: weak.iter().copied().collect(),
        }
    }
}

/// Read-only strong/weak relation table among the ten pet types.
///
/// Loaded once at startup and never mutated. Querying a type with no entry
/// yields empty sets rather than an error.
#[derive(Debug, Clone)]
pub struct TypeChart {
    matrix: HashMap<PetType, Matchup>,
}

impl TypeChart {
    /// The reference chart: one strong and one weak relation per type,
    /// forming a single directed cycle over all ten types.
    pub fn standard() -> Self {
        use PetType::*;

        let mut matrix = HashMap::new();
        matrix.insert(Aquatic, Matchup::new(&[Elemental], &[Magic]));
        matrix.insert(Beast, Matchup::new(&[Critter], &[Flying]));
        matrix.insert(Critter, Matchup::new(&[Undead], &[Humanoid]));
        matrix.insert(Dragonkin, Matchup::new(&[Magic], &[Undead]));
        matrix.insert(Elemental, Matchup::new(&[Mechanical], &[Critter]));
        matrix.insert(Flying, Matchup::new(&[Aquatic], &[Dragonkin]));
        matrix.insert(Humanoid, Matchup::new(&[Dragonkin], &[Beast]));
        matrix.insert(Magic, Matchup::new(&[Flying], &[Mechanical]));
        matrix.insert(Mechanical, Matchup::new(&[Beast], &[Elemental]));
        matrix.insert(Undead, Matchup::new(&[Humanoid], &[Aquatic]));

        Self { matrix }
    }

    /// Types the given type attacks effectively
    pub fn strong_against(&self, pet_type: PetType) -> HashSet<PetType> {
        self.matrix
            .get(&pet_type)
            .map(|m| m.strong_against.clone())
            .unwrap_or_default()
    }

    /// Types registered under the given type's weak relation
    pub fn weak_against(&self, pet_type: PetType) -> HashSet<PetType> {
        self.matrix
            .get(&pet_type)
            .map(|m| m.weak_against.clone())
            .unwrap_or_default()
    }

    /// Inverse lookup: every type whose strong relation contains `target`.
    ///
    /// Computed by scanning the full table; the chart keeps no inverse index.
    pub fn types_strong_against(&self, target: PetType) -> HashSet<PetType> {
        self.matrix
            .iter()
            .filter(|(_, matchup)| matchup.strong_against.contains(&target))
            .map(|(pet_type, _)| *pet_type)
            .collect()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_one_strong_and_one_weak_relation() {
        let chart = TypeChart::standard();

        for pet_type in PetType::ALL {
            assert_eq!(chart.strong_against(pet_type).len(), 1, "{}", pet_type);
            assert_eq!(chart.weak_against(pet_type).len(), 1, "{}", pet_type);
        }
    }

    #[test]
    fn test_strong_relations_form_a_single_ten_cycle() {
        let chart = TypeChart::standard();

        let mut current = PetType::Aquatic;
        let mut visited = std::collections::HashSet::new();

        for _ in 0..10 {
            assert!(visited.insert(current), "revisited {} early", current);
            current = *chart
                .strong_against(current)
                .iter()
                .next()
                .expect("every type has a strong relation");
        }

        // After ten hops the cycle closes back on the starting type.
        assert_eq!(current, PetType::Aquatic);
        assert_eq!(visited.len(), 10);
    }

    #[test]
    fn test_inverse_lookup_matches_forward_relations() {
        let chart = TypeChart::standard();

        for target in PetType::ALL {
            let inverse = chart.types_strong_against(target);

            for pet_type in PetType::ALL {
                let forward = chart.strong_against(pet_type).contains(&target);
                assert_eq!(forward, inverse.contains(&pet_type));
            }
        }
    }

    #[test]
    fn test_types_strong_against_elemental_is_aquatic() {
        let chart = TypeChart::standard();

        let strong = chart.types_strong_against(PetType::Elemental);
        assert_eq!(strong, [PetType::Aquatic].into_iter().collect());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let chart = TypeChart::standard();

        let first = chart.types_strong_against(PetType::Undead);
        let second = chart.types_strong_against(PetType::Undead);
        assert_eq!(first, second);
    }
}
