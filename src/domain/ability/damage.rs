//! Heuristic damage classification over unstructured ability text

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches phrases like "25 Beast damage" for any of the ten type names.
static TYPED_DAMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d+\s+(aquatic|beast|critter|dragonkin|elemental|flying|humanoid|magic|mechanical|undead)\s+damage\b",
    )
    .expect("typed damage pattern is valid")
});

/// Whether an ability deals damage.
///
/// True when the structured damage field is a nonzero literal, or when the
/// free-text description mentions an amount of typed damage. Kept separate
/// from the engine so the matching rule can evolve independently.
pub fn is_damage_ability(damage: &str, description: &str) -> bool {
    let damage = damage.trim();

    if !damage.is_empty() && damage != "0" {
        return true;
    }

    TYPED_DAMAGE_PATTERN.is_match(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_damage_field() {
        assert!(is_damage_ability("50", ""));
        assert!(is_damage_ability(" 12 ", "no mention of anything"));
    }

    #[test]
    fn test_zero_damage_with_typed_description() {
        assert!(is_damage_ability("0", "Deals 25 Beast damage to the enemy."));
    }

    #[test]
    fn test_zero_damage_without_damage_phrase() {
        assert!(!is_damage_ability("0", "no combat effect"));
        assert!(!is_damage_ability("", "Restores 10 health each round."));
    }

    #[test]
    fn test_description_match_is_case_insensitive() {
        assert!(is_damage_ability("0", "deals 40 UNDEAD DAMAGE over 2 rounds"));
        assert!(is_damage_ability("0", "Deals 8 mechanical damage."));
    }

    #[test]
    fn test_all_ten_type_names_match() {
        for name in [
            "Aquatic",
            "Beast",
            "Critter",
            "Dragonkin",
            "Elemental",
            "Flying",
            "Humanoid",
            "Magic",
            "Mechanical",
            "Undead",
        ] {
            let description = format!("Deals 15 {} damage.", name);
            assert!(is_damage_ability("0", &description), "{}", name);
        }
    }

    #[test]
    fn test_phrase_shape_is_required() {
        // Amount and type name must appear in the exact phrase shape.
        assert!(!is_damage_ability("0", "Beast damage is doubled"));
        assert!(!is_damage_ability("0", "deals 25 damage"));
    }
}
