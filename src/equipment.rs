use crate::errors::{EquipmentError, EquipmentResult};
use serde::{Deserialize, Serialize};

/// Stat contributions from an equipped weapon
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeaponStats {
    pub damage: i32,
    pub accuracy: i32,
    pub speed: i32,
}

/// Stat contributions from an equipped clothing set
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClothingStats {
    pub defense: i32,
    pub health_bonus: i32,
    pub speed: i32,
}

// The bare-handed baseline contributes nothing; every combatant resolves
// to valid stats even before buying anything.
const WEAPON_CATALOG: &[(&str, WeaponStats)] = &[
    ("fists", WeaponStats { damage: 0, accuracy: 0, speed: 0 }),
    ("brass_knuckles", WeaponStats { damage: 3, accuracy: 2, speed: 1 }),
    ("switchblade", WeaponStats { damage: 5, accuracy: 5, speed: 3 }),
    ("baseball_bat", WeaponStats { damage: 8, accuracy: -2, speed: -2 }),
    ("pistol", WeaponStats { damage: 12, accuracy: 8, speed: 0 }),
    ("tommy_gun", WeaponStats { damage: 18, accuracy: -5, speed: -4 }),
];

const CLOTHING_CATALOG: &[(&str, ClothingStats)] = &[
    ("street_clothes", ClothingStats { defense: 0, health_bonus: 0, speed: 0 }),
    ("leather_jacket", ClothingStats { defense: 3, health_bonus: 5, speed: 0 }),
    ("tailored_suit", ClothingStats { defense: 5, health_bonus: 10, speed: 1 }),
    ("kevlar_vest", ClothingStats { defense: 10, health_bonus: 20, speed: -3 }),
    ("riot_armor", ClothingStats { defense: 15, health_bonus: 35, speed: -6 }),
];

/// Resolve a weapon id into its stat contributions.
pub fn resolve_weapon(id: &str) -> EquipmentResult<WeaponStats> {
    WEAPON_CATALOG
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, stats)| *stats)
        .ok_or_else(|| EquipmentError::UnknownId(id.to_string()))
}

/// Resolve a clothing id into its stat contributions.
pub fn resolve_clothing(id: &str) -> EquipmentResult<ClothingStats> {
    CLOTHING_CATALOG
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, stats)| *stats)
        .ok_or_else(|| EquipmentError::UnknownId(id.to_string()))
}

/// All known weapon ids, in catalog order.
pub fn weapon_ids() -> Vec<&'static str> {
    WEAPON_CATALOG.iter().map(|(name, _)| *name).collect()
}

/// All known clothing ids, in catalog order.
pub fn clothing_ids() -> Vec<&'static str> {
    CLOTHING_CATALOG.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_known_weapon() {
        let stats = resolve_weapon("pistol").unwrap();
        assert_eq!(stats, WeaponStats { damage: 12, accuracy: 8, speed: 0 });
    }

    #[test]
    fn test_resolve_known_clothing() {
        let stats = resolve_clothing("kevlar_vest").unwrap();
        assert_eq!(stats.defense, 10);
        assert_eq!(stats.health_bonus, 20);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        assert_eq!(
            resolve_weapon("rocket_launcher"),
            Err(EquipmentError::UnknownId("rocket_launcher".to_string()))
        );
        assert_eq!(
            resolve_clothing("pistol"),
            Err(EquipmentError::UnknownId("pistol".to_string()))
        );
    }

    #[test]
    fn test_baseline_equipment_contributes_nothing() {
        assert_eq!(resolve_weapon("fists").unwrap(), WeaponStats::default());
        assert_eq!(
            resolve_clothing("street_clothes").unwrap(),
            ClothingStats::default()
        );
    }

    #[test]
    fn test_catalog_listings_cover_every_entry() {
        assert_eq!(weapon_ids().len(), 6);
        assert_eq!(clothing_ids().len(), 5);
        for id in weapon_ids() {
            assert!(resolve_weapon(id).is_ok());
        }
        for id in clothing_ids() {
            assert!(resolve_clothing(id).is_ok());
        }
    }
}
