use crate::equipment::{ClothingStats, WeaponStats};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Health every combatant has before level and clothing bonuses.
pub const BASE_HEALTH: i32 = 100;

/// Health gained per level.
pub const HEALTH_PER_LEVEL: i32 = 5;

/// Transient modifiers on a combatant, cleared around the owner's next turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffect {
    /// Halves the next incoming hit, then clears
    Defending,
    /// Lowers the owner's accuracy on their next action, then clears
    Intimidated,
}

/// One side of a battle: identity, level, resolved equipment stats, and health.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Combatant {
    pub id: String,
    pub display_name: String,
    pub level: u32,
    pub weapon: WeaponStats,
    pub clothing: ClothingStats,
    pub max_health: i32,
    pub current_health: i32,
    pub statuses: HashSet<StatusEffect>,
}

impl Combatant {
    /// Create a combatant at full health from resolved equipment stats.
    /// Levels below 1 are clamped up to 1.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        level: u32,
        weapon: WeaponStats,
        clothing: ClothingStats,
    ) -> Self {
        let level = level.max(1);
        let max_health = BASE_HEALTH + HEALTH_PER_LEVEL * level as i32 + clothing.health_bonus;
        Self {
            id: id.into(),
            display_name: display_name.into(),
            level,
            weapon,
            clothing,
            max_health,
            current_health: max_health,
            statuses: HashSet::new(),
        }
    }

    /// Apply damage, flooring health at 0. Returns true if this defeated the combatant.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current_health = (self.current_health - amount.max(0)).max(0);
        self.is_defeated()
    }

    /// Restore health, capped at max. Defeated combatants stay at 0.
    pub fn heal(&mut self, amount: i32) {
        if self.is_defeated() {
            return;
        }
        self.current_health = (self.current_health + amount.max(0)).min(self.max_health);
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    pub fn has_status(&self, status: StatusEffect) -> bool {
        self.statuses.contains(&status)
    }

    pub fn add_status(&mut self, status: StatusEffect) {
        self.statuses.insert(status);
    }

    /// Remove a status. Returns true if it was present.
    pub fn clear_status(&mut self, status: StatusEffect) -> bool {
        self.statuses.remove(&status)
    }
}
