use crate::battle::state::{BattleMode, BattleState, TurnRng};
use crate::combatant::Combatant;
use crate::equipment::{resolve_clothing, resolve_weapon};

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```rust,ignore
/// let fighter = TestCombatantBuilder::new("a1", 10)
///     .with_weapon("switchblade")
///     .with_health(40)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    id: String,
    level: u32,
    weapon: &'static str,
    clothing: &'static str,
    health: Option<i32>,
}

impl TestCombatantBuilder {
    pub fn new(id: &str, level: u32) -> Self {
        Self {
            id: id.to_string(),
            level,
            weapon: "fists",
            clothing: "street_clothes",
            health: None,
        }
    }

    pub fn with_weapon(mut self, weapon: &'static str) -> Self {
        self.weapon = weapon;
        self
    }

    pub fn with_clothing(mut self, clothing: &'static str) -> Self {
        self.clothing = clothing;
        self
    }

    /// Sets current health. If not set, health will be max.
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn build(self) -> Combatant {
        let weapon = resolve_weapon(self.weapon)
            .unwrap_or_else(|err| panic!("Failed to resolve test weapon: {}", err));
        let clothing = resolve_clothing(self.clothing)
            .unwrap_or_else(|err| panic!("Failed to resolve test clothing: {}", err));

        let display_name = self.id.to_uppercase();
        let mut combatant = Combatant::new(self.id, display_name, self.level, weapon, clothing);
        if let Some(health) = self.health {
            combatant.current_health = health.clamp(0, combatant.max_health);
        }
        combatant
    }
}

/// A friendly battle between two bare-handed combatants of the same level.
/// Combatant "a" initiates and acts first.
pub fn create_test_battle(level: u32) -> BattleState {
    BattleState::new(
        TestCombatantBuilder::new("a", level).build(),
        TestCombatantBuilder::new("b", level).build(),
        BattleMode::Friendly,
    )
}

/// An RNG oracle that always rolls 1: every accuracy check hits and every
/// effect chance procs.
pub fn always_hit_rng() -> TurnRng {
    TurnRng::new_for_test(vec![1; 64])
}

/// An RNG oracle that always rolls 100: everything short of guaranteed
/// accuracy misses.
pub fn always_miss_rng() -> TurnRng {
    TurnRng::new_for_test(vec![100; 64])
}
