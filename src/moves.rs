use crate::errors::ActionError;
use serde::{Deserialize, Serialize};

/// The closed set of moves a combatant can take on their turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Balanced accuracy and damage
    Attack,
    /// Low accuracy, high damage
    HeavyAttack,
    /// High accuracy, low damage, rewards level gaps
    QuickAttack,
    /// No damage; halves the next incoming hit
    Defend,
    /// No damage; lowers the opponent's accuracy for one action
    Intimidate,
    /// Intermediate risk/reward with a chance to also intimidate
    Special,
}

/// Static characteristics of a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveData {
    /// Base chance to hit, in percent
    pub accuracy: i32,
    /// Base damage before multiplier and equipment
    pub base_damage: i32,
    /// Damage multiplier applied to base damage
    pub multiplier: f32,
    /// How strongly the attacker/defender level gap scales damage
    pub level_coefficient: f32,
    /// Chance (percent) of the move's bonus effect, if it has one
    pub effect_chance: i32,
}

const ATTACK: MoveData = MoveData {
    accuracy: 85,
    base_damage: 12,
    multiplier: 1.0,
    level_coefficient: 1.0,
    effect_chance: 0,
};

const HEAVY_ATTACK: MoveData = MoveData {
    accuracy: 60,
    base_damage: 20,
    multiplier: 1.2,
    level_coefficient: 0.5,
    effect_chance: 0,
};

const QUICK_ATTACK: MoveData = MoveData {
    accuracy: 95,
    base_damage: 8,
    multiplier: 0.8,
    level_coefficient: 1.5,
    effect_chance: 0,
};

const DEFEND: MoveData = MoveData {
    accuracy: 100,
    base_damage: 0,
    multiplier: 0.0,
    level_coefficient: 0.0,
    effect_chance: 0,
};

const INTIMIDATE: MoveData = MoveData {
    accuracy: 90,
    base_damage: 0,
    multiplier: 0.0,
    level_coefficient: 0.0,
    effect_chance: 0,
};

const SPECIAL: MoveData = MoveData {
    accuracy: 75,
    base_damage: 15,
    multiplier: 1.1,
    level_coefficient: 1.0,
    effect_chance: 30,
};

/// Look up the static data for a move.
pub fn get_move_data(kind: MoveKind) -> &'static MoveData {
    match kind {
        MoveKind::Attack => &ATTACK,
        MoveKind::HeavyAttack => &HEAVY_ATTACK,
        MoveKind::QuickAttack => &QUICK_ATTACK,
        MoveKind::Defend => &DEFEND,
        MoveKind::Intimidate => &INTIMIDATE,
        MoveKind::Special => &SPECIAL,
    }
}

impl MoveKind {
    /// Parse a caller-supplied move name, as presented on action buttons.
    pub fn parse(name: &str) -> Result<MoveKind, ActionError> {
        match name {
            "attack" => Ok(MoveKind::Attack),
            "heavy_attack" => Ok(MoveKind::HeavyAttack),
            "quick_attack" => Ok(MoveKind::QuickAttack),
            "defend" => Ok(MoveKind::Defend),
            "intimidate" => Ok(MoveKind::Intimidate),
            "special" => Ok(MoveKind::Special),
            other => Err(ActionError::UnknownMove(other.to_string())),
        }
    }

    /// Whether the move deals damage on a hit.
    pub fn is_damaging(self) -> bool {
        get_move_data(self).base_damage > 0
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MoveKind::Attack => "Attack",
            MoveKind::HeavyAttack => "Heavy Attack",
            MoveKind::QuickAttack => "Quick Attack",
            MoveKind::Defend => "Defend",
            MoveKind::Intimidate => "Intimidate",
            MoveKind::Special => "Special",
        }
    }

    pub fn all() -> [MoveKind; 6] {
        [
            MoveKind::Attack,
            MoveKind::HeavyAttack,
            MoveKind::QuickAttack,
            MoveKind::Defend,
            MoveKind::Intimidate,
            MoveKind::Special,
        ]
    }
}
