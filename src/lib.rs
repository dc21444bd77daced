//! Turf War Combat Engine
//!
//! The turn-based combat core of a gang-themed social game: friendly duels
//! and structured gang wars resolved one action at a time, with elimination
//! bookkeeping deciding war victory and a persisted ledger receiving the
//! XP/money rewards. Presentation, persistence transport, and the wider
//! economy live outside this crate and talk to it through the types
//! re-exported below.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod equipment;
pub mod errors;
pub mod moves;
pub mod progression;
pub mod store;
pub mod war;

// --- PUBLIC API RE-EXPORTS ---

// Core battle engine entry points and state.
pub use battle::engine::{execute_action, INTIMIDATE_PENALTY, MAX_TURNS};
pub use battle::registry::{BattleKey, BattleRegistry, CompletedBattle};
pub use battle::state::{
    ActionReport, ActionResult, BattleEvent, BattleMode, BattleOutcome, BattlePhase, BattleState,
    EventBus, TurnRng, TurnSlot,
};

// Core runtime types for a battle.
pub use combatant::{Combatant, StatusEffect};
pub use moves::{get_move_data, MoveData, MoveKind};

// Equipment catalog access.
pub use equipment::{
    clothing_ids, resolve_clothing, resolve_weapon, weapon_ids, ClothingStats, WeaponStats,
};

// War bookkeeping and rewards.
pub use progression::{finalize_rewards, level_for_xp, RewardDelta, RewardSummary, WarContext};
pub use war::{War, WarSide, WarStatus, WarType, WarWinner};

// Persisted ledger boundary.
pub use store::{GameData, JsonFileBackend, MemoryBackend, PlayerLedger, StoreBackend};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleStateError, EngineError, EngineResult, EquipmentError, RegistryError,
    StoreError, WarError,
};
