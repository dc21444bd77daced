use crate::combatant::{Combatant, StatusEffect};
use crate::moves::MoveKind;
use serde::{Deserialize, Serialize};

/// Which combatant slot acts next. Slot A is always the initiator.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSlot {
    A,
    B,
}

impl TurnSlot {
    pub fn to_index(self) -> usize {
        match self {
            TurnSlot::A => 0,
            TurnSlot::B => 1,
        }
    }

    pub fn opponent(self) -> TurnSlot {
        match self {
            TurnSlot::A => TurnSlot::B,
            TurnSlot::B => TurnSlot::A,
        }
    }

    pub fn from_index(index: usize) -> TurnSlot {
        match index {
            0 => TurnSlot::A,
            1 => TurnSlot::B,
            _ => panic!("Invalid combatant index: {}", index),
        }
    }
}

/// Battle mode only changes reward magnitude, never combat math.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleMode {
    Friendly,
    GangWar,
}

/// Terminal outcome of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Winner(TurnSlot),
    Draw,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    InProgress,
    Finished(BattleOutcome),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum BattleEvent {
    TurnStarted {
        turn_number: u32,
        slot: TurnSlot,
    },
    MoveUsed {
        slot: TurnSlot,
        kind: MoveKind,
    },
    MoveMissed {
        slot: TurnSlot,
        kind: MoveKind,
    },
    DamageDealt {
        target: TurnSlot,
        damage: i32,
        remaining_health: i32,
    },
    StatusApplied {
        target: TurnSlot,
        status: StatusEffect,
    },
    StatusExpired {
        target: TurnSlot,
        status: StatusEffect,
    },
    CombatantDefeated {
        slot: TurnSlot,
    },
    TurnCapReached {
        turn_number: u32,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, state: &BattleState) -> Option<String> {
        let name = |slot: TurnSlot| state.combatants[slot.to_index()].display_name.clone();
        match self {
            BattleEvent::TurnStarted { turn_number, slot } => {
                Some(format!("Turn {}: {}", turn_number, name(*slot)))
            }
            BattleEvent::MoveUsed { slot, kind } => {
                Some(format!("{} uses {}!", name(*slot), kind.display_name()))
            }
            BattleEvent::MoveMissed { slot, .. } => {
                Some(format!("{}'s attack misses!", name(*slot)))
            }
            BattleEvent::DamageDealt { target, damage, remaining_health } => Some(format!(
                "{} takes {} damage! ({} health left)",
                name(*target),
                damage,
                remaining_health
            )),
            BattleEvent::StatusApplied { target, status } => match status {
                StatusEffect::Defending => {
                    Some(format!("{} braces for the next hit!", name(*target)))
                }
                StatusEffect::Intimidated => Some(format!("{} is rattled!", name(*target))),
            },
            BattleEvent::StatusExpired { .. } => {
                None // Silent - status wearing off is obvious from context
            }
            BattleEvent::CombatantDefeated { slot } => {
                Some(format!("{} goes down!", name(*slot)))
            }
            BattleEvent::TurnCapReached { turn_number } => Some(format!(
                "The fight is called off after {} turns!",
                turn_number
            )),
            BattleEvent::BattleEnded { outcome } => match outcome {
                BattleOutcome::Winner(slot) => {
                    Some(format!("{} wins the battle!", name(*slot)))
                }
                BattleOutcome::Draw => Some("The battle ends in a draw!".to_string()),
            },
        }
    }
}

/// Event bus for collecting battle events produced by one action.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Collect the formatted text of every non-silent event.
    pub fn messages(&self, state: &BattleState) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(state))
            .collect()
    }

    /// Print all events using their formatted text. Silent events are skipped.
    pub fn print_formatted(&self, state: &BattleState) {
        for message in self.messages(state) {
            println!("  {}", message);
        }
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// RNG oracle for one action: a pre-drawn sequence of outcomes in 1..=100.
/// Tests inject a fixed sequence, production draws from the thread RNG.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // A single action never needs more than a couple of draws.
        let outcomes: Vec<u8> = (0..8).map(|_| rng.random_range(1..=100)).collect();
        Self { outcomes, index: 0 }
    }

    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}

/// The tagged result of one accepted action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Hit {
        damage: i32,
        defender_health: i32,
    },
    Miss,
    BattleEnded {
        outcome: BattleOutcome,
    },
}

/// One accepted action's result plus everything that happened along the way.
#[derive(Debug, Clone)]
pub struct ActionReport {
    pub result: ActionResult,
    pub events: EventBus,
}

impl ActionReport {
    pub fn battle_ended(&self) -> bool {
        matches!(self.result, ActionResult::BattleEnded { .. })
    }
}

/// One turn-based exchange between two combatants until termination.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub combatants: [Combatant; 2],
    pub current_turn: TurnSlot,
    pub turn_count: u32,
    pub mode: BattleMode,
    pub war_id: Option<String>,
    pub phase: BattlePhase,
}

impl BattleState {
    /// Create a battle with the initiator in slot A, who also acts first.
    pub fn new(initiator: Combatant, opponent: Combatant, mode: BattleMode) -> Self {
        Self {
            combatants: [initiator, opponent],
            current_turn: TurnSlot::A,
            turn_count: 0,
            mode,
            war_id: None,
            phase: BattlePhase::InProgress,
        }
    }

    pub fn combatant(&self, slot: TurnSlot) -> &Combatant {
        &self.combatants[slot.to_index()]
    }

    pub fn combatant_mut(&mut self, slot: TurnSlot) -> &mut Combatant {
        &mut self.combatants[slot.to_index()]
    }

    /// The slot holding the combatant with the given id, if any.
    pub fn slot_of(&self, combatant_id: &str) -> Option<TurnSlot> {
        if self.combatants[0].id == combatant_id {
            Some(TurnSlot::A)
        } else if self.combatants[1].id == combatant_id {
            Some(TurnSlot::B)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished(_))
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Finished(outcome) => Some(outcome),
            BattlePhase::InProgress => None,
        }
    }

    /// The winner's combatant id, if the battle finished with a winner.
    pub fn winner_id(&self) -> Option<&str> {
        match self.phase {
            BattlePhase::Finished(BattleOutcome::Winner(slot)) => {
                Some(self.combatant(slot).id.as_str())
            }
            _ => None,
        }
    }
}
