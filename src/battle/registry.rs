use crate::battle::engine::execute_action;
use crate::battle::state::{
    ActionReport, BattleMode, BattleOutcome, BattleState, TurnRng, TurnSlot,
};
use crate::combatant::Combatant;
use crate::errors::{EngineResult, RegistryError};
use crate::moves::MoveKind;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Canonical key for the unordered pair of combatant ids. Construction sorts
/// the ids, so `(a, b)` and `(b, a)` name the same battle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BattleKey {
    first: String,
    second: String,
}

impl BattleKey {
    pub fn new(id_a: &str, id_b: &str) -> Self {
        if id_a <= id_b {
            Self {
                first: id_a.to_string(),
                second: id_b.to_string(),
            }
        } else {
            Self {
                first: id_b.to_string(),
                second: id_a.to_string(),
            }
        }
    }
}

/// A battle that reached its terminal result. Only the registry constructs
/// one, and only once per battle: rewarding a `CompletedBattle` consumes it,
/// so double-crediting the same result cannot be expressed.
#[derive(Debug)]
pub struct CompletedBattle {
    state: BattleState,
    outcome: BattleOutcome,
}

impl CompletedBattle {
    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn mode(&self) -> BattleMode {
        self.state.mode
    }

    pub fn war_id(&self) -> Option<&str> {
        self.state.war_id.as_deref()
    }

    pub fn combatant(&self, slot: TurnSlot) -> &Combatant {
        self.state.combatant(slot)
    }

    pub fn winner_id(&self) -> Option<&str> {
        self.state.winner_id()
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }
}

struct ActiveBattle {
    state: BattleState,
    last_action: Instant,
}

/// Process-wide store of live battles, keyed by the canonical pair of
/// combatant ids. At most one battle per pair; two different pairs never
/// contend beyond the brief map lock.
#[derive(Default)]
pub struct BattleRegistry {
    battles: Mutex<HashMap<BattleKey, ActiveBattle>>,
}

impl BattleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<BattleKey, ActiveBattle>> {
        self.battles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new battle. The initiator acts first. Fails if a live
    /// battle already exists for this pair, in either id order.
    pub fn start_battle(
        &self,
        initiator: Combatant,
        opponent: Combatant,
        mode: BattleMode,
        war_id: Option<String>,
    ) -> Result<BattleKey, RegistryError> {
        let key = BattleKey::new(&initiator.id, &opponent.id);
        let mut battles = self.lock();
        if battles.contains_key(&key) {
            return Err(RegistryError::DuplicateBattle);
        }

        let mut state = BattleState::new(initiator, opponent, mode);
        state.war_id = war_id;
        battles.insert(
            key.clone(),
            ActiveBattle {
                state,
                last_action: Instant::now(),
            },
        );
        Ok(key)
    }

    /// Drive one action through the engine. A terminal result removes the
    /// battle from the registry and hands the caller the owned
    /// `CompletedBattle` for reward finalization.
    pub fn execute_action(
        &self,
        key: &BattleKey,
        actor_id: &str,
        kind: MoveKind,
        rng: &mut TurnRng,
    ) -> EngineResult<(ActionReport, Option<CompletedBattle>)> {
        let mut battles = self.lock();
        let active = battles.get_mut(key).ok_or(RegistryError::NoSuchBattle)?;

        let report = execute_action(&mut active.state, actor_id, kind, rng)?;
        active.last_action = Instant::now();

        let completed = if report.battle_ended() {
            let active = battles
                .remove(key)
                .expect("terminal battle must still be registered");
            let outcome = active
                .state
                .outcome()
                .expect("terminal battle must carry an outcome");
            Some(CompletedBattle {
                state: active.state,
                outcome,
            })
        } else {
            None
        };

        Ok((report, completed))
    }

    /// Drop a battle without producing a terminal result. Used when a
    /// challenge is abandoned; no rewards are ever paid for it.
    pub fn cancel(&self, key: &BattleKey) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Drop every battle idle longer than `window`, returning their keys.
    /// Expired battles never produce a `CompletedBattle`.
    pub fn expire_stale(&self, window: Duration) -> Vec<BattleKey> {
        let mut battles = self.lock();
        let now = Instant::now();
        let stale: Vec<BattleKey> = battles
            .iter()
            .filter(|(_, active)| now.duration_since(active.last_action) > window)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            battles.remove(key);
        }
        stale
    }

    /// Clone of a live battle's state, for presentation.
    pub fn snapshot(&self, key: &BattleKey) -> Option<BattleState> {
        self.lock().get(key).map(|active| active.state.clone())
    }

    pub fn contains(&self, key: &BattleKey) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
