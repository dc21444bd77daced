use crate::battle::state::{
    ActionReport, ActionResult, BattleEvent, BattleOutcome, BattlePhase, BattleState, EventBus,
    TurnRng, TurnSlot,
};
use crate::combatant::StatusEffect;
use crate::errors::{ActionError, BattleStateError, EngineError, EngineResult};
use crate::moves::{get_move_data, MoveKind};

/// Accepted actions after which the battle is forcibly resolved. Together with
/// the minimum hit damage of 1 this bounds every battle.
pub const MAX_TURNS: u32 = 50;

/// Accuracy penalty while Intimidated.
pub const INTIMIDATE_PENALTY: i32 = 20;

const MIN_HIT_CHANCE: i32 = 5;
const MAX_HIT_CHANCE: i32 = 100;

/// Resolve one action by the combatant whose turn it is.
///
/// Validates phase and turn ownership, rolls accuracy against the injected
/// RNG oracle, applies damage and status effects, and either advances the
/// turn or transitions the battle to its terminal phase. Persistence and
/// rewards are the caller's responsibility.
pub fn execute_action(
    state: &mut BattleState,
    actor_id: &str,
    kind: MoveKind,
    rng: &mut TurnRng,
) -> EngineResult<ActionReport> {
    if state.is_finished() {
        return Err(BattleStateError::AlreadyEnded.into());
    }

    let slot = state
        .slot_of(actor_id)
        .ok_or_else(|| ActionError::UnknownCombatant(actor_id.to_string()))?;
    if slot != state.current_turn {
        return Err(EngineError::Action(ActionError::NotYourTurn(
            actor_id.to_string(),
        )));
    }

    let mut bus = EventBus::new();
    state.turn_count += 1;
    bus.push(BattleEvent::TurnStarted {
        turn_number: state.turn_count,
        slot,
    });

    // A Defending stance from the actor's previous turn has served its
    // purpose by now, whether or not the opponent attacked into it.
    if state.combatant_mut(slot).clear_status(StatusEffect::Defending) && kind != MoveKind::Defend
    {
        bus.push(BattleEvent::StatusExpired {
            target: slot,
            status: StatusEffect::Defending,
        });
    }

    let hit_chance = compute_hit_chance(state, slot, kind, &mut bus);
    bus.push(BattleEvent::MoveUsed { slot, kind });

    let roll = rng.next_outcome("Hit Check") as i32;
    if roll > hit_chance {
        bus.push(BattleEvent::MoveMissed { slot, kind });
        let result = advance_or_cap(state, &mut bus, ActionResult::Miss);
        return Ok(ActionReport { result, events: bus });
    }

    let result = if kind.is_damaging() {
        resolve_damaging_hit(state, slot, kind, rng, &mut bus)
    } else {
        resolve_status_move(state, slot, kind, &mut bus);
        ActionResult::Hit {
            damage: 0,
            defender_health: state.combatant(slot.opponent()).current_health,
        }
    };

    if let ActionResult::BattleEnded { .. } = result {
        return Ok(ActionReport { result, events: bus });
    }

    let result = advance_or_cap(state, &mut bus, result);
    Ok(ActionReport { result, events: bus })
}

/// Move accuracy adjusted by equipment and an active Intimidated debuff.
/// Consumes the actor's Intimidated status.
fn compute_hit_chance(
    state: &mut BattleState,
    slot: TurnSlot,
    kind: MoveKind,
    bus: &mut EventBus,
) -> i32 {
    let data = get_move_data(kind);
    let mut chance = data.accuracy;

    // Equipment accuracy only matters when swinging at someone.
    if kind.is_damaging() {
        chance += state.combatant(slot).weapon.accuracy;
    }

    if state.combatant_mut(slot).clear_status(StatusEffect::Intimidated) {
        chance -= INTIMIDATE_PENALTY;
        bus.push(BattleEvent::StatusExpired {
            target: slot,
            status: StatusEffect::Intimidated,
        });
    }

    chance.clamp(MIN_HIT_CHANCE, MAX_HIT_CHANCE)
}

/// Damage on a confirmed hit: base damage scaled by the move multiplier,
/// plus weapon damage and a level-gap term, reduced by the defender's
/// clothing defense and halved if the defender is Defending. Never below 1.
fn resolve_damaging_hit(
    state: &mut BattleState,
    slot: TurnSlot,
    kind: MoveKind,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> ActionResult {
    let data = get_move_data(kind);
    let defender_slot = slot.opponent();

    let level_gap = state.combatant(slot).level as f32
        - state.combatant(defender_slot).level as f32;
    let mut raw = data.base_damage as f32 * data.multiplier
        + state.combatant(slot).weapon.damage as f32
        + level_gap * data.level_coefficient;

    raw -= state.combatant(defender_slot).clothing.defense as f32;

    if state
        .combatant_mut(defender_slot)
        .clear_status(StatusEffect::Defending)
    {
        raw /= 2.0;
        bus.push(BattleEvent::StatusExpired {
            target: defender_slot,
            status: StatusEffect::Defending,
        });
    }

    let damage = (raw.round() as i32).max(1);
    let defeated = state.combatant_mut(defender_slot).take_damage(damage);
    bus.push(BattleEvent::DamageDealt {
        target: defender_slot,
        damage,
        remaining_health: state.combatant(defender_slot).current_health,
    });

    if defeated {
        let outcome = BattleOutcome::Winner(slot);
        state.phase = BattlePhase::Finished(outcome);
        bus.push(BattleEvent::CombatantDefeated { slot: defender_slot });
        bus.push(BattleEvent::BattleEnded { outcome });
        return ActionResult::BattleEnded { outcome };
    }

    // Special carries a chance to rattle the defender on top of its damage.
    if data.effect_chance > 0 {
        let roll = rng.next_outcome("Special Effect Check") as i32;
        if roll <= data.effect_chance {
            state
                .combatant_mut(defender_slot)
                .add_status(StatusEffect::Intimidated);
            bus.push(BattleEvent::StatusApplied {
                target: defender_slot,
                status: StatusEffect::Intimidated,
            });
        }
    }

    ActionResult::Hit {
        damage,
        defender_health: state.combatant(defender_slot).current_health,
    }
}

fn resolve_status_move(
    state: &mut BattleState,
    slot: TurnSlot,
    kind: MoveKind,
    bus: &mut EventBus,
) {
    match kind {
        MoveKind::Defend => {
            state.combatant_mut(slot).add_status(StatusEffect::Defending);
            bus.push(BattleEvent::StatusApplied {
                target: slot,
                status: StatusEffect::Defending,
            });
        }
        MoveKind::Intimidate => {
            let target = slot.opponent();
            state.combatant_mut(target).add_status(StatusEffect::Intimidated);
            bus.push(BattleEvent::StatusApplied {
                target,
                status: StatusEffect::Intimidated,
            });
        }
        _ => unreachable!("only status moves reach resolve_status_move"),
    }
}

/// Hand the turn to the other combatant, or resolve the battle at the turn
/// cap: higher health wins, equal health is a draw.
fn advance_or_cap(
    state: &mut BattleState,
    bus: &mut EventBus,
    result: ActionResult,
) -> ActionResult {
    if state.turn_count >= MAX_TURNS {
        bus.push(BattleEvent::TurnCapReached {
            turn_number: state.turn_count,
        });
        let health_a = state.combatant(TurnSlot::A).current_health;
        let health_b = state.combatant(TurnSlot::B).current_health;
        let outcome = if health_a > health_b {
            BattleOutcome::Winner(TurnSlot::A)
        } else if health_b > health_a {
            BattleOutcome::Winner(TurnSlot::B)
        } else {
            BattleOutcome::Draw
        };
        state.phase = BattlePhase::Finished(outcome);
        bus.push(BattleEvent::BattleEnded { outcome });
        return ActionResult::BattleEnded { outcome };
    }

    state.current_turn = state.current_turn.opponent();
    result
}
