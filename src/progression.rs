use crate::battle::registry::CompletedBattle;
use crate::battle::state::{BattleMode, BattleOutcome, TurnSlot};
use crate::errors::{EngineResult, WarError};
use crate::store::GameData;
use crate::war::WarWinner;
use serde::{Deserialize, Serialize};

/// Level cap for the XP curve.
pub const MAX_LEVEL: u32 = 100;

// Friendly battle reward literals. Base amount plus a per-level bonus.
const FRIENDLY_WIN_XP: u64 = 200;
const FRIENDLY_WIN_XP_PER_LEVEL: u64 = 20;
const FRIENDLY_WIN_MONEY: u64 = 100_000;
const FRIENDLY_WIN_MONEY_PER_LEVEL: u64 = 10_000;
const FRIENDLY_LOSS_XP: u64 = 100;
const FRIENDLY_LOSS_XP_PER_LEVEL: u64 = 5;
const FRIENDLY_DRAW_XP: u64 = 150;
const FRIENDLY_DRAW_XP_PER_LEVEL: u64 = 10;
const FRIENDLY_DRAW_MONEY: u64 = 50_000;
const FRIENDLY_DRAW_MONEY_PER_LEVEL: u64 = 5_000;

// Gang-war rewards double the friendly ones; losing a war battle still pays
// a small consolation.
const WAR_LOSS_MONEY: u64 = 25_000;
const WAR_LOSS_MONEY_PER_LEVEL: u64 = 2_500;

/// Level for a given amount of XP: 1 + floor(sqrt(xp / 100)), capped.
pub fn level_for_xp(xp: u64) -> u32 {
    let level = 1 + ((xp / 100) as f64).sqrt().floor() as u32;
    level.min(MAX_LEVEL)
}

/// XP threshold at which a level is first reached.
pub fn xp_for_level(level: u32) -> u64 {
    let level = level.clamp(1, MAX_LEVEL) as u64;
    (level - 1) * (level - 1) * 100
}

/// Ledger credit for one participant of one terminal battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardDelta {
    pub xp: u64,
    pub money: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BattleRole {
    Winner,
    Loser,
    Draw,
}

/// Rewards credited for one terminal battle, in slot order (initiator first).
#[derive(Debug, Clone, PartialEq)]
pub struct RewardSummary {
    pub outcome: BattleOutcome,
    pub deltas: [(String, RewardDelta); 2],
    /// Set when this battle decided an enclosing war.
    pub war_winner: Option<WarWinner>,
}

/// War bookkeeping needed to settle a gang-war battle: which member fought
/// for which side, and the full rosters for the elimination check.
pub struct WarContext<'a> {
    pub attacker_member: &'a str,
    pub defender_member: &'a str,
    pub attacker_roster: &'a [String],
    pub defender_roster: &'a [String],
}

fn reward_for(mode: BattleMode, role: BattleRole, level: u32) -> RewardDelta {
    let level = level as u64;
    let base = match role {
        BattleRole::Winner => RewardDelta {
            xp: FRIENDLY_WIN_XP + FRIENDLY_WIN_XP_PER_LEVEL * level,
            money: FRIENDLY_WIN_MONEY + FRIENDLY_WIN_MONEY_PER_LEVEL * level,
        },
        BattleRole::Loser => RewardDelta {
            xp: FRIENDLY_LOSS_XP + FRIENDLY_LOSS_XP_PER_LEVEL * level,
            money: 0,
        },
        BattleRole::Draw => RewardDelta {
            xp: FRIENDLY_DRAW_XP + FRIENDLY_DRAW_XP_PER_LEVEL * level,
            money: FRIENDLY_DRAW_MONEY + FRIENDLY_DRAW_MONEY_PER_LEVEL * level,
        },
    };

    match mode {
        BattleMode::Friendly => base,
        BattleMode::GangWar => {
            let mut delta = RewardDelta {
                xp: base.xp * 2,
                money: base.money * 2,
            };
            if role == BattleRole::Loser {
                delta.money = WAR_LOSS_MONEY + WAR_LOSS_MONEY_PER_LEVEL * level;
            }
            delta
        }
    }
}

fn role_of(outcome: BattleOutcome, slot: TurnSlot) -> BattleRole {
    match outcome {
        BattleOutcome::Draw => BattleRole::Draw,
        BattleOutcome::Winner(winner) if winner == slot => BattleRole::Winner,
        BattleOutcome::Winner(_) => BattleRole::Loser,
    }
}

/// Credit both participants of a terminal battle and, for gang-war battles,
/// run the elimination bookkeeping on the enclosing war record.
///
/// The war bookkeeping runs before any ledger credit: a gang-war battle
/// whose war record is missing, frozen, or settled without its context
/// fails whole, leaving both ledgers untouched.
///
/// Consuming the `CompletedBattle` is what makes this exactly-once: the
/// registry hands out a single owned value per terminal result, so a replay
/// has nothing to pass in.
pub fn finalize_rewards(
    completed: CompletedBattle,
    data: &mut GameData,
    war: Option<WarContext<'_>>,
) -> EngineResult<RewardSummary> {
    let outcome = completed.outcome();
    let mode = completed.mode();

    let mut war_winner = None;
    if let Some(war_id) = completed.war_id() {
        let ctx = war.ok_or(WarError::MissingContext)?;
        let record = data
            .wars
            .get_mut(war_id)
            .ok_or_else(|| WarError::UnknownWar(war_id.to_string()))?;
        record.record_battle(ctx.attacker_member, ctx.defender_member)?;
        war_winner = record
            .evaluate_completion(ctx.attacker_roster, ctx.defender_roster)
            .cloned();
    }

    let mut deltas: [(String, RewardDelta); 2] =
        [Default::default(), Default::default()];
    for slot in [TurnSlot::A, TurnSlot::B] {
        let combatant = completed.combatant(slot);
        let delta = reward_for(mode, role_of(outcome, slot), combatant.level);
        let ledger = data.player_mut(&combatant.id);
        ledger.xp += delta.xp;
        ledger.dollars += delta.money;
        deltas[slot.to_index()] = (combatant.id.clone(), delta);
    }

    Ok(RewardSummary {
        outcome,
        deltas,
        war_winner,
    })
}
