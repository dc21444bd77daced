use crate::errors::WarError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default battle allowance per war participant.
pub const DEFAULT_MAX_BATTLES: u32 = 2;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarSide {
    Attacker,
    Defender,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarStatus {
    Active,
    Completed,
}

/// Only elimination wars exist; the variant is kept so persisted wars carry
/// their type explicitly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarType {
    Elimination,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum WarWinner {
    Gang(String),
    Draw,
}

/// A multi-battle conflict between two gangs with per-member battle
/// allowances. A member whose allowance reaches 0 is eliminated; a side with
/// every rostered member eliminated loses the war.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct War {
    pub attacker_gang_id: String,
    pub defender_gang_id: String,
    pub status: WarStatus,
    pub war_type: WarType,
    pub max_battles_per_member: u32,
    pub attacker_allowance: HashMap<String, u32>,
    pub defender_allowance: HashMap<String, u32>,
    pub winner: Option<WarWinner>,
}

impl War {
    pub fn new(attacker_gang_id: impl Into<String>, defender_gang_id: impl Into<String>) -> Self {
        Self {
            attacker_gang_id: attacker_gang_id.into(),
            defender_gang_id: defender_gang_id.into(),
            status: WarStatus::Active,
            war_type: WarType::Elimination,
            max_battles_per_member: DEFAULT_MAX_BATTLES,
            attacker_allowance: HashMap::new(),
            defender_allowance: HashMap::new(),
            winner: None,
        }
    }

    fn allowance(&self, side: WarSide) -> &HashMap<String, u32> {
        match side {
            WarSide::Attacker => &self.attacker_allowance,
            WarSide::Defender => &self.defender_allowance,
        }
    }

    fn allowance_mut(&mut self, side: WarSide) -> &mut HashMap<String, u32> {
        match side {
            WarSide::Attacker => &mut self.attacker_allowance,
            WarSide::Defender => &mut self.defender_allowance,
        }
    }

    /// Remaining battles for a member, lazily the per-war maximum for anyone
    /// not yet recorded.
    pub fn remaining_battles(&self, side: WarSide, member: &str) -> u32 {
        self.allowance(side)
            .get(member)
            .copied()
            .unwrap_or(self.max_battles_per_member)
    }

    /// Whether a member may still fight. Must be checked for both
    /// participants before starting a gang-war battle.
    pub fn check_eligible(&self, side: WarSide, member: &str) -> Result<(), WarError> {
        if self.status == WarStatus::Completed {
            return Err(WarError::AlreadyCompleted);
        }
        if self.remaining_battles(side, member) == 0 {
            return Err(WarError::AllowanceExhausted(member.to_string()));
        }
        Ok(())
    }

    /// Record one finished battle between an attacker-side member and a
    /// defender-side member. Both participants spend one battle from their
    /// allowance, win, lose, or draw, saturating at 0. Allowances are frozen
    /// once the war is completed.
    pub fn record_battle(
        &mut self,
        attacker_member: &str,
        defender_member: &str,
    ) -> Result<(), WarError> {
        if self.status == WarStatus::Completed {
            return Err(WarError::AlreadyCompleted);
        }
        self.spend_battle(WarSide::Attacker, attacker_member);
        self.spend_battle(WarSide::Defender, defender_member);
        Ok(())
    }

    fn spend_battle(&mut self, side: WarSide, member: &str) {
        let max = self.max_battles_per_member;
        let remaining = self
            .allowance_mut(side)
            .entry(member.to_string())
            .or_insert(max);
        *remaining = remaining.saturating_sub(1);
    }

    /// Decide whether the war is over, given each side's full roster.
    /// Evaluation order: both sides exhausted is a draw, an exhausted
    /// attacker hands the war to the defender, an exhausted defender to the
    /// attacker; otherwise the war stays active. Runs after every gang-war
    /// terminal result, before persisting.
    pub fn evaluate_completion(
        &mut self,
        attacker_roster: &[String],
        defender_roster: &[String],
    ) -> Option<&WarWinner> {
        if self.status == WarStatus::Completed {
            return self.winner.as_ref();
        }

        let attacker_out = self.side_exhausted(WarSide::Attacker, attacker_roster);
        let defender_out = self.side_exhausted(WarSide::Defender, defender_roster);

        let winner = match (attacker_out, defender_out) {
            (true, true) => WarWinner::Draw,
            (true, false) => WarWinner::Gang(self.defender_gang_id.clone()),
            (false, true) => WarWinner::Gang(self.attacker_gang_id.clone()),
            (false, false) => return None,
        };

        self.status = WarStatus::Completed;
        self.winner = Some(winner);
        self.winner.as_ref()
    }

    /// A side is exhausted when every rostered member's allowance is 0.
    /// Empty rosters never count as exhausted.
    fn side_exhausted(&self, side: WarSide, roster: &[String]) -> bool {
        !roster.is_empty()
            && roster
                .iter()
                .all(|member| self.remaining_battles(side, member) == 0)
    }
}
