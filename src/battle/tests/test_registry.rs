#[cfg(test)]
mod tests {
    use crate::battle::registry::{BattleKey, BattleRegistry};
    use crate::battle::state::{BattleMode, BattleOutcome, TurnRng, TurnSlot};
    use crate::battle::tests::common::TestCombatantBuilder;
    use crate::errors::RegistryError;
    use crate::moves::MoveKind;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_battle_key_is_order_independent() {
        assert_eq!(BattleKey::new("alice", "bob"), BattleKey::new("bob", "alice"));
    }

    #[test]
    fn test_duplicate_battle_is_rejected_in_either_order() {
        let registry = BattleRegistry::new();
        registry
            .start_battle(
                TestCombatantBuilder::new("alice", 5).build(),
                TestCombatantBuilder::new("bob", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .unwrap();

        // Same pair, reversed initiator.
        let err = registry
            .start_battle(
                TestCombatantBuilder::new("bob", 5).build(),
                TestCombatantBuilder::new("alice", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateBattle);

        // A different pair is independent.
        assert!(registry
            .start_battle(
                TestCombatantBuilder::new("alice2", 5).build(),
                TestCombatantBuilder::new("bob", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_terminal_result_removes_the_battle_and_yields_it_once() {
        let registry = BattleRegistry::new();
        let key = registry
            .start_battle(
                TestCombatantBuilder::new("alice", 5).build(),
                TestCombatantBuilder::new("bob", 5).with_health(1).build(),
                BattleMode::Friendly,
                None,
            )
            .unwrap();

        let mut rng = TurnRng::new_for_test(vec![1]);
        let (report, completed) = registry
            .execute_action(&key, "alice", MoveKind::Attack, &mut rng)
            .unwrap();
        assert!(report.battle_ended());

        let completed = completed.expect("terminal action must yield the completed battle");
        assert_eq!(completed.outcome(), BattleOutcome::Winner(TurnSlot::A));
        assert_eq!(completed.winner_id(), Some("alice"));

        // The registry entry is gone, so a replayed action cannot find it
        // and a second CompletedBattle for this result cannot exist.
        assert!(!registry.contains(&key));
        let mut rng = TurnRng::new_for_test(vec![1]);
        let err = registry
            .execute_action(&key, "bob", MoveKind::Attack, &mut rng)
            .unwrap_err();
        assert_eq!(err, RegistryError::NoSuchBattle.into());

        // The same pair may start a fresh battle afterwards.
        assert!(registry
            .start_battle(
                TestCombatantBuilder::new("alice", 5).build(),
                TestCombatantBuilder::new("bob", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .is_ok());
    }

    #[test]
    fn test_non_terminal_actions_keep_the_battle_registered() {
        let registry = BattleRegistry::new();
        let key = registry
            .start_battle(
                TestCombatantBuilder::new("alice", 5).build(),
                TestCombatantBuilder::new("bob", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .unwrap();

        let mut rng = TurnRng::new_for_test(vec![1]);
        let (report, completed) = registry
            .execute_action(&key, "alice", MoveKind::Attack, &mut rng)
            .unwrap();
        assert!(!report.battle_ended());
        assert!(completed.is_none());
        assert!(registry.contains(&key));
    }

    #[test]
    fn test_cancel_drops_a_battle_without_completion() {
        let registry = BattleRegistry::new();
        let key = registry
            .start_battle(
                TestCombatantBuilder::new("alice", 5).build(),
                TestCombatantBuilder::new("bob", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .unwrap();

        assert!(registry.cancel(&key));
        assert!(!registry.cancel(&key));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_expire_stale_drops_only_idle_battles() {
        let registry = BattleRegistry::new();
        let idle_key = registry
            .start_battle(
                TestCombatantBuilder::new("alice", 5).build(),
                TestCombatantBuilder::new("bob", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .unwrap();

        std::thread::sleep(Duration::from_millis(20));

        let fresh_key = registry
            .start_battle(
                TestCombatantBuilder::new("carol", 5).build(),
                TestCombatantBuilder::new("dave", 5).build(),
                BattleMode::Friendly,
                None,
            )
            .unwrap();

        let expired = registry.expire_stale(Duration::from_millis(10));
        assert_eq!(expired, vec![idle_key.clone()]);
        assert!(!registry.contains(&idle_key));
        assert!(registry.contains(&fresh_key));
    }
}
