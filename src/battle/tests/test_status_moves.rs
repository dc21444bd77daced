#[cfg(test)]
mod tests {
    use crate::battle::engine::execute_action;
    use crate::battle::state::{ActionResult, BattleEvent, BattleMode, BattleState, TurnRng, TurnSlot};
    use crate::battle::tests::common::{create_test_battle, TestCombatantBuilder};
    use crate::combatant::StatusEffect;
    use crate::moves::MoveKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defend_sets_the_stance() {
        let mut state = create_test_battle(5);
        let mut rng = TurnRng::new_for_test(vec![1]);

        let report = execute_action(&mut state, "a", MoveKind::Defend, &mut rng).unwrap();
        assert!(state.combatant(TurnSlot::A).has_status(StatusEffect::Defending));
        assert!(report.events.events().iter().any(|event| matches!(
            event,
            BattleEvent::StatusApplied {
                target: TurnSlot::A,
                status: StatusEffect::Defending
            }
        )));
    }

    #[test]
    fn test_defending_stance_is_consumed_by_the_incoming_hit() {
        let mut state = create_test_battle(5);
        let mut rng = TurnRng::new_for_test(vec![1, 1]);

        execute_action(&mut state, "a", MoveKind::Defend, &mut rng).unwrap();
        execute_action(&mut state, "b", MoveKind::Attack, &mut rng).unwrap();
        assert!(!state.combatant(TurnSlot::A).has_status(StatusEffect::Defending));
    }

    #[test]
    fn test_stale_defending_stance_clears_on_next_own_turn() {
        let mut state = create_test_battle(5);
        let mut rng = TurnRng::new_for_test(vec![1, 100, 1]);

        execute_action(&mut state, "a", MoveKind::Defend, &mut rng).unwrap();
        // B swings and misses, leaving A's stance unconsumed.
        execute_action(&mut state, "b", MoveKind::Attack, &mut rng).unwrap();
        assert!(state.combatant(TurnSlot::A).has_status(StatusEffect::Defending));

        // A's next action clears the stale stance before resolving.
        execute_action(&mut state, "a", MoveKind::Attack, &mut rng).unwrap();
        assert!(!state.combatant(TurnSlot::A).has_status(StatusEffect::Defending));
    }

    #[test]
    fn test_intimidate_lowers_accuracy_for_one_action() {
        let mut state = create_test_battle(5);
        // Intimidate lands (1), then B rolls 70: under the base 85 but over
        // the debuffed 65, so the attack misses.
        let mut rng = TurnRng::new_for_test(vec![1, 70]);

        execute_action(&mut state, "a", MoveKind::Intimidate, &mut rng).unwrap();
        assert!(state.combatant(TurnSlot::B).has_status(StatusEffect::Intimidated));

        let report = execute_action(&mut state, "b", MoveKind::Attack, &mut rng).unwrap();
        assert_eq!(report.result, ActionResult::Miss);
        // The debuff is spent by that one action.
        assert!(!state.combatant(TurnSlot::B).has_status(StatusEffect::Intimidated));

        // The same roll would have hit without the debuff.
        let mut fresh = create_test_battle(5);
        let mut fresh_rng = TurnRng::new_for_test(vec![70]);
        let report = execute_action(&mut fresh, "a", MoveKind::Attack, &mut fresh_rng).unwrap();
        assert!(matches!(report.result, ActionResult::Hit { .. }));
    }

    #[test]
    fn test_weapon_accuracy_does_not_apply_to_status_moves() {
        // A tommy gun's -5 accuracy drags attacks down but not Intimidate.
        // Roll 88 sits between the two: under Intimidate's base 90, over an
        // attack's 85 - 5 = 80.
        let gunner_battle = || {
            BattleState::new(
                TestCombatantBuilder::new("a", 5).with_weapon("tommy_gun").build(),
                TestCombatantBuilder::new("b", 5).build(),
                BattleMode::Friendly,
            )
        };

        let mut state = gunner_battle();
        let mut rng = TurnRng::new_for_test(vec![88]);
        let report = execute_action(&mut state, "a", MoveKind::Intimidate, &mut rng).unwrap();
        assert!(matches!(report.result, ActionResult::Hit { .. }));
        assert!(state.combatant(TurnSlot::B).has_status(StatusEffect::Intimidated));

        let mut state = gunner_battle();
        let mut rng = TurnRng::new_for_test(vec![88]);
        let report = execute_action(&mut state, "a", MoveKind::Attack, &mut rng).unwrap();
        assert!(matches!(report.result, ActionResult::Miss));
    }

    #[test]
    fn test_special_can_rattle_on_top_of_its_damage() {
        let mut state = create_test_battle(5);
        // Hit roll 1, effect roll 30 (exactly the proc threshold).
        let mut rng = TurnRng::new_for_test(vec![1, 30]);

        let report = execute_action(&mut state, "a", MoveKind::Special, &mut rng).unwrap();
        assert!(matches!(report.result, ActionResult::Hit { .. }));
        assert!(state.combatant(TurnSlot::B).has_status(StatusEffect::Intimidated));
    }

    #[test]
    fn test_special_bonus_effect_can_fail() {
        let mut state = create_test_battle(5);
        // Hit roll 1, effect roll 31 (just past the threshold).
        let mut rng = TurnRng::new_for_test(vec![1, 31]);

        execute_action(&mut state, "a", MoveKind::Special, &mut rng).unwrap();
        assert!(!state.combatant(TurnSlot::B).has_status(StatusEffect::Intimidated));
    }
}
