#[cfg(test)]
mod combat_tests {
    use super::super::*;
    use entities::{Character, Enemy, Loot, Player};
    use generators::{GameRng, ScriptedRng};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn player_with(health: i32, attack: u32, luck: f64) -> PlayerCombatant {
        let character = Character::new("Wren Stormborn", health, attack, luck, 1);
        PlayerCombatant::new(Player::new(character, 0, 50)).unwrap()
    }

    fn monster_with(health: i32, attack: u32, level: u32) -> EnemyCombatant {
        let character = Character::new("Voidmaw lurker", health, attack, 0.5, level);
        EnemyCombatant::with_loot(Enemy::new(character, 0), Loot::new("Cursed Iron Dagger", 25))
            .unwrap()
    }

    fn scripted(values: &[f64]) -> ScriptedRng {
        ScriptedRng::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_lucky_attack_is_critical() {
        let mut player = player_with(30, 8, 0.5);
        let mut monster = monster_with(40, 5, 1);
        let mut rng = scripted(&[0.1]);

        let event = player.attack(&mut monster, &mut rng);
        assert_eq!(event.damage(), Some(16));
        assert!(matches!(event, CombatEvent::CriticalHit { .. }));
        assert_eq!(monster.fighter().health(), 24);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_unlucky_attack_misses() {
        let mut player = player_with(30, 8, 0.5);
        let mut monster = monster_with(40, 5, 1);
        let mut rng = scripted(&[0.9, 0.95]);

        let event = player.attack(&mut monster, &mut rng);
        assert!(matches!(event, CombatEvent::Miss { .. }));
        assert_eq!(monster.fighter().health(), 40);
    }

    #[test]
    fn test_normal_hit() {
        let mut player = player_with(30, 8, 0.5);
        let mut monster = monster_with(40, 5, 1);
        let mut rng = scripted(&[0.9, 0.7]);

        let event = player.attack(&mut monster, &mut rng);
        assert!(matches!(event, CombatEvent::Hit { damage: 8, .. }));
        assert_eq!(monster.fighter().health(), 32);
    }

    #[test]
    fn test_attack_power_beyond_i32_still_damages() {
        let mut player = player_with(30, 3_000_000_000, 0.5);
        let mut monster = monster_with(10, 5, 1);
        let mut rng = scripted(&[0.9, 0.7]);

        let event = player.attack(&mut monster, &mut rng);
        assert!(matches!(event, CombatEvent::Hit { damage: i32::MAX, .. }));
        assert!(monster.fighter().health() < 10);
        assert!(!monster.is_alive());
    }

    #[test]
    fn test_huge_incoming_attack_never_heals() {
        let mut player = player_with(30, 5, 0.5);
        let event = player.escape(u32::MAX, &mut scripted(&[0.9, 0.95]));
        assert!(matches!(event, CombatEvent::EscapeFailed { damage: i32::MAX, .. }));
        assert!(!player.is_alive());

        let mut player = player_with(30, 5, 0.5);
        let event = player.defend(u32::MAX, &mut scripted(&[0.9]));
        assert_eq!(event.damage(), Some(i32::MAX));
        assert!(!player.is_alive());
    }

    #[test]
    fn test_defend_high_luck_halves_damage() {
        let mut player = player_with(30, 8, 0.6);
        let mut rng = scripted(&[0.9]);

        let event = player.defend(20, &mut rng);
        assert_eq!(event.damage(), Some(10));
        assert_eq!(player.fighter().health(), 20);
    }

    #[test]
    fn test_defend_low_luck_takes_eighty_percent() {
        let mut player = player_with(30, 8, 0.4);
        let mut rng = scripted(&[0.9]);

        player.defend(9, &mut rng);
        // floor(9 * 0.8) = 7
        assert_eq!(player.fighter().health(), 23);
    }

    #[test]
    fn test_lucky_defend_blocks() {
        let mut player = player_with(30, 8, 0.4);
        let mut rng = scripted(&[0.1]);

        let event = player.defend(20, &mut rng);
        assert!(matches!(event, CombatEvent::Blocked { .. }));
        assert_eq!(player.fighter().health(), 30);
    }

    #[test]
    fn test_lucky_escape_heals() {
        let mut player = player_with(30, 8, 0.5);
        let mut rng = scripted(&[0.2]);

        let event = player.escape(10, &mut rng);
        assert_eq!(event.damage(), Some(-3));
        assert_eq!(player.fighter().health(), 33);
    }

    #[test]
    fn test_failed_and_partial_escape() {
        let mut player = player_with(30, 8, 0.5);
        let mut rng = scripted(&[0.9, 0.85]);
        assert!(matches!(
            player.escape(10, &mut rng),
            CombatEvent::EscapeFailed { damage: 10, .. }
        ));
        assert_eq!(player.fighter().health(), 20);

        let mut rng = scripted(&[0.9, 0.6]);
        assert!(matches!(
            player.escape(11, &mut rng),
            CombatEvent::PartialEscape { damage: 5, .. }
        ));
        assert_eq!(player.fighter().health(), 15);
    }

    #[test]
    fn test_action_roll_covers_all_actions() {
        assert_eq!(Action::roll(&mut scripted(&[0.0])), Action::Attack);
        assert_eq!(Action::roll(&mut scripted(&[0.4])), Action::Defend);
        assert_eq!(Action::roll(&mut scripted(&[0.99])), Action::Escape);
        assert_eq!(Action::iter().count(), 3);
    }

    #[test]
    fn test_round_kills_monster_and_grants_experience() {
        let mut player = player_with(30, 8, 0.5);
        let mut monster = monster_with(8, 5, 3);
        let mut rng = scripted(&[0.9, 0.5]);

        let result =
            Combat::resolve_round(&mut player, &mut monster, Action::Attack, &mut rng).unwrap();
        assert!(result.defeated);
        assert_eq!(result.experience, 30);
        assert_eq!(player.experience(), 30);
        assert!(!monster.is_alive());
        assert!(matches!(result.events[1], CombatEvent::Defeated { experience: 30, .. }));
    }

    #[test]
    fn test_round_kill_can_level_up() {
        let mut player = player_with(30, 8, 0.5);
        let mut monster = monster_with(8, 5, 5);
        // miss roll, hit roll, luck redraw
        let mut rng = scripted(&[0.9, 0.5, 0.5]);

        let result =
            Combat::resolve_round(&mut player, &mut monster, Action::Attack, &mut rng).unwrap();
        assert_eq!(result.events.len(), 3);
        assert!(matches!(result.events[2], CombatEvent::LevelUp { level: 2, .. }));
        assert_eq!(player.experience(), 0);
        assert_eq!(player.level_up_experience(), 150);
    }

    #[test]
    fn test_defend_round_uses_monster_attack_power() {
        let mut player = player_with(30, 8, 0.6);
        let mut monster = monster_with(40, 9, 1);
        let mut rng = scripted(&[0.9]);

        let result =
            Combat::resolve_round(&mut player, &mut monster, Action::Defend, &mut rng).unwrap();
        assert!(!result.defeated);
        assert_eq!(player.fighter().health(), 26);
        assert_eq!(monster.fighter().health(), 40);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let run = |seed| {
            let mut rng = GameRng::new(seed);
            let mut player = player_with(30, 8, 0.5);
            let mut monster = monster_with(40, 5, 1);
            let events: Vec<_> = (0..6)
                .map(|_| {
                    let action = Action::roll(&mut rng);
                    Combat::resolve_round(&mut player, &mut monster, action, &mut rng).unwrap()
                })
                .collect();
            (events, player.player(), monster.enemy())
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_combine_results() {
        let mut a = CombatResult::new();
        a.log(CombatEvent::Blocked { defender: "A".into() });
        let mut b = CombatResult::new();
        b.defeated = true;
        b.experience = 20;
        a.combine(b);
        assert!(a.defeated);
        assert_eq!(a.experience, 20);
        assert_eq!(a.events.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_attack_never_heals_target(
            seed in any::<u64>(),
            attack in any::<u32>(),
            luck in 0.0f64..=1.0,
            hp in -10i32..100,
        ) {
            let mut player = player_with(30, attack, luck);
            let mut monster = monster_with(hp, 5, 1);
            let before = monster.fighter().health();
            player.attack(&mut monster, &mut GameRng::new(seed));
            prop_assert!(monster.fighter().health() <= before);
        }

        #[test]
        fn prop_defend_never_heals(
            seed in any::<u64>(),
            incoming in any::<u32>(),
            luck in 0.0f64..=1.0,
        ) {
            let mut player = player_with(30, 5, luck);
            player.defend(incoming, &mut GameRng::new(seed));
            prop_assert!(player.fighter().health() <= 30);
        }

        #[test]
        fn prop_escape_heals_at_most_three(
            seed in any::<u64>(),
            incoming in any::<u32>(),
            luck in 0.0f64..=1.0,
        ) {
            let mut player = player_with(30, 5, luck);
            let event = player.escape(incoming, &mut GameRng::new(seed));
            prop_assert!(player.fighter().health() <= 33);
            if player.fighter().health() > 30 {
                let healed = matches!(event, CombatEvent::Escaped { .. });
                prop_assert!(healed);
            }
        }
    }
}
