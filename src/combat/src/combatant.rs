// src/combat/src/combatant.rs

use generators::RandomSource;
use log::info;

use crate::{CombatEvent, Fighter};

/// Draws above `luck + MISS_MARGIN` turn a non-lucky roll into a miss or a
/// failed escape.
pub const MISS_MARGIN: f64 = 0.3;
/// Defence mitigation when luck is above [`HIGH_LUCK`].
pub const HIGH_LUCK_DEFENSE_FACTOR: f64 = 0.5;
/// Defence mitigation otherwise.
pub const LOW_LUCK_DEFENSE_FACTOR: f64 = 0.8;
pub const HIGH_LUCK: f64 = 0.5;
/// Health regained on a lucky escape.
pub const ESCAPE_HEAL: i32 = 3;
pub const PARTIAL_ESCAPE_FACTOR: f64 = 0.5;

/// Attack power as damage, saturating at `i32::MAX` so a hit never heals.
pub(crate) fn as_damage(attack_power: u32) -> i32 {
    i32::try_from(attack_power).unwrap_or(i32::MAX)
}

/// Anything that can fight: a [`Fighter`] core plus role-specific state.
///
/// Every action depends only on the actor's own luck and at most two
/// independent draws; the opponent's luck never enters the roll.
pub trait Combatant {
    fn fighter(&self) -> &Fighter;

    fn fighter_mut(&mut self) -> &mut Fighter;

    fn name(&self) -> &str {
        self.fighter().name()
    }

    fn attack_power(&self) -> u32 {
        self.fighter().attack_power()
    }

    fn is_alive(&self) -> bool {
        self.fighter().is_alive()
    }

    fn status_line(&self) -> String {
        self.fighter().status_line()
    }

    /// Lucky: critical hit for double damage. Otherwise a second draw above
    /// `luck + 0.3` misses, anything else hits for full attack power.
    fn attack<O, R>(&mut self, opponent: &mut O, rng: &mut R) -> CombatEvent
    where
        O: Combatant + ?Sized,
        R: RandomSource + ?Sized,
        Self: Sized,
    {
        let luck = self.fighter().luck();
        let damage = as_damage(self.attack_power());
        let attacker = self.name().to_string();
        let target = opponent.name().to_string();

        let event = if rng.roll_lucky(luck) {
            let damage = damage.saturating_mul(2);
            opponent.fighter_mut().apply_damage(damage);
            CombatEvent::CriticalHit { attacker, target, damage }
        } else if rng.next_unit() > luck + MISS_MARGIN {
            CombatEvent::Miss { attacker, target }
        } else {
            opponent.fighter_mut().apply_damage(damage);
            CombatEvent::Hit { attacker, target, damage }
        };

        info!("{}", event);
        event
    }

    /// Lucky: full block. Otherwise the incoming attack is cut to 50% when
    /// luck is above 0.5, or to 80%.
    fn defend<R>(&mut self, incoming_attack_power: u32, rng: &mut R) -> CombatEvent
    where
        R: RandomSource + ?Sized,
        Self: Sized,
    {
        let luck = self.fighter().luck();
        let defender = self.name().to_string();

        let event = if rng.roll_lucky(luck) {
            CombatEvent::Blocked { defender }
        } else {
            let factor = if luck > HIGH_LUCK {
                HIGH_LUCK_DEFENSE_FACTOR
            } else {
                LOW_LUCK_DEFENSE_FACTOR
            };
            let damage = (incoming_attack_power as f64 * factor).floor() as i32;
            self.fighter_mut().apply_damage(damage);
            CombatEvent::Defended { defender, damage }
        };

        info!("{}", event);
        event
    }

    /// Lucky: escape and heal 3. Otherwise a second draw above `luck + 0.3`
    /// takes the full attack, anything else takes half.
    fn escape<R>(&mut self, incoming_attack_power: u32, rng: &mut R) -> CombatEvent
    where
        R: RandomSource + ?Sized,
        Self: Sized,
    {
        let luck = self.fighter().luck();
        let actor = self.name().to_string();
        let incoming = as_damage(incoming_attack_power);

        let (event, damage) = if rng.roll_lucky(luck) {
            (
                CombatEvent::Escaped {
                    actor,
                    healed: ESCAPE_HEAL,
                },
                -ESCAPE_HEAL,
            )
        } else if rng.next_unit() > luck + MISS_MARGIN {
            (
                CombatEvent::EscapeFailed {
                    actor,
                    damage: incoming,
                },
                incoming,
            )
        } else {
            let damage = (incoming as f64 * PARTIAL_ESCAPE_FACTOR).floor() as i32;
            (CombatEvent::PartialEscape { actor, damage }, damage)
        };
        self.fighter_mut().apply_damage(damage);

        info!("{}", event);
        event
    }
}
