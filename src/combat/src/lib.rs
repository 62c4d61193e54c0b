// src/combat/src/lib.rs
//! Turn-based combat between a player and one monster at a time.

use error::GameResult;
use generators::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

pub mod combatant;
pub mod enemy;
pub mod event;
pub mod fighter;
pub mod player;

#[cfg(test)]
mod tests;

pub use crate::combatant::Combatant;
pub use crate::enemy::{EnemyCombatant, LootDrop, LootSource};
pub use crate::event::CombatEvent;
pub use crate::fighter::Fighter;
pub use crate::player::PlayerCombatant;

/// Experience granted per level of a defeated monster.
pub const EXPERIENCE_PER_MONSTER_LEVEL: u32 = 10;

/// What the player does in a round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Action {
    Attack = 1,
    Defend = 2,
    Escape = 3,
}

impl Action {
    /// Uniform pick over the three actions, drawn as an integer in `[1, 4)`.
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Action {
        let selector = rng.random_int(1, 4) as u8;
        Action::from_repr(selector).unwrap_or(Action::Attack)
    }
}

/// Handles combat interactions between the player and a monster
pub struct Combat;

impl Combat {
    /// Resolve one round. Only the player acts: the monster is the target of
    /// an attack and supplies its attack power to defend and escape, but never
    /// takes an action of its own.
    pub fn resolve_round<R: RandomSource + ?Sized>(
        player: &mut PlayerCombatant,
        monster: &mut EnemyCombatant,
        action: Action,
        rng: &mut R,
    ) -> GameResult<CombatResult> {
        let mut result = CombatResult::new();

        let event = match action {
            Action::Attack => player.attack(monster, rng),
            Action::Defend => player.defend(monster.attack_power(), rng),
            Action::Escape => player.escape(monster.attack_power(), rng),
        };
        result.log(event);

        if !monster.is_alive() {
            let experience = monster.level() * EXPERIENCE_PER_MONSTER_LEVEL;
            debug!("{} dropped to {} health", monster.name(), monster.fighter().health());
            result.log(CombatEvent::Defeated {
                victor: player.name().to_string(),
                defeated: monster.name().to_string(),
                experience,
            });
            result.defeated = true;
            result.experience = experience;

            if let Some(level_up) = player.gain_experience(experience, rng)? {
                result.log(level_up);
            }
        }

        Ok(result)
    }
}

/// Combat result with the events it produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatResult {
    pub events: Vec<CombatEvent>,
    pub defeated: bool,  // Whether the monster was defeated
    pub experience: u32, // Experience gained (if any)
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    pub fn combine(&mut self, other: CombatResult) {
        self.events.extend(other.events);
        self.defeated = self.defeated || other.defeated;
        self.experience += other.experience;
    }
}
