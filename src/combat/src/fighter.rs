// src/combat/src/fighter.rs
//! Shared combat core wrapped by both players and enemies.

use entities::Character;
use error::GameResult;
use generators::{RandomSource, calculate_luck};
use log::info;

use crate::CombatEvent;

/// Stat gains applied on every level up.
pub mod level_up {
    pub const ATTACK_POWER: u32 = 5;
    pub const HEALTH: i32 = 10;
    /// Luck is redrawn from `[luck, luck + LUCK_STEP)`.
    pub const LUCK_STEP: f64 = 0.1;
}

/// A character record under combat. Health is mutated in place and may go
/// below zero mid-battle; snapshots clamp it back to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    character: Character,
}

impl Fighter {
    /// Wrap a record, failing fast on broken invariants.
    pub fn new(character: Character) -> GameResult<Self> {
        character.validate()?;
        Ok(Self { character })
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn health(&self) -> i32 {
        self.character.health
    }

    pub fn attack_power(&self) -> u32 {
        self.character.attack_power
    }

    pub fn luck(&self) -> f64 {
        self.character.luck
    }

    pub fn level(&self) -> u32 {
        self.character.level
    }

    pub fn is_alive(&self) -> bool {
        self.character.health > 0
    }

    /// Negative damage heals.
    pub fn apply_damage(&mut self, damage: i32) {
        self.character.health = self.character.health.saturating_sub(damage);
    }

    /// Copy of the record with health clamped at zero.
    pub fn snapshot(&self) -> Character {
        let mut character = self.character.clone();
        character.health = character.health.max(0);
        character
    }

    pub fn status_line(&self) -> String {
        format!(
            "Level-{}: Health: {}, Power:{}",
            self.character.level, self.character.health, self.character.attack_power
        )
    }

    /// Level, attack power and health go up; luck ratchets upward.
    pub(crate) fn level_up<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> GameResult<CombatEvent> {
        let c = &mut self.character;
        c.level = c.level.saturating_add(1);
        c.attack_power = c.attack_power.saturating_add(level_up::ATTACK_POWER);
        c.health = c.health.saturating_add(level_up::HEALTH);
        c.luck = calculate_luck(rng, c.luck, c.luck + level_up::LUCK_STEP)?;

        info!("{} has reached level {}!", c.name, c.level);
        Ok(CombatEvent::LevelUp {
            name: c.name.clone(),
            level: c.level,
        })
    }
}
