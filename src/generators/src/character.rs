// src/generators/src/character.rs
//! Base stat generation shared by players and monsters.

use entities::{Character, Player};
use entities::player::STARTING_LEVEL_UP_EXPERIENCE;
use error::{GameError, GameResult};
use log::warn;

use crate::RandomSource;

/// Fixed stat ranges, all half-open `[min, max)`.
pub mod ranges {
    pub const HEALTH: (i64, i64) = (10, 50);
    pub const ATTACK_POWER: (i64, i64) = (5, 10);
    pub const LUCK: (f64, f64) = (0.25, 0.75);
    pub const LEVEL: (i64, i64) = (1, 5);
}

/// One draw of base stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatBlock {
    pub health: i32,
    pub attack_power: u32,
    pub luck: f64,
    pub level: u32,
}

/// Draws randomized base stats. Stateless apart from its random source.
#[derive(Debug)]
pub struct CharacterGenerator<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> CharacterGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn generate_health(&mut self) -> i32 {
        self.rng.random_int(ranges::HEALTH.0, ranges::HEALTH.1) as i32
    }

    pub fn generate_attack_power(&mut self) -> u32 {
        self.rng.random_int(ranges::ATTACK_POWER.0, ranges::ATTACK_POWER.1) as u32
    }

    pub fn generate_luck(&mut self) -> f64 {
        self.rng.random_float(ranges::LUCK.0, ranges::LUCK.1)
    }

    pub fn generate_level(&mut self) -> u32 {
        self.rng.random_int(ranges::LEVEL.0, ranges::LEVEL.1) as u32
    }

    /// Health, attack power, luck, then level, in that draw order.
    pub fn generate_stats(&mut self) -> StatBlock {
        let health = self.generate_health();
        let attack_power = self.generate_attack_power();
        let luck = self.generate_luck();
        let level = self.generate_level();
        StatBlock {
            health,
            attack_power,
            luck,
            level,
        }
    }
}

/// Draw a luck value in `[min, max)`.
///
/// A range reaching past 1.0 is clamped to `[min, 1.0)` with a warning, so
/// luck ratchets towards 1 but never exceeds it. Ranges that are malformed
/// outright are rejected.
pub fn calculate_luck<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> GameResult<f64> {
    if !min.is_finite() || !max.is_finite() || min < 0.0 || min > 1.0 || max < min {
        return Err(GameError::InvalidLuckRange { min, max });
    }
    let mut range = (max - min).abs();
    if min + range > 1.0 {
        warn!(
            "Luck range [{:.3}, {:.3}) reaches past 1.0, clamping to [{:.3}, 1.0)",
            min, max, min
        );
        range = 1.0 - min;
    }
    Ok(rng.random_float(min, min + range))
}

/// Build a character record from discrete parameters; luck is drawn from the
/// default range.
pub fn character_from_parts<R: RandomSource + ?Sized>(
    rng: &mut R,
    name: impl Into<String>,
    health: i32,
    attack_power: u32,
    level: u32,
) -> GameResult<Character> {
    let luck = calculate_luck(rng, ranges::LUCK.0, ranges::LUCK.1)?;
    let character = Character::new(name, health, attack_power, luck, level);
    character.validate()?;
    Ok(character)
}

/// Build a fresh player record from discrete parameters.
///
/// Experience starts at 0 and the first threshold scales with the level.
pub fn player_from_parts<R: RandomSource + ?Sized>(
    rng: &mut R,
    name: impl Into<String>,
    health: i32,
    attack_power: u32,
    level: u32,
) -> GameResult<Player> {
    let character = character_from_parts(rng, name, health, attack_power, level)?;
    Ok(Player::new(character, 0, level * STARTING_LEVEL_UP_EXPERIENCE))
}
