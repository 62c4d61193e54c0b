// src/generators/src/loot.rs

use entities::Loot;
use error::GameResult;
use log::debug;

use crate::RandomSource;
use crate::names::{self, LOOT_ITEMS, LOOT_MATERIALS, LOOT_PREFIXES};

/// Base loot value range, scaled by level.
pub const BASE_VALUE: (i64, i64) = (10, 50);

/// Generates named, valued loot.
#[derive(Debug)]
pub struct LootGenerator<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> LootGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one loot item worth `randomInt(10, 50) * level`.
    ///
    /// Levels below 1 count as 1. The id stays unassigned.
    pub fn generate_loot(&mut self, level: i64) -> GameResult<Loot> {
        let name = self.generate_item_name()?;
        let value = self.calculate_value(level);
        debug!("Generated loot '{}' worth {} (level {})", name, value, level);
        Ok(Loot::new(name, value))
    }

    fn generate_item_name(&mut self) -> GameResult<String> {
        let prefix = names::pick(&mut self.rng, "loot prefixes", &LOOT_PREFIXES)?;
        let item = names::pick(&mut self.rng, "loot items", &LOOT_ITEMS)?;
        let material = names::pick(&mut self.rng, "loot materials", &LOOT_MATERIALS)?;
        Ok(format!("{} {} {}", prefix, material, item))
    }

    fn calculate_value(&mut self, level: i64) -> u32 {
        let level = level.max(1) as u64;
        let base = self.rng.random_int(BASE_VALUE.0, BASE_VALUE.1) as u64;
        u32::try_from(base.saturating_mul(level)).unwrap_or(u32::MAX)
    }
}

/// Loot level linked to a monster's attack power: `ceil(attackPower / 10)`.
pub fn attack_linked_level(attack_power: u32) -> i64 {
    i64::from(attack_power.div_ceil(10))
}
