// src/generators/src/monster.rs

use entities::{Character, EntityId, Enemy};
use error::GameResult;
use log::debug;

use crate::names::{self, MONSTER_PREFIXES, MONSTER_ROOTS, MONSTER_SUFFIXES};
use crate::{CharacterGenerator, RandomSource};

/// Generates monsters. Unlike players, monsters keep their drawn level.
#[derive(Debug)]
pub struct MonsterGenerator<R: RandomSource> {
    stats: CharacterGenerator<R>,
}

impl<R: RandomSource> MonsterGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            stats: CharacterGenerator::new(rng),
        }
    }

    /// A monster carrying a reference to the loot it drops.
    pub fn generate_monster(&mut self, loot_id: EntityId) -> GameResult<Enemy> {
        let name = self.generate_name()?;
        let stats = self.stats.generate_stats();

        let character = Character::new(
            name,
            stats.health,
            stats.attack_power,
            stats.luck,
            stats.level,
        );
        debug!(
            "Generated monster {} (level {}, hp {}, power {})",
            character.name, stats.level, stats.health, stats.attack_power
        );
        Ok(Enemy::new(character, loot_id))
    }

    fn generate_name(&mut self) -> GameResult<String> {
        let rng = self.stats.rng();
        let prefix = names::pick(rng, "monster prefixes", &MONSTER_PREFIXES)?;
        let root = names::pick(rng, "monster roots", &MONSTER_ROOTS)?;
        let suffix = names::pick(rng, "monster suffixes", &MONSTER_SUFFIXES)?;
        Ok(format!("{}{} {}", prefix, root, suffix))
    }
}
