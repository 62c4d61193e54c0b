// src/generators/src/player.rs

use entities::player::STARTING_LEVEL_UP_EXPERIENCE;
use entities::{Character, Player};
use error::GameResult;
use log::debug;

use crate::names::{self, PLAYER_FIRST_NAMES, PLAYER_LAST_NAMES, PLAYER_TITLES};
use crate::{CharacterGenerator, RandomSource};

/// Chance that a generated name carries an honorific title.
const TITLE_CHANCE: f64 = 0.5;

/// Generates level-1 players.
#[derive(Debug)]
pub struct PlayerGenerator<R: RandomSource> {
    stats: CharacterGenerator<R>,
}

impl<R: RandomSource> PlayerGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            stats: CharacterGenerator::new(rng),
        }
    }

    /// A fresh player: random health, attack power and luck, level 1,
    /// no experience, first threshold at 50.
    pub fn generate_player(&mut self) -> GameResult<Player> {
        let name = self.generate_name()?;
        let health = self.stats.generate_health();
        let attack_power = self.stats.generate_attack_power();
        let luck = self.stats.generate_luck();

        let character = Character::new(name, health, attack_power, luck, 1);
        debug!(
            "Generated player {} (hp {}, power {}, luck {:.2})",
            character.name, health, attack_power, luck
        );
        Ok(Player::new(character, 0, STARTING_LEVEL_UP_EXPERIENCE))
    }

    fn generate_name(&mut self) -> GameResult<String> {
        let rng = self.stats.rng();
        let first = names::pick(rng, "player first names", &PLAYER_FIRST_NAMES)?;
        let last = names::pick(rng, "player last names", &PLAYER_LAST_NAMES)?;
        let title = names::pick(rng, "player titles", &PLAYER_TITLES)?;

        if rng.next_unit() < TITLE_CHANCE {
            Ok(format!("{} {} {}", first, last, title))
        } else {
            Ok(format!("{} {}", first, last))
        }
    }
}
