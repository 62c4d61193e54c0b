// src/combat/src/player.rs

use entities::Player;
use entities::player::STARTING_LEVEL_UP_EXPERIENCE;
use error::GameResult;
use generators::RandomSource;

use crate::{CombatEvent, Combatant, Fighter};

/// The player's side of a battle: combat core plus experience tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCombatant {
    fighter: Fighter,
    experience: u32,
    level_up_experience: u32,
}

impl PlayerCombatant {
    pub fn new(player: Player) -> GameResult<Self> {
        Ok(Self {
            fighter: Fighter::new(player.character)?,
            experience: player.experience,
            level_up_experience: player.level_up_experience,
        })
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn level_up_experience(&self) -> u32 {
        self.level_up_experience
    }

    /// Add experience; reaching the threshold levels up once, resets
    /// experience and raises the threshold by `new_level * 50`.
    pub fn gain_experience<R: RandomSource + ?Sized>(
        &mut self,
        amount: u32,
        rng: &mut R,
    ) -> GameResult<Option<CombatEvent>> {
        self.experience = self.experience.saturating_add(amount);
        if self.experience < self.level_up_experience {
            return Ok(None);
        }

        let event = self.fighter.level_up(rng)?;
        self.experience = 0;
        self.level_up_experience = self
            .level_up_experience
            .saturating_add(self.fighter.level() * STARTING_LEVEL_UP_EXPERIENCE);
        Ok(Some(event))
    }

    /// Current state as a record, health clamped at zero.
    pub fn player(&self) -> Player {
        Player::new(
            self.fighter.snapshot(),
            self.experience,
            self.level_up_experience,
        )
    }
}

impl Combatant for PlayerCombatant {
    fn fighter(&self) -> &Fighter {
        &self.fighter
    }

    fn fighter_mut(&mut self) -> &mut Fighter {
        &mut self.fighter
    }

    fn status_line(&self) -> String {
        format!(
            "{} Exp: {}/{}",
            self.fighter.status_line(),
            self.experience,
            self.level_up_experience
        )
    }
}
