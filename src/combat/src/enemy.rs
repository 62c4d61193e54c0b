// src/combat/src/enemy.rs

use std::collections::HashMap;

use entities::{Enemy, EntityId, Loot};
use error::{GameError, GameResult};

use crate::{Combatant, Fighter};

/// Where a defeated enemy's loot lives: a reference resolved through the
/// persistence side, or the record itself.
#[derive(Debug, Clone, PartialEq)]
pub enum LootDrop {
    Reference(EntityId),
    Embedded(Loot),
}

impl LootDrop {
    pub fn id(&self) -> EntityId {
        match self {
            LootDrop::Reference(id) => *id,
            LootDrop::Embedded(loot) => loot.id,
        }
    }

    pub fn resolve<S: LootSource + ?Sized>(&self, source: &S) -> GameResult<Loot> {
        match self {
            LootDrop::Embedded(loot) => Ok(loot.clone()),
            LootDrop::Reference(id) => source
                .find_loot(*id)
                .cloned()
                .ok_or(GameError::NotFound { kind: "loot", id: *id }),
        }
    }
}

/// Lookup of loot records by id.
pub trait LootSource {
    fn find_loot(&self, id: EntityId) -> Option<&Loot>;
}

impl LootSource for [Loot] {
    fn find_loot(&self, id: EntityId) -> Option<&Loot> {
        self.iter().find(|l| l.id == id)
    }
}

impl LootSource for Vec<Loot> {
    fn find_loot(&self, id: EntityId) -> Option<&Loot> {
        self.as_slice().find_loot(id)
    }
}

impl LootSource for HashMap<EntityId, Loot> {
    fn find_loot(&self, id: EntityId) -> Option<&Loot> {
        self.get(&id)
    }
}

/// A monster in battle. No behaviour beyond the shared core.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyCombatant {
    fighter: Fighter,
    loot: LootDrop,
}

impl EnemyCombatant {
    /// Enemy whose loot is resolved later by its `loot_id`.
    pub fn new(enemy: Enemy) -> GameResult<Self> {
        Ok(Self {
            fighter: Fighter::new(enemy.character)?,
            loot: LootDrop::Reference(enemy.loot_id),
        })
    }

    /// Enemy carrying its loot record directly.
    pub fn with_loot(enemy: Enemy, loot: Loot) -> GameResult<Self> {
        Ok(Self {
            fighter: Fighter::new(enemy.character)?,
            loot: LootDrop::Embedded(loot),
        })
    }

    pub fn loot(&self) -> &LootDrop {
        &self.loot
    }

    pub fn level(&self) -> u32 {
        self.fighter.level()
    }

    pub fn enemy(&self) -> Enemy {
        Enemy::new(self.fighter.snapshot(), self.loot.id())
    }
}

impl Combatant for EnemyCombatant {
    fn fighter(&self) -> &Fighter {
        &self.fighter
    }

    fn fighter_mut(&mut self) -> &mut Fighter {
        &mut self.fighter
    }
}
