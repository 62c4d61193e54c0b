//! Test helpers for building stored players and rosters with fixed ids.

#![allow(dead_code)]

use entities::{Character, Enemy, EntityId, Loot, Player};

/// A player record as the persistence side would hand it over.
pub fn stored_player(id: EntityId, health: i32, attack_power: u32, luck: f64) -> Player {
    let mut character = Character::new("Hector Ironside", health, attack_power, luck, 1);
    character.id = id;
    Player::new(character, 0, 50)
}

/// Builder for a roster of stored monsters, each with its own loot.
pub struct RosterBuilder {
    enemies: Vec<Enemy>,
    loot: Vec<Loot>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            loot: Vec::new(),
        }
    }

    /// Add a monster; ids are assigned in insertion order starting at 1
    /// for loot and 10 for enemies.
    pub fn monster(mut self, health: i32, attack_power: u32, level: u32, loot_value: u32) -> Self {
        let n = self.enemies.len() as EntityId;

        let mut loot = Loot::new(format!("Enchanted Silver Ring #{}", n + 1), loot_value);
        loot.id = n + 1;

        let name = format!("Flamewing slayer #{}", n + 1);
        let mut character = Character::new(name, health, attack_power, 0.5, level);
        character.id = n + 10;

        self.enemies.push(Enemy::new(character, loot.id));
        self.loot.push(loot);
        self
    }

    pub fn build(self) -> (Vec<Enemy>, Vec<Loot>) {
        (self.enemies, self.loot)
    }
}
