//! End-of-game summary handed back to the caller.

use combat::CombatEvent;
use entities::{Enemy, Loot, Player};
use serde::{Deserialize, Serialize};

/// How the battle loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEnd {
    PlayerDead,
    AllMonstersDefeated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Post-battle player record, health clamped at zero.
    pub player: Player,
    pub alive: bool,
    pub end: BattleEnd,
    /// Loot taken from defeated monsters, in kill order.
    pub loot: Vec<Loot>,
    pub total_loot_value: u64,
    pub defeated: Vec<Enemy>,
    /// Every monster of the session in fight order, fought or not.
    pub roster: Vec<Enemy>,
    pub experience: u32,
    pub rounds: usize,
    pub seed: Option<u64>,
    pub log: Vec<CombatEvent>,
}

impl GameSummary {
    /// Human-readable end-of-game report, one line per entry.
    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(if self.alive {
            "You are Alive!".to_string()
        } else {
            "You are dead!".to_string()
        });

        lines.push(format!("You looted {} items:", self.loot.len()));
        for loot in &self.loot {
            lines.push(format!("* {} worth {}.", loot.name, loot.value));
        }
        lines.push(format!(
            "You ended with {} experience points and {} gold.",
            self.experience, self.total_loot_value
        ));

        lines.push(format!("You killed {} monsters:", self.defeated.len()));
        for enemy in &self.defeated {
            lines.push(format!(
                "* {} (Level {})",
                enemy.character.name, enemy.character.level
            ));
        }
        lines
    }
}
