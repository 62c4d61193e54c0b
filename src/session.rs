//! Game record bookkeeping for the persistence side.
//!
//! The engine never assigns ids; everything here carries whatever the
//! caller's storage gave it, or the placeholder id.

use std::time::SystemTime;

use entities::{Enemy, Game, GameEnemy, GameLoot, Loot, Player};
use serde::Serialize;

use crate::summary::GameSummary;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    game: Game,
    player: Player,
    enemies: Vec<Enemy>,
    loot: Vec<Loot>,
}

impl GameSession {
    pub fn new(mut game: Game, player: Player) -> Self {
        game.player_id = player.character.id;
        Self {
            game,
            player,
            enemies: Vec::new(),
            loot: Vec::new(),
        }
    }

    /// Session for a finished run: the whole roster, the collected loot, and
    /// a score equal to the total value of that loot.
    pub fn from_summary(summary: &GameSummary) -> Self {
        let mut session = Self::new(Game::new(summary.player.character.id), summary.player.clone());
        session.game.score = summary.total_loot_value;
        for enemy in &summary.roster {
            session.add_enemy(enemy.clone());
        }
        for loot in &summary.loot {
            session.add_loot(loot.clone());
        }
        session
    }

    /// Reset score, date, enemies and loot for a new run of `player`.
    pub fn start_new_game(&mut self, player: Player) -> &Game {
        self.game.date = SystemTime::now();
        self.game.score = 0;
        self.game.player_id = player.character.id;
        self.player = player;
        self.clear_enemies();
        self.clear_loot();
        &self.game
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn set_score(&mut self, score: u64) {
        self.game.score = score;
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Join rows linking this game to its enemies.
    pub fn game_enemies(&self) -> Vec<GameEnemy> {
        self.enemies
            .iter()
            .map(|enemy| GameEnemy {
                game_id: self.game.id,
                enemy_id: enemy.character.id,
            })
            .collect()
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn clear_enemies(&mut self) {
        self.enemies.clear();
    }

    pub fn loot(&self) -> &[Loot] {
        &self.loot
    }

    /// Join rows linking this game to its loot.
    pub fn game_loot(&self) -> Vec<GameLoot> {
        self.loot
            .iter()
            .map(|loot| GameLoot {
                game_id: self.game.id,
                loot_id: loot.id,
            })
            .collect()
    }

    pub fn add_loot(&mut self, loot: Loot) {
        self.loot.push(loot);
    }

    pub fn clear_loot(&mut self) {
        self.loot.clear();
    }
}
