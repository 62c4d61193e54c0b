// src/entities/src/game.rs

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::{EntityId, UNASSIGNED_ID};

/// 一局游戏的持久化记录
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: EntityId,
    pub player_id: EntityId,
    pub score: u64,
    pub date: SystemTime,
}

impl Game {
    pub fn new(player_id: EntityId) -> Self {
        Self {
            id: UNASSIGNED_ID,
            player_id,
            score: 0,
            date: SystemTime::now(),
        }
    }
}

/// 游戏与怪物的关联行
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEnemy {
    pub game_id: EntityId,
    pub enemy_id: EntityId,
}

/// 游戏与战利品的关联行
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLoot {
    pub game_id: EntityId,
    pub loot_id: EntityId,
}
