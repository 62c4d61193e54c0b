// src/entities/src/enemy.rs

use serde::{Deserialize, Serialize};

use crate::{Character, EntityId};

/// 怪物记录，死亡时掉落 `loot_id` 指向的战利品
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    #[serde(flatten)]
    pub character: Character,
    pub loot_id: EntityId,
}

impl Enemy {
    pub fn new(character: Character, loot_id: EntityId) -> Self {
        Self { character, loot_id }
    }
}
