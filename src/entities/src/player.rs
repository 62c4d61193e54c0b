// src/entities/src/player.rs

use serde::{Deserialize, Serialize};

use crate::Character;

/// 玩家初始升级所需经验
pub const STARTING_LEVEL_UP_EXPERIENCE: u32 = 50;

/// 玩家记录：基础属性加经验系统
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(flatten)]
    pub character: Character,
    pub experience: u32,
    pub level_up_experience: u32,
}

impl Player {
    pub fn new(character: Character, experience: u32, level_up_experience: u32) -> Self {
        Self {
            character,
            experience,
            level_up_experience,
        }
    }
}
