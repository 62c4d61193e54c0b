// src/entities/src/character.rs

use error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

use crate::{EntityId, UNASSIGNED_ID};

/// 玩家和怪物共享的基础战斗属性
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    /// 当前生命值，战斗中可能暂时低于0
    pub health: i32,
    pub attack_power: u32,
    /// 有利结果的概率权重，始终位于 [0, 1]
    pub luck: f64,
    pub level: u32,
}

impl Character {
    /// 创建未持久化的角色记录
    pub fn new(
        name: impl Into<String>,
        health: i32,
        attack_power: u32,
        luck: f64,
        level: u32,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            health,
            attack_power,
            luck,
            level,
        }
    }

    /// 检查记录不变量：等级至少为1，幸运值位于 [0, 1]
    pub fn validate(&self) -> GameResult<()> {
        if self.level < 1 {
            return Err(GameError::InvalidCharacter(format!(
                "{} has level {}, expected at least 1",
                self.name, self.level
            )));
        }
        if !(0.0..=1.0).contains(&self.luck) {
            return Err(GameError::InvalidCharacter(format!(
                "{} has luck {}, expected a value in [0, 1]",
                self.name, self.luck
            )));
        }
        Ok(())
    }

    /// 是否存活
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_is_unassigned() {
        let c = Character::new("Rat", 10, 4, 0.5, 1);
        assert_eq!(c.id, UNASSIGNED_ID);
        assert!(c.is_alive());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_level_zero() {
        let c = Character::new("Rat", 10, 4, 0.5, 0);
        assert!(matches!(c.validate(), Err(GameError::InvalidCharacter(_))));
    }

    #[test]
    fn test_validate_rejects_luck_out_of_range() {
        let c = Character::new("Rat", 10, 4, 1.5, 1);
        assert!(c.validate().is_err());
        let c = Character::new("Rat", 10, 4, f64::NAN, 1);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let c = Character::new("Rat", 10, 4, 0.5, 1);
        let json = serde_json::to_string(&c).expect("serialize");
        assert!(json.contains("\"attackPower\":4"));
    }
}
