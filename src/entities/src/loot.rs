// src/entities/src/loot.rs

use serde::{Deserialize, Serialize};

use crate::{EntityId, UNASSIGNED_ID};

/// 战利品，按 id 引用的不可变值对象
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loot {
    pub id: EntityId,
    pub name: String,
    /// 经济价值
    pub value: u32,
}

impl Loot {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            value,
        }
    }
}

/// 战利品列表的总价值
pub fn total_value(loot: &[Loot]) -> u64 {
    loot.iter().map(|l| u64::from(l.value)).sum()
}
