// src/entities/src/lib.rs
//! 战斗引擎消费和产出的纯数据记录
//!
//! 记录本身不包含任何战斗逻辑。持久化层负责分配 id，引擎创建的新实体
//! 一律使用占位 id [`UNASSIGNED_ID`]。

pub mod character;
pub mod enemy;
pub mod game;
pub mod loot;
pub mod player;

pub use crate::character::Character;
pub use crate::enemy::Enemy;
pub use crate::game::{Game, GameEnemy, GameLoot};
pub use crate::loot::Loot;
pub use crate::player::Player;

/// 持久化层分配的不透明标识
pub type EntityId = u64;

/// 尚未持久化的实体使用的占位 id
pub const UNASSIGNED_ID: EntityId = 0;
