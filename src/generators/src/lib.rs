// src/generators/src/lib.rs
//! Randomized content generation: base stats, players, monsters and loot.
//!
//! Every generator owns its random source. Pass `&mut rng` to share one
//! session-wide source between several generators.

pub mod character;
pub mod loot;
pub mod monster;
pub mod names;
pub mod player;
pub mod rng;

pub use crate::character::{
    CharacterGenerator, StatBlock, calculate_luck, character_from_parts, player_from_parts,
};
pub use crate::loot::{LootGenerator, attack_linked_level};
pub use crate::monster::MonsterGenerator;
pub use crate::player::PlayerGenerator;
pub use crate::rng::{GameRng, RandomSource, ScriptedRng};
