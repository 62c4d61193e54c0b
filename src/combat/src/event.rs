// src/combat/src/event.rs
//! Narrative events produced by combat actions and the battle loop.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Action;

/// Something that happened during a battle, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// Lucky attack, damage doubled.
    CriticalHit { attacker: String, target: String, damage: i32 },
    Hit { attacker: String, target: String, damage: i32 },
    Miss { attacker: String, target: String },
    /// Lucky defence, nothing gets through.
    Blocked { defender: String },
    Defended { defender: String, damage: i32 },
    /// Lucky escape, the actor heals.
    Escaped { actor: String, healed: i32 },
    EscapeFailed { actor: String, damage: i32 },
    PartialEscape { actor: String, damage: i32 },
    LevelUp { name: String, level: u32 },
    RoundStarted {
        round: usize,
        player_status: String,
        monster_status: String,
        action: Action,
    },
    Defeated { victor: String, defeated: String, experience: u32 },
    LootTaken { name: String, loot: String, value: u32 },
}

impl CombatEvent {
    /// Health change applied by this event; negative damage is healing.
    pub fn damage(&self) -> Option<i32> {
        match self {
            CombatEvent::CriticalHit { damage, .. }
            | CombatEvent::Hit { damage, .. }
            | CombatEvent::Defended { damage, .. }
            | CombatEvent::EscapeFailed { damage, .. }
            | CombatEvent::PartialEscape { damage, .. } => Some(*damage),
            CombatEvent::Miss { .. } | CombatEvent::Blocked { .. } => Some(0),
            CombatEvent::Escaped { healed, .. } => Some(-healed),
            _ => None,
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::CriticalHit { attacker, target, damage } => {
                write!(f, "Critical hit! {} hit {} for {} damage", attacker, target, damage)
            }
            CombatEvent::Hit { attacker, target, damage } => {
                write!(f, "{} hit {} for {} damage", attacker, target, damage)
            }
            CombatEvent::Miss { attacker, target } => write!(f, "{} missed {}!", attacker, target),
            CombatEvent::Blocked { defender } => write!(f, "{} blocked the attack", defender),
            CombatEvent::Defended { defender, damage } => {
                write!(f, "{} defended and took only {} damage!", defender, damage)
            }
            CombatEvent::Escaped { actor, healed } => {
                write!(f, "{} escaped without damage and healed {}!", actor, healed)
            }
            CombatEvent::EscapeFailed { actor, damage } => {
                write!(f, "{} failed to escape and took {} damage!", actor, damage)
            }
            CombatEvent::PartialEscape { actor, damage } => {
                write!(f, "{} escaped but took {} damage!", actor, damage)
            }
            CombatEvent::LevelUp { name, level } => {
                write!(f, "{} has reached level {}!", name, level)
            }
            CombatEvent::RoundStarted {
                round,
                player_status,
                monster_status,
                action,
            } => write!(
                f,
                "[Round-{}] Player {} vs Monster: {} {}!",
                round, player_status, monster_status, action
            ),
            CombatEvent::Defeated {
                victor,
                defeated,
                experience,
            } => write!(
                f,
                "{} defeated {} and gained {} experience",
                victor, defeated, experience
            ),
            CombatEvent::LootTaken { name, loot, value } => {
                write!(f, "{} looted {} worth {}.", name, loot, value)
            }
        }
    }
}
