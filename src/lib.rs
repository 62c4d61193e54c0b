//! Turn-based combat and content generation for a monster-fighting game.
//!
//! A [`GameManager`] generates (or accepts) a player and a roster of
//! monsters, runs the battle loop until the player dies or every monster
//! is defeated, and returns a [`GameSummary`]. Turning the summary into
//! stored records is up to the caller; [`GameSession`] builds the game
//! record and its join rows.

pub mod config;
pub mod game_loop;
pub mod game_manager;
pub mod roster;
pub mod session;
pub mod summary;

pub use combat::{Action, CombatEvent};
pub use config::{ArenaConfig, LootScaling};
pub use game_loop::{BattlePhase, ROUND_ACTOR, RoundActor};
pub use game_manager::GameManager;
pub use roster::{RosterEntry, generate_roster};
pub use session::GameSession;
pub use summary::{BattleEnd, GameSummary};
