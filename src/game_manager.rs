//! Orchestrates a full game: player, roster, battle loop, summary.

use std::collections::HashMap;

use combat::{EnemyCombatant, PlayerCombatant};
use entities::{Enemy, EntityId, Loot, Player};
use error::{GameError, GameResult};
use generators::{GameRng, PlayerGenerator, RandomSource};
use log::info;

use crate::config::ArenaConfig;
use crate::game_loop::Battle;
use crate::roster::generate_roster;
use crate::summary::GameSummary;

/// Monsters supplied by the caller, with loot referenced by id.
struct StoredRoster {
    enemies: Vec<Enemy>,
    loot: Vec<Loot>,
}

/// Runs one game session start to finish. Each manager owns its random
/// source, so concurrent sessions never share draws.
pub struct GameManager<R: RandomSource = GameRng> {
    config: ArenaConfig,
    rng: R,
    player: Option<Player>,
    stored: Option<StoredRoster>,
}

impl GameManager<GameRng> {
    /// Seeded from the config when it has a seed, from entropy otherwise.
    pub fn new(config: ArenaConfig) -> GameResult<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> GameManager<R> {
    pub fn with_rng(config: ArenaConfig, rng: R) -> GameResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            player: None,
            stored: None,
        })
    }

    /// Fight with an existing player instead of generating one.
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    /// Fight stored monsters instead of generating a roster. Each enemy's
    /// `loot_id` must match one of `loot`.
    pub fn with_stored_roster(mut self, enemies: Vec<Enemy>, loot: Vec<Loot>) -> Self {
        self.stored = Some(StoredRoster { enemies, loot });
        self
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play the whole game and report the outcome.
    pub fn run(mut self) -> GameResult<GameSummary> {
        let player = match self.player.take() {
            Some(player) => player,
            None => self.generate_player()?,
        };
        let player = PlayerCombatant::new(player)?;

        let (monsters, catalog) = match self.stored.take() {
            Some(stored) => Self::stored_monsters(stored)?,
            None => self.generate_monsters()?,
        };
        info!(
            "Starting game with {} monsters (loot scaling {:?})",
            monsters.len(),
            self.config.loot_scaling
        );

        Battle::new(player, monsters, catalog, &mut self.rng).run(self.config.seed)
    }

    fn generate_player(&mut self) -> GameResult<Player> {
        let mut player = PlayerGenerator::new(&mut self.rng).generate_player()?;
        if let Some(name) = &self.config.player_name {
            player.character.name = name.clone();
        }
        Ok(player)
    }

    fn generate_monsters(&mut self) -> GameResult<(Vec<EnemyCombatant>, HashMap<EntityId, Loot>)> {
        let roster = generate_roster(
            &mut self.rng,
            self.config.enemy_count,
            self.config.loot_scaling,
        )?;
        let monsters = roster
            .into_iter()
            .map(|entry| EnemyCombatant::with_loot(entry.enemy, entry.loot))
            .collect::<GameResult<Vec<_>>>()?;
        Ok((monsters, HashMap::new()))
    }

    fn stored_monsters(
        stored: StoredRoster,
    ) -> GameResult<(Vec<EnemyCombatant>, HashMap<EntityId, Loot>)> {
        let mut catalog = HashMap::with_capacity(stored.loot.len());
        for loot in stored.loot {
            if catalog.insert(loot.id, loot).is_some() {
                return Err(GameError::InvalidArgument(
                    "stored loot ids must be unique".to_string(),
                ));
            }
        }
        let monsters = stored
            .enemies
            .into_iter()
            .map(EnemyCombatant::new)
            .collect::<GameResult<Vec<_>>>()?;
        Ok((monsters, catalog))
    }
}
