use std::env;

use anyhow::{Context, Result, bail};
use loot_arena::{ArenaConfig, GameManager, GameSession};
use serde_json::json;

/// Environment variable consulted for a seed when none is given on the command line.
const SEED_ENV: &str = "LOOT_ARENA_SEED";

struct Options {
    config: ArenaConfig,
    json: bool,
}

fn parse_args() -> Result<Options> {
    let mut config_path = None;
    let mut seed = None;
    let mut enemies = None;
    let mut json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(args.next().context("--config needs a path")?),
            "--seed" => {
                let value = args.next().context("--seed needs a number")?;
                seed = Some(value.parse::<u64>().context("--seed must be an unsigned integer")?);
            }
            "--enemies" => {
                let value = args.next().context("--enemies needs a number")?;
                let count = value
                    .parse::<usize>()
                    .context("--enemies must be an unsigned integer")?;
                enemies = Some(count);
            }
            "--json" => json = true,
            other => bail!(
                "unknown argument '{}' (expected --config, --seed, --enemies, --json)",
                other
            ),
        }
    }

    let mut config = match config_path {
        Some(path) => ArenaConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => ArenaConfig::default(),
    };

    if seed.is_none() {
        if let Ok(value) = env::var(SEED_ENV) {
            let parsed = value
                .parse::<u64>()
                .with_context(|| format!("{} must be an unsigned integer", SEED_ENV))?;
            seed = Some(parsed);
        }
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(count) = enemies {
        config.enemy_count = count;
    }

    Ok(Options { config, json })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_args()?;
    let manager = GameManager::new(options.config)
        .map_err(|e| anyhow::anyhow!(error::handle_error(&e)))?;
    let summary = manager.run().context("game aborted")?;

    for line in summary.report() {
        println!("{}", line);
    }

    if options.json {
        let session = GameSession::from_summary(&summary);
        let output = json!({
            "summary": summary,
            "session": session,
            "gameEnemies": session.game_enemies(),
            "gameLoot": session.game_loot(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
