//! Monster roster generation: one freshly generated loot item per monster.

use entities::{Enemy, Loot, UNASSIGNED_ID};
use error::GameResult;
use generators::{LootGenerator, MonsterGenerator, RandomSource, attack_linked_level};
use log::debug;

use crate::config::LootScaling;

/// A monster paired with the loot it drops.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub enemy: Enemy,
    pub loot: Loot,
}

/// Generate `count` monsters in fight order.
///
/// Monster stats and loot are independent draws. With
/// [`LootScaling::AttackLinked`] the monster is drawn first so its attack
/// power can set the loot level; otherwise the loot comes first, as its id is
/// what the monster refers to.
pub fn generate_roster<R: RandomSource>(
    rng: &mut R,
    count: usize,
    scaling: LootScaling,
) -> GameResult<Vec<RosterEntry>> {
    let mut roster = Vec::with_capacity(count);

    for i in 0..count {
        let entry = match scaling {
            LootScaling::AttackLinked => {
                let mut enemy = MonsterGenerator::new(&mut *rng).generate_monster(UNASSIGNED_ID)?;
                let level = attack_linked_level(enemy.character.attack_power);
                let loot = LootGenerator::new(&mut *rng).generate_loot(level)?;
                enemy.loot_id = loot.id;
                RosterEntry { enemy, loot }
            }
            LootScaling::Fixed { level } => paired(rng, level)?,
            LootScaling::RandomLevel { min, max } => {
                let level = rng.random_int(min, max);
                paired(rng, level)?
            }
        };
        debug!(
            "Roster[{}]: {} carries {} worth {}",
            i, entry.enemy.character.name, entry.loot.name, entry.loot.value
        );
        roster.push(entry);
    }

    Ok(roster)
}

fn paired<R: RandomSource>(rng: &mut R, level: i64) -> GameResult<RosterEntry> {
    let loot = LootGenerator::new(&mut *rng).generate_loot(level)?;
    let enemy = MonsterGenerator::new(&mut *rng).generate_monster(loot.id)?;
    Ok(RosterEntry { enemy, loot })
}
