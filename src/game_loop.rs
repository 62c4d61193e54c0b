//! 战斗循环状态机
//!
//! 一局游戏按以下阶段推进：
//! - Setup: 校验参战双方
//! - NextMonster: 取出下一个怪物
//! - InRound: 玩家选择行动并结算
//! - RoundResolved: 检查生死，收集战利品
//! - PlayerDead / AllMonstersDefeated: 终止条件
//! - GameOver: 生成总结
//!
//! 只有玩家行动，怪物永远是被动的一方。

use std::collections::{HashMap, VecDeque};

use combat::{Action, Combat, CombatEvent, Combatant, EnemyCombatant, PlayerCombatant};
use entities::loot::total_value;
use entities::{Enemy, EntityId, Loot};
use error::GameResult;
use generators::RandomSource;
use log::{debug, info, warn};

use crate::summary::{BattleEnd, GameSummary};

/// 战斗循环所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// 初始阶段，尚未开始任何回合
    Setup,
    /// 取下一个怪物
    NextMonster,
    /// 回合进行中
    InRound,
    /// 回合已结算，等待生死判定
    RoundResolved,
    /// 玩家死亡，剩余怪物不再参战
    PlayerDead,
    /// 所有怪物都已击败
    AllMonstersDefeated,
    /// 终止状态
    GameOver,
}

/// 哪一方在回合中行动
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundActor {
    Player,
}

/// 每回合的行动方。怪物只提供攻击力作为输入，从不主动行动。
pub const ROUND_ACTOR: RoundActor = RoundActor::Player;

/// 单局战斗，从开始一直运行到结束，不暴露中间状态
pub(crate) struct Battle<'r, R: RandomSource> {
    phase: BattlePhase,
    rng: &'r mut R,
    player: PlayerCombatant,
    pending: VecDeque<EnemyCombatant>,
    current: Option<EnemyCombatant>,
    /// 引用型战利品的查找表
    catalog: HashMap<EntityId, Loot>,
    monster_number: usize,
    rounds: usize,
    roster: Vec<Enemy>,
    loot: Vec<Loot>,
    defeated: Vec<Enemy>,
    log: Vec<CombatEvent>,
    end: Option<BattleEnd>,
}

impl<'r, R: RandomSource> Battle<'r, R> {
    pub(crate) fn new(
        player: PlayerCombatant,
        monsters: Vec<EnemyCombatant>,
        catalog: HashMap<EntityId, Loot>,
        rng: &'r mut R,
    ) -> Self {
        let roster = monsters.iter().map(EnemyCombatant::enemy).collect();
        Self {
            phase: BattlePhase::Setup,
            rng,
            player,
            pending: monsters.into(),
            current: None,
            catalog,
            monster_number: 0,
            rounds: 0,
            roster,
            loot: Vec::new(),
            defeated: Vec::new(),
            log: Vec::new(),
            end: None,
        }
    }

    /// 运行到 GameOver 并生成总结
    pub(crate) fn run(mut self, seed: Option<u64>) -> GameResult<GameSummary> {
        while self.phase != BattlePhase::GameOver {
            let next = self.advance()?;
            debug!("Battle phase {:?} -> {:?}", self.phase, next);
            match next {
                BattlePhase::PlayerDead => self.end = Some(BattleEnd::PlayerDead),
                BattlePhase::AllMonstersDefeated => self.end = Some(BattleEnd::AllMonstersDefeated),
                _ => {}
            }
            self.phase = next;
        }
        Ok(self.into_summary(seed))
    }

    fn advance(&mut self) -> GameResult<BattlePhase> {
        match self.phase {
            BattlePhase::Setup => self.setup(),
            BattlePhase::NextMonster => Ok(self.next_monster()),
            BattlePhase::InRound => self.play_round(),
            BattlePhase::RoundResolved => self.after_round(),
            BattlePhase::PlayerDead | BattlePhase::AllMonstersDefeated => {
                Ok(BattlePhase::GameOver)
            }
            BattlePhase::GameOver => Ok(BattlePhase::GameOver),
        }
    }

    fn setup(&mut self) -> GameResult<BattlePhase> {
        // 引用型战利品必须能解析，否则在开战前失败
        for monster in &self.pending {
            monster.loot().resolve(&self.catalog)?;
        }
        info!(
            "Welcome {}! {}",
            self.player.name(),
            self.player.status_line()
        );

        if !self.player.is_alive() {
            return Ok(BattlePhase::PlayerDead);
        }
        Ok(BattlePhase::NextMonster)
    }

    fn next_monster(&mut self) -> BattlePhase {
        while let Some(monster) = self.pending.pop_front() {
            self.monster_number += 1;
            if monster.is_alive() {
                self.current = Some(monster);
                return BattlePhase::InRound;
            }
            warn!("{} is already dead, skipping it", monster.name());
        }
        self.current = None;
        BattlePhase::AllMonstersDefeated
    }

    fn play_round(&mut self) -> GameResult<BattlePhase> {
        let Some(monster) = self.current.as_mut() else {
            return Ok(BattlePhase::NextMonster);
        };
        if !self.player.is_alive() || !monster.is_alive() {
            return Ok(BattlePhase::RoundResolved);
        }

        let action = match ROUND_ACTOR {
            RoundActor::Player => Action::roll(self.rng),
        };
        let banner = CombatEvent::RoundStarted {
            round: self.monster_number,
            player_status: self.player.status_line(),
            monster_status: monster.status_line(),
            action,
        };
        info!("{}", banner);
        self.log.push(banner);

        let result = Combat::resolve_round(&mut self.player, monster, action, self.rng)?;
        self.log.extend(result.events);
        self.rounds += 1;
        Ok(BattlePhase::RoundResolved)
    }

    fn after_round(&mut self) -> GameResult<BattlePhase> {
        let monster_dead = self.current.as_ref().is_some_and(|m| !m.is_alive());

        if monster_dead {
            if let Some(monster) = self.current.take() {
                let loot = monster.loot().resolve(&self.catalog)?;
                let event = CombatEvent::LootTaken {
                    name: self.player.name().to_string(),
                    loot: loot.name.clone(),
                    value: loot.value,
                };
                info!("{}", event);
                self.log.push(event);
                self.loot.push(loot);

                let record = monster.enemy();
                if let Some(slot) = self.roster.get_mut(self.monster_number - 1) {
                    *slot = record.clone();
                }
                self.defeated.push(record);
            }
        }

        if !self.player.is_alive() {
            return Ok(BattlePhase::PlayerDead);
        }
        if monster_dead {
            Ok(BattlePhase::NextMonster)
        } else {
            Ok(BattlePhase::InRound)
        }
    }

    fn into_summary(self, seed: Option<u64>) -> GameSummary {
        let alive = self.player.is_alive();
        let end = self.end.unwrap_or(if alive {
            BattleEnd::AllMonstersDefeated
        } else {
            BattleEnd::PlayerDead
        });
        let mut roster = self.roster;
        if let Some(monster) = &self.current {
            if let Some(slot) = roster.get_mut(self.monster_number - 1) {
                *slot = monster.enemy();
            }
        }

        GameSummary {
            player: self.player.player(),
            alive,
            end,
            total_loot_value: total_value(&self.loot),
            loot: self.loot,
            defeated: self.defeated,
            roster,
            experience: self.player.experience(),
            rounds: self.rounds,
            seed,
            log: self.log,
        }
    }
}
