//! Turn loop between the human side and the bot.

use log::info;
use rand::rngs::SmallRng;

use crate::{
    core::{Coord, GameEngine, GameStatus, ShotOutcome, Side},
    player::Player,
};

/// Everything that happened in one round, as written to the turn log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn: u32,
    pub player_move: Option<Coord>,
    pub player_result: Option<ShotOutcome>,
    pub bot_move: Option<Coord>,
    pub bot_result: Option<ShotOutcome>,
    /// Player ships not yet destroyed after this round.
    pub player_ships_remaining: usize,
    /// Bot ships not yet destroyed after this round.
    pub bot_ships_remaining: usize,
}

/// Destination for completed rounds.
pub trait TurnSink {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()>;
}

impl TurnSink for Vec<TurnRecord> {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    Winner(Side),
    /// The human side left before the game was decided.
    Quit,
}

/// Orchestrates a match: the engine plus the two players.
pub struct Match {
    engine: GameEngine,
    player: Box<dyn Player>,
    bot: Box<dyn Player>,
}

impl Match {
    pub fn new(engine: GameEngine, player: Box<dyn Player>, bot: Box<dyn Player>) -> Self {
        Self {
            engine,
            player,
            bot,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn record(
        &self,
        turn: u32,
        player: (Coord, ShotOutcome),
        bot: Option<(Coord, ShotOutcome)>,
    ) -> TurnRecord {
        TurnRecord {
            turn,
            player_move: Some(player.0),
            player_result: Some(player.1),
            bot_move: bot.map(|b| b.0),
            bot_result: bot.map(|b| b.1),
            player_ships_remaining: self.engine.ships_remaining(Side::Player),
            bot_ships_remaining: self.engine.ships_remaining(Side::Bot),
        }
    }

    /// Play one round: the player's shot, then the bot's unless the player
    /// just won. Returns how the match ended, or `None` if it goes on.
    pub fn play_round(
        &mut self,
        rng: &mut SmallRng,
        sink: &mut dyn TurnSink,
    ) -> anyhow::Result<Option<MatchEnd>> {
        if self.engine.status() != GameStatus::InProgress {
            anyhow::bail!(crate::core::GameError::GameOver);
        }
        let turn = self.engine.begin_round();
        self.player.observe(&self.engine, Side::Player);
        self.bot.observe(&self.engine, Side::Bot);

        let Some(coord) = self
            .player
            .select_target(rng, self.engine.ledger(Side::Player))?
        else {
            info!("player left the game on turn {}", turn);
            return Ok(Some(MatchEnd::Quit));
        };
        let outcome = self.engine.fire(coord, Side::Player)?;
        self.player.handle_guess_result(coord, outcome);
        self.bot.handle_opponent_guess(coord, outcome);

        if let (true, Some(winner)) = self.engine.is_game_over() {
            sink.record(&self.record(turn, (coord, outcome), None))?;
            return Ok(Some(MatchEnd::Winner(winner)));
        }

        let bot_coord = self
            .bot
            .select_target(rng, self.engine.ledger(Side::Bot))?
            .ok_or(crate::core::GameError::NoLegalMove)?;
        let bot_outcome = self.engine.fire(bot_coord, Side::Bot)?;
        self.bot.handle_guess_result(bot_coord, bot_outcome);
        self.player.handle_opponent_guess(bot_coord, bot_outcome);

        let record = self.record(turn, (coord, outcome), Some((bot_coord, bot_outcome)));
        sink.record(&record)?;

        Ok(match self.engine.is_game_over() {
            (true, Some(winner)) => Some(MatchEnd::Winner(winner)),
            _ => None,
        })
    }

    /// Play rounds until someone wins or the player quits.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        sink: &mut dyn TurnSink,
    ) -> anyhow::Result<MatchEnd> {
        info!("match started");
        loop {
            if let Some(end) = self.play_round(rng, sink)? {
                info!("match ended after {} turns: {:?}", self.engine.turn(), end);
                return Ok(end);
            }
        }
    }
}
