use log::debug;

use crate::core::{
    bitboard::CellSet,
    common::{GameError, ShotOutcome, Side},
    coord::{surrounding_cells, Coord},
    fleet::Fleet,
};

/// One attacker's record of shots against the opposing fleet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotLedger {
    pub hits: CellSet,
    pub misses: CellSet,
}

impl ShotLedger {
    /// Cells already hit or missed.
    pub fn tried(&self) -> CellSet {
        self.hits | self.misses
    }

    pub fn is_tried(&self, coord: Coord) -> bool {
        self.hits.contains(coord) || self.misses.contains(coord)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    BotWon,
}

/// A fleet together with the destroyed flag of each ship.
#[derive(Debug, Clone)]
struct FleetState {
    fleet: Fleet,
    destroyed: Vec<bool>,
}

impl FleetState {
    fn new(fleet: Fleet) -> Self {
        let destroyed = vec![false; fleet.len()];
        FleetState { fleet, destroyed }
    }

    fn all_destroyed(&self) -> bool {
        self.destroyed.iter().all(|&d| d)
    }

    fn remaining(&self) -> usize {
        self.destroyed.iter().filter(|&&d| !d).count()
    }
}

/// Core game logic: both fleets, both shot ledgers and the round counter.
#[derive(Debug, Clone)]
pub struct GameEngine {
    player: FleetState,
    bot: FleetState,
    player_shots: ShotLedger,
    bot_shots: ShotLedger,
    turn: u32,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game from two finished fleets.
    pub fn new(player_fleet: Fleet, bot_fleet: Fleet) -> Self {
        Self {
            player: FleetState::new(player_fleet),
            bot: FleetState::new(bot_fleet),
            player_shots: ShotLedger::default(),
            bot_shots: ShotLedger::default(),
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    fn defender(&self, attacker: Side) -> &FleetState {
        match attacker {
            Side::Player => &self.bot,
            Side::Bot => &self.player,
        }
    }

    fn fleet_state(&self, side: Side) -> &FleetState {
        match side {
            Side::Player => &self.player,
            Side::Bot => &self.bot,
        }
    }

    /// Shots fired by `attacker`.
    pub fn ledger(&self, attacker: Side) -> &ShotLedger {
        match attacker {
            Side::Player => &self.player_shots,
            Side::Bot => &self.bot_shots,
        }
    }

    /// Fleet owned by `side`.
    pub fn fleet(&self, side: Side) -> &Fleet {
        &self.fleet_state(side).fleet
    }

    /// Destroyed flags, parallel to `fleet(side).ships()`.
    pub fn destroyed(&self, side: Side) -> &[bool] {
        &self.fleet_state(side).destroyed
    }

    /// Ships of `side` that are still afloat.
    pub fn ships_remaining(&self, side: Side) -> usize {
        self.fleet_state(side).remaining()
    }

    /// Completed or in-progress round number; 0 before the first round.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Advance to the next round and return its number (first round is 1).
    pub fn begin_round(&mut self) -> u32 {
        self.turn += 1;
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True iff `coord` is in neither of `attacker`'s hit or miss sets.
    pub fn is_valid_move(&self, coord: Coord, attacker: Side) -> bool {
        !self.ledger(attacker).is_tried(coord)
    }

    /// Resolve a shot by `attacker` at `coord` against the defending fleet.
    ///
    /// A newly destroyed ship seals its surrounding ring as misses for the
    /// attacker. Hits on an already destroyed ship report `(true, false)`.
    /// No duplicate or terminal-state check is made here; see [`fire`].
    ///
    /// [`fire`]: GameEngine::fire
    pub fn resolve_shot(&mut self, coord: Coord, attacker: Side) -> ShotOutcome {
        let (defender, ledger) = match attacker {
            Side::Player => (&mut self.bot, &mut self.player_shots),
            Side::Bot => (&mut self.player, &mut self.bot_shots),
        };

        let Some(idx) = defender.fleet.ship_at(coord) else {
            ledger.misses.insert(coord);
            return ShotOutcome::MISS;
        };

        ledger.hits.insert(coord);
        let ship = defender.fleet.ships()[idx];
        if defender.destroyed[idx] || !ship.is_sunk_by(&ledger.hits) {
            return ShotOutcome::HIT;
        }

        defender.destroyed[idx] = true;
        let ring = surrounding_cells(&ship.cells()) - ledger.hits;
        ledger.misses |= ring;
        debug!(
            "{} destroyed {:?}, sealed {} surrounding cells",
            attacker,
            ship,
            ring.len()
        );
        ShotOutcome::DESTROYED
    }

    /// Validated shot: rejects repeats and shots after the game ended, then
    /// resolves the shot and updates the game status.
    pub fn fire(&mut self, coord: Coord, attacker: Side) -> Result<ShotOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if !self.is_valid_move(coord, attacker) {
            return Err(GameError::AlreadyTried);
        }
        let outcome = self.resolve_shot(coord, attacker);
        debug!("turn {}: {} fires at {} -> {}", self.turn, attacker, coord, outcome);
        self.refresh_status();
        Ok(outcome)
    }

    fn refresh_status(&mut self) {
        self.status = match self.is_game_over() {
            (true, Some(Side::Player)) => GameStatus::PlayerWon,
            (true, Some(Side::Bot)) => GameStatus::BotWon,
            _ => GameStatus::InProgress,
        };
    }

    /// Whether one fleet is fully destroyed, and who won.
    pub fn is_game_over(&self) -> (bool, Option<Side>) {
        if self.bot.all_destroyed() {
            (true, Some(Side::Player))
        } else if self.player.all_destroyed() {
            (true, Some(Side::Bot))
        } else {
            (false, None)
        }
    }

    /// Whether `attacker` has destroyed the ship covering `coord`.
    pub fn is_destroyed_at(&self, coord: Coord, attacker: Side) -> bool {
        let defender = self.defender(attacker);
        defender
            .fleet
            .ship_at(coord)
            .map(|i| defender.destroyed[i])
            .unwrap_or(false)
    }
}
