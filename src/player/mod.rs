//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: scripted opponent using hunt/target mode
//! - CliPlayer: interactive terminal player

use rand::rngs::SmallRng;

use crate::core::{Coord, Fleet, GameEngine, ShotLedger, ShotOutcome, Side};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its fleet
/// - Selecting targets to attack
/// - Handling feedback from shots
pub trait Player {
    /// Build this player's fleet. `None` means placement was cancelled.
    fn place_ships(&mut self, rng: &mut SmallRng) -> anyhow::Result<Option<Fleet>>;

    /// Choose the next cell to shoot given this player's shot history.
    /// `None` means the player left the game.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        shots: &ShotLedger,
    ) -> anyhow::Result<Option<Coord>>;

    /// Called at the start of every round with the current game.
    fn observe(&mut self, _engine: &GameEngine, _side: Side) {}

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, _coord: Coord, _result: ShotOutcome) {}

    /// Inform the player of an opponent shot against its fleet.
    fn handle_opponent_guess(&mut self, _coord: Coord, _result: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
