//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, CliPlayer, Coord, Fleet, GameEngine, GameError, GameStatus, Match, MatchEnd,
    Player, ShotOutcome, Side,
};
