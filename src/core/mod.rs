//! Core game engine
//!
//! Board geometry, ships and fleets, shot resolution and the bot's targeting
//! logic. Nothing in here performs I/O.

pub mod ai;
pub mod bitboard;
pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use ai::{hunt_move, target_candidates, TargetingState};
pub use bitboard::CellSet;
pub use common::{GameError, PlacementError, ShotOutcome, Side};
pub use config::*;
pub use coord::{adjacent_cells, in_bounds, surrounding_cells, Coord};
pub use fleet::{generate_fleet, ships_touch, Fleet, FleetBuilder};
pub use game::{GameEngine, GameStatus, ShotLedger};
pub use ship::{is_straight_line, Orientation, Ship};
