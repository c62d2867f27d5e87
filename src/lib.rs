pub mod core;
mod logging;
pub mod persist;
pub mod player;
pub mod prelude;
pub mod session;
pub mod ui;

pub use crate::core::*;
pub use logging::init_logging;
pub use persist::{
    load_fleet, read_fleet, read_standard_fleet, save_fleet, write_fleet, CsvTurnLog,
};
pub use player::{AiPlayer, CliPlayer, Player};
pub use session::{Match, MatchEnd, TurnRecord, TurnSink};
