//! Common types: shot outcomes, sides and engine errors.

use std::fmt;

/// Which side of the table a fleet or an attacker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Bot => write!(f, "bot"),
        }
    }
}

/// Result of resolving a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotOutcome {
    /// The shot landed on a ship cell.
    pub hit: bool,
    /// The shot completed a ship that was not already destroyed.
    pub destroyed: bool,
}

impl ShotOutcome {
    pub const MISS: ShotOutcome = ShotOutcome {
        hit: false,
        destroyed: false,
    };
    pub const HIT: ShotOutcome = ShotOutcome {
        hit: true,
        destroyed: false,
    };
    pub const DESTROYED: ShotOutcome = ShotOutcome {
        hit: true,
        destroyed: true,
    };

    /// Turn-log label: `HIT`, `MISS` or `HIT+DESTROYED`.
    pub fn label(&self) -> &'static str {
        match (self.hit, self.destroyed) {
            (true, true) => "HIT+DESTROYED",
            (true, false) => "HIT",
            _ => "MISS",
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a ship placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Cells are not a straight contiguous run of the expected length.
    WrongShape { expected: usize },
    /// Ship shares a cell with an already placed ship.
    Overlaps,
    /// Ship is adjacent (diagonals included) to an already placed ship.
    Touches,
    /// Every ship of the fleet has already been placed.
    FleetComplete,
    /// The fleet does not have one ship per configured size.
    IncompleteFleet { placed: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongShape { expected } => {
                write!(f, "ship must be {} cells in a straight line", expected)
            }
            PlacementError::Overlaps => write!(f, "ship overlaps with an existing ship"),
            PlacementError::Touches => {
                write!(f, "ships cannot touch each other (even diagonally)")
            }
            PlacementError::FleetComplete => write!(f, "all ships are already placed"),
            PlacementError::IncompleteFleet { placed } => {
                write!(f, "fleet is incomplete: {} ships placed", placed)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Text does not parse as a column letter followed by a row number.
    MalformedCoordinate(String),
    /// Coordinate parsed but lies outside the board.
    OutOfBounds { row: i32, col: i32 },
    /// This attacker has already shot at the coordinate.
    AlreadyTried,
    /// Ship placement violates the fleet rules.
    InvalidPlacement(PlacementError),
    /// The bot found no untried cell to shoot at.
    NoLegalMove,
    /// Random fleet generation ran out of attempts.
    GenerationFailed { attempts: usize },
    /// A shot was fired after the game ended.
    GameOver,
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MalformedCoordinate(s) => {
                write!(f, "invalid coordinate '{}': use a format like A1", s)
            }
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinates out of bounds (row {}, col {})", row, col)
            }
            GameError::AlreadyTried => write!(f, "coordinate was already tried"),
            GameError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            GameError::NoLegalMove => write!(f, "no untried cell left to shoot at"),
            GameError::GenerationFailed { attempts } => {
                write!(f, "could not generate a fleet after {} attempts", attempts)
            }
            GameError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
