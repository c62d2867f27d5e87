pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;
pub const SHIP_SIZES: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random candidates tried for a single ship before the whole fleet restarts.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Cap on candidates tried across all fleet restarts.
pub const MAX_GENERATION_ATTEMPTS: usize = 100_000;

/// Random draws the hunting bot makes before scanning the board.
pub const MAX_RANDOM_DRAWS: usize = 1000;

/// Display name for a ship of the given length.
pub fn ship_name(size: usize) -> &'static str {
    match size {
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        1 => "Submarine",
        _ => "Ship",
    }
}
