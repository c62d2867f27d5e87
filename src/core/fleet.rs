//! Fleets: placement validation and random generation.

use log::{debug, trace};
use rand::Rng;

use crate::core::bitboard::CellSet;
use crate::core::common::{GameError, PlacementError};
use crate::core::config::{BOARD_SIZE, MAX_GENERATION_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS, SHIP_SIZES};
use crate::core::coord::{adjacent_cells, Coord};
use crate::core::ship::{Orientation, Ship};

/// A validated, immutable set of ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    occupied: CellSet,
}

impl Fleet {
    /// Validate an arbitrary list of ships against the overlap and touch rules.
    pub fn from_ships(ships: Vec<Ship>) -> Result<Self, PlacementError> {
        let sizes: Vec<usize> = ships.iter().map(Ship::size).collect();
        Self::build(FleetBuilder::new(&sizes), ships)
    }

    /// Like [`Fleet::from_ships`], but the ships must match [`SHIP_SIZES`]
    /// one for one, in order.
    pub fn standard_from_ships(ships: Vec<Ship>) -> Result<Self, PlacementError> {
        Self::build(FleetBuilder::standard(), ships)
    }

    fn build(mut builder: FleetBuilder, ships: Vec<Ship>) -> Result<Self, PlacementError> {
        for ship in ships {
            builder.place(ship)?;
        }
        builder.finish()
    }

    /// Generate a random fleet with one ship per entry of [`SHIP_SIZES`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        generate_fleet(rng, &SHIP_SIZES)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Union of every ship's cells.
    pub fn occupied(&self) -> CellSet {
        self.occupied
    }

    /// Index of the ship covering `coord`.
    pub fn ship_at(&self, coord: Coord) -> Option<usize> {
        if !self.occupied.contains(coord) {
            return None;
        }
        self.ships.iter().position(|s| s.contains(coord))
    }
}

/// Returns true iff any cell of `candidate` equals or is 8-adjacent to a cell
/// of any ship in `existing`.
pub fn ships_touch(candidate: &CellSet, existing: &[Ship]) -> bool {
    let mut halo = *candidate;
    for cell in candidate {
        halo |= adjacent_cells(cell, true);
    }
    existing.iter().any(|ship| halo.intersects(&ship.cells()))
}

/// Incremental fleet placement, one ship at a time in size-list order.
#[derive(Debug, Clone)]
pub struct FleetBuilder {
    sizes: Vec<usize>,
    ships: Vec<Ship>,
    occupied: CellSet,
}

impl FleetBuilder {
    pub fn new(sizes: &[usize]) -> Self {
        FleetBuilder {
            sizes: sizes.to_vec(),
            ships: Vec::with_capacity(sizes.len()),
            occupied: CellSet::new(),
        }
    }

    /// Builder for the standard fleet.
    pub fn standard() -> Self {
        FleetBuilder::new(&SHIP_SIZES)
    }

    /// Size of the next ship to place, or `None` when the fleet is complete.
    pub fn next_size(&self) -> Option<usize> {
        self.sizes.get(self.ships.len()).copied()
    }

    /// Ships placed so far.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn is_complete(&self) -> bool {
        self.ships.len() == self.sizes.len()
    }

    /// Check a candidate against the ships placed so far without adding it.
    pub fn check(&self, ship: &Ship) -> Result<(), PlacementError> {
        let expected = self.next_size().ok_or(PlacementError::FleetComplete)?;
        if ship.size() != expected {
            return Err(PlacementError::WrongShape { expected });
        }
        if ship.cells().intersects(&self.occupied) {
            return Err(PlacementError::Overlaps);
        }
        if ships_touch(&ship.cells(), &self.ships) {
            return Err(PlacementError::Touches);
        }
        Ok(())
    }

    /// Validate and add the next ship.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlacementError> {
        self.check(&ship)?;
        self.occupied |= ship.cells();
        self.ships.push(ship);
        Ok(())
    }

    /// Validate raw cells as the next ship and add it.
    pub fn place_cells(&mut self, coords: &[Coord]) -> Result<(), PlacementError> {
        let expected = self.next_size().ok_or(PlacementError::FleetComplete)?;
        let ship = Ship::from_cells(coords, expected)?;
        self.place(ship)
    }

    /// Finish placement; every size must have a ship.
    pub fn finish(self) -> Result<Fleet, PlacementError> {
        if !self.is_complete() {
            return Err(PlacementError::IncompleteFleet {
                placed: self.ships.len(),
            });
        }
        Ok(Fleet {
            ships: self.ships,
            occupied: self.occupied,
        })
    }
}

/// Random straight ship of `size` that fits on the board.
fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Ship, GameError> {
    let n = BOARD_SIZE as usize;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orientation {
        Orientation::Horizontal => (n - 1, n - size),
        Orientation::Vertical => (n - size, n - 1),
    };
    let r = rng.random_range(0..=max_r);
    let c = rng.random_range(0..=max_c);
    Ship::new(orientation, r as i32, c as i32, size)
}

/// Generate a fleet for `sizes`. A ship that fails [`MAX_PLACEMENT_ATTEMPTS`]
/// times restarts the whole fleet; [`MAX_GENERATION_ATTEMPTS`] bounds the
/// total number of candidates tried.
pub fn generate_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    sizes: &[usize],
) -> Result<Fleet, GameError> {
    let limits = Limits {
        per_ship: MAX_PLACEMENT_ATTEMPTS,
        total: MAX_GENERATION_ATTEMPTS,
    };
    generate_with_limits(rng, sizes, limits).map(|(fleet, _)| fleet)
}

#[derive(Debug, Clone, Copy)]
struct Limits {
    per_ship: usize,
    total: usize,
}

/// Returns the fleet and the number of whole-fleet restarts it took.
fn generate_with_limits<R: Rng + ?Sized>(
    rng: &mut R,
    sizes: &[usize],
    limits: Limits,
) -> Result<(Fleet, usize), GameError> {
    let n = BOARD_SIZE as usize;
    if let Some(&size) = sizes.iter().find(|&&s| s == 0 || s > n) {
        return Err(GameError::InvalidPlacement(PlacementError::WrongShape {
            expected: size,
        }));
    }

    let mut total_attempts = 0usize;
    let mut restarts = 0usize;
    'fleet: loop {
        let mut builder = FleetBuilder::new(sizes);
        while let Some(size) = builder.next_size() {
            let mut placed = false;
            for _ in 0..limits.per_ship {
                if total_attempts >= limits.total {
                    debug!("fleet generation gave up after {} restarts", restarts);
                    return Err(GameError::GenerationFailed {
                        attempts: total_attempts,
                    });
                }
                total_attempts += 1;
                let ship = random_ship(rng, size)?;
                if builder.place(ship).is_ok() {
                    placed = true;
                    break;
                }
            }
            if !placed {
                restarts += 1;
                trace!(
                    "no room for ship of size {} after {} tries, restarting fleet",
                    size,
                    limits.per_ship
                );
                continue 'fleet;
            }
        }
        debug!(
            "generated fleet in {} attempts ({} restarts)",
            total_attempts, restarts
        );
        return builder.finish().map(|fleet| (fleet, restarts)).map_err(GameError::from);
    }
}
