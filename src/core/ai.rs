// Hunt/target shot selection for the bot.
//
// Hunting picks random untried cells. A hit that does not sink a ship switches
// to targeting, which shoots around the confirmed hits until the ship sinks.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{
    common::{GameError, ShotOutcome},
    config::{BOARD_SIZE, MAX_RANDOM_DRAWS},
    coord::{adjacent_cells, Coord},
    game::ShotLedger,
    ship::Orientation,
};

/// Bot memory between shots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetingState {
    /// No damaged ship known; shoot at random.
    #[default]
    Hunting,
    /// Confirmed hits on the ship currently being chased, in shot order.
    /// Never empty.
    Targeting { hits: Vec<Coord> },
}

impl TargetingState {
    pub fn is_targeting(&self) -> bool {
        matches!(self, TargetingState::Targeting { .. })
    }

    /// Confirmed hits on the current target, empty while hunting.
    pub fn current_target(&self) -> &[Coord] {
        match self {
            TargetingState::Hunting => &[],
            TargetingState::Targeting { hits } => hits,
        }
    }

    /// Pick the next cell to shoot, given what the bot already tried.
    ///
    /// Falls back to a hunting move when targeting has no candidate left; the
    /// state itself is left unchanged by that fallback.
    pub fn select_target<R: Rng + ?Sized>(
        &self,
        ledger: &ShotLedger,
        rng: &mut R,
    ) -> Result<Coord, GameError> {
        if let TargetingState::Targeting { hits } = self {
            if let Some(coord) = target_move(hits, ledger, rng) {
                return Ok(coord);
            }
            trace!("no extension left around {:?}, hunting this turn", hits);
        }
        hunt_move(ledger, rng)
    }

    /// Fold the outcome of the bot's last shot into its memory.
    pub fn update_after_shot(&mut self, coord: Coord, outcome: ShotOutcome) {
        if outcome.destroyed {
            *self = TargetingState::Hunting;
            return;
        }
        if outcome.hit {
            match self {
                TargetingState::Hunting => {
                    *self = TargetingState::Targeting { hits: vec![coord] };
                }
                TargetingState::Targeting { hits } => hits.push(coord),
            }
        }
        // A miss keeps the current mode. `Targeting` always holds at least one
        // hit, so there is no empty target list to reset.
    }
}

/// Candidate cells for the current target, before shuffling and filtering.
///
/// One hit gives its orthogonal neighbours. Two or more give the two cells
/// beyond the ends of the run along the inferred axis; these may be off the
/// board, in which case they are dropped.
pub fn target_candidates(hits: &[Coord]) -> Vec<Coord> {
    match hits {
        [] => Vec::new(),
        [only] => adjacent_cells(*only, false).iter().collect(),
        [first, ..] => {
            let anchor = hits.iter().min().copied().unwrap_or(*first);
            let orientation = if hits.iter().all(|h| h.row() == first.row()) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (lo, hi) = match orientation {
                Orientation::Horizontal => min_max(hits.iter().map(Coord::col)),
                Orientation::Vertical => min_max(hits.iter().map(Coord::row)),
            };
            let (lo, hi) = (lo as i32 - 1, hi as i32 + 1);
            let (r, c) = (anchor.row() as i32, anchor.col() as i32);
            let ends = match orientation {
                Orientation::Horizontal => [(r, lo), (r, hi)],
                Orientation::Vertical => [(lo, c), (hi, c)],
            };
            ends.iter()
                .filter_map(|&(r, c)| Coord::try_new(r, c))
                .collect()
        }
    }
}

fn min_max(values: impl Iterator<Item = usize>) -> (usize, usize) {
    values.fold((usize::MAX, 0), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn target_move<R: Rng + ?Sized>(
    hits: &[Coord],
    ledger: &ShotLedger,
    rng: &mut R,
) -> Option<Coord> {
    let mut candidates = target_candidates(hits);
    candidates.shuffle(rng);
    candidates.into_iter().find(|&c| !ledger.is_tried(c))
}

/// Uniformly random untried cell, with a row-major scan as the fallback.
pub fn hunt_move<R: Rng + ?Sized>(ledger: &ShotLedger, rng: &mut R) -> Result<Coord, GameError> {
    let n = BOARD_SIZE as i32;
    for _ in 0..MAX_RANDOM_DRAWS {
        let r = rng.random_range(0..n);
        let c = rng.random_range(0..n);
        if let Some(coord) = Coord::try_new(r, c) {
            if !ledger.is_tried(coord) {
                return Ok(coord);
            }
        }
    }
    (!ledger.tried()).first().ok_or(GameError::NoLegalMove)
}
