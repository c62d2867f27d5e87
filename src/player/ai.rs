use log::debug;
use rand::rngs::SmallRng;

use crate::core::{Coord, Fleet, ShotLedger, ShotOutcome, TargetingState};

use super::Player;

/// Scripted opponent: random fleet, hunt/target shooting.
#[derive(Debug, Default)]
pub struct AiPlayer {
    state: TargetingState,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng) -> anyhow::Result<Option<Fleet>> {
        Ok(Some(Fleet::random(rng)?))
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        shots: &ShotLedger,
    ) -> anyhow::Result<Option<Coord>> {
        Ok(Some(self.state.select_target(shots, rng)?))
    }

    fn handle_guess_result(&mut self, coord: Coord, result: ShotOutcome) {
        let was_targeting = self.state.is_targeting();
        self.state.update_after_shot(coord, result);
        if was_targeting != self.state.is_targeting() {
            debug!(
                "bot {} after {} at {}",
                if self.state.is_targeting() {
                    "starts targeting"
                } else {
                    "resumes hunting"
                },
                result,
                coord
            );
        }
    }
}
