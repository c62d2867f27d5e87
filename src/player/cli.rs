use std::io::{self, BufRead, Write};

use anyhow::Context;
use rand::rngs::SmallRng;

use crate::core::{
    config::ship_name, Coord, Fleet, FleetBuilder, GameEngine, GameError, ShotLedger,
    ShotOutcome, Side,
};
use crate::ui::{render_boards, render_placement};

use super::Player;

/// Interactive player reading commands from `input` and writing to `output`.
pub struct CliPlayer<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
    random_fleet: bool,
}

impl CliPlayer {
    /// Player on the process's stdin/stdout.
    pub fn new() -> Self {
        CliPlayer::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            input,
            output,
            random_fleet: false,
        }
    }

    /// Skip manual placement and use a generated fleet.
    pub fn random_fleet(mut self, yes: bool) -> Self {
        self.random_fleet = yes;
        self
    }

    /// Consume the player, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next trimmed input line, `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, msg: impl std::fmt::Display) {
        let _ = writeln!(self.output, "{}", msg);
    }
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Parse space-separated coordinates such as `A1 A2 A3`.
pub fn parse_ship_input(line: &str) -> Result<Vec<Coord>, GameError> {
    let coords = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Coord>, _>>()?;
    if coords.is_empty() {
        return Err(GameError::MalformedCoordinate(line.to_string()));
    }
    Ok(coords)
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng) -> anyhow::Result<Option<Fleet>> {
        if self.random_fleet {
            let fleet = Fleet::random(rng)?;
            self.say(render_placement(fleet.ships()));
            return Ok(Some(fleet));
        }

        let mut builder = FleetBuilder::standard();
        self.say("\nSHIP PLACEMENT");
        self.say("Board coordinates: A-J (columns), 1-10 (rows)");
        self.say("Input format: A1 A2 A3 (space-separated coordinates)");
        let total = crate::core::NUM_SHIPS;
        while let Some(size) = builder.next_size() {
            let n = builder.ships().len() + 1;
            if !builder.ships().is_empty() {
                self.say(render_placement(builder.ships()));
            }
            self.say(format_args!(
                "\n[{}/{}] Place {} (size {}):",
                n,
                total,
                ship_name(size),
                size
            ));
            let _ = write!(self.output, "Enter {} coordinate(s): ", size);
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if is_quit(&line) {
                self.say("Placement cancelled.");
                return Ok(None);
            }
            let coords = match parse_ship_input(&line) {
                Ok(coords) => coords,
                Err(e) => {
                    self.say(format_args!("Invalid input: {}", e));
                    continue;
                }
            };
            match builder.place_cells(&coords) {
                Ok(()) => self.say(format_args!("Ship {} placed successfully!", n)),
                Err(e) => self.say(format_args!("Error: {}", e)),
            }
        }
        let fleet = builder.finish()?;
        self.say(render_placement(fleet.ships()));
        self.say("All ships placed successfully!");
        Ok(Some(fleet))
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        shots: &ShotLedger,
    ) -> anyhow::Result<Option<Coord>> {
        self.say("\nYour turn!");
        loop {
            let _ = write!(self.output, "Enter coordinates to attack (e.g., A1): ");
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            match line.parse::<Coord>() {
                Ok(coord) if shots.is_tried(coord) => {
                    self.say(format_args!("You already tried {}!", coord));
                }
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => self.say(e),
            }
        }
    }

    fn observe(&mut self, engine: &GameEngine, _side: Side) {
        self.say(render_boards(engine));
        self.say(format_args!("\n--- Turn {} ---", engine.turn()));
    }

    fn handle_guess_result(&mut self, coord: Coord, result: ShotOutcome) {
        if result.destroyed {
            self.say(format_args!("\nHIT! You destroyed an enemy ship at {}!", coord));
        } else if result.hit {
            self.say(format_args!("\nHIT at {}!", coord));
        } else {
            self.say(format_args!("\nMISS at {}", coord));
        }
    }

    fn handle_opponent_guess(&mut self, coord: Coord, result: ShotOutcome) {
        if result.destroyed {
            self.say(format_args!("Bot HIT and DESTROYED your ship at {}!", coord));
        } else if result.hit {
            self.say(format_args!("Bot HIT your ship at {}!", coord));
        } else {
            self.say(format_args!("Bot MISSED at {}", coord));
        }
    }
}
