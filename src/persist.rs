//! CSV adapters for fleets and the turn log.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};

use crate::core::{Coord, Fleet, Ship};
use crate::session::{TurnRecord, TurnSink};

/// One row of a fleet file: a single cell of a single ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCellRecord {
    pub ship_id: usize,
    pub size: usize,
    pub row: usize,
    pub col: usize,
}

/// Flatten `fleet` into one record per (ship, cell).
pub fn fleet_records(fleet: &Fleet) -> Vec<ShipCellRecord> {
    fleet
        .ships()
        .iter()
        .enumerate()
        .flat_map(|(ship_id, ship)| {
            let size = ship.size();
            ship.cells().into_iter().map(move |cell| ShipCellRecord {
                ship_id,
                size,
                row: cell.row(),
                col: cell.col(),
            })
        })
        .collect()
}

/// Group cell records by `ship_id`, ascending, into ships.
fn ships_from_records(records: &[ShipCellRecord]) -> anyhow::Result<Vec<Ship>> {
    let mut groups: BTreeMap<usize, (usize, Vec<Coord>)> = BTreeMap::new();
    for rec in records {
        let coord = record_coord(rec)?;
        let entry = groups.entry(rec.ship_id).or_insert((rec.size, Vec::new()));
        if entry.0 != rec.size {
            bail!("ship {} lists conflicting sizes {} and {}", rec.ship_id, entry.0, rec.size);
        }
        entry.1.push(coord);
    }
    groups
        .into_iter()
        .map(|(id, (size, cells))| {
            Ship::from_cells(&cells, size).map_err(|e| anyhow!("ship {}: {}", id, e))
        })
        .collect()
}

fn record_coord(rec: &ShipCellRecord) -> anyhow::Result<Coord> {
    let off_board = || format!("ship {} has a cell off the board", rec.ship_id);
    let row = i32::try_from(rec.row).with_context(off_board)?;
    let col = i32::try_from(rec.col).with_context(off_board)?;
    Coord::new(row, col).with_context(off_board)
}

/// Rebuild a fleet of any composition from cell records. Ships must still be
/// straight and must not overlap or touch.
pub fn fleet_from_records(records: &[ShipCellRecord]) -> anyhow::Result<Fleet> {
    Ok(Fleet::from_ships(ships_from_records(records)?)?)
}

/// Rebuild a fleet that must be the standard one: one ship per entry of
/// `SHIP_SIZES`, in that order.
pub fn standard_fleet_from_records(records: &[ShipCellRecord]) -> anyhow::Result<Fleet> {
    Ok(Fleet::standard_from_ships(ships_from_records(records)?)?)
}

pub fn write_fleet<W: Write>(fleet: &Fleet, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for rec in fleet_records(fleet) {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_records<R: Read>(reader: R) -> anyhow::Result<Vec<ShipCellRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records = rdr
        .deserialize()
        .collect::<Result<Vec<ShipCellRecord>, _>>()
        .context("malformed fleet record")?;
    Ok(records)
}

/// Read a fleet file without checking the fleet composition.
pub fn read_fleet<R: Read>(reader: R) -> anyhow::Result<Fleet> {
    fleet_from_records(&read_records(reader)?)
}

/// Read a fleet file holding a complete standard fleet.
pub fn read_standard_fleet<R: Read>(reader: R) -> anyhow::Result<Fleet> {
    standard_fleet_from_records(&read_records(reader)?)
}

pub fn save_fleet(fleet: &Fleet, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_fleet(fleet, file)
}

/// Load a player or bot fleet file; only the standard fleet is accepted.
pub fn load_fleet(path: impl AsRef<Path>) -> anyhow::Result<Fleet> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    read_standard_fleet(file).with_context(|| format!("invalid fleet file {}", path.display()))
}

pub const TURN_LOG_HEADER: [&str; 7] = [
    "turn",
    "player_move",
    "player_result",
    "bot_move",
    "bot_result",
    "player_ships_remaining",
    "bot_ships_remaining",
];

/// A turn-log row with moves in `A1` notation and results as labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLogRow {
    pub turn: u32,
    pub player_move: String,
    pub player_result: String,
    pub bot_move: String,
    pub bot_result: String,
    pub player_ships_remaining: usize,
    pub bot_ships_remaining: usize,
}

impl From<&TurnRecord> for TurnLogRow {
    fn from(rec: &TurnRecord) -> Self {
        let text = |c: Option<Coord>| c.map(|c| c.to_string()).unwrap_or_default();
        let label = |o: Option<crate::core::ShotOutcome>| {
            o.map(|o| o.label().to_string()).unwrap_or_default()
        };
        TurnLogRow {
            turn: rec.turn,
            player_move: text(rec.player_move),
            player_result: label(rec.player_result),
            bot_move: text(rec.bot_move),
            bot_result: label(rec.bot_result),
            player_ships_remaining: rec.player_ships_remaining,
            bot_ships_remaining: rec.bot_ships_remaining,
        }
    }
}

/// Turn log written as CSV, flushed after every round.
pub struct CsvTurnLog<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvTurnLog<W> {
    /// Start a log on `writer`, emitting the header immediately.
    pub fn new(writer: W) -> anyhow::Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(TURN_LOG_HEADER)?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    /// Rounds written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow!("failed to flush turn log: {}", e.error()))
    }
}

impl CsvTurnLog<File> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        CsvTurnLog::new(file)
    }
}

impl<W: Write> TurnSink for CsvTurnLog<W> {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        self.writer.serialize(TurnLogRow::from(record))?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }
}

pub fn read_turn_log<R: Read>(reader: R) -> anyhow::Result<Vec<TurnLogRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let rows = rdr
        .deserialize()
        .collect::<Result<Vec<TurnLogRow>, _>>()
        .context("malformed turn log")?;
    Ok(rows)
}
