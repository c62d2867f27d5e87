//! Text rendering of the boards.

use std::fmt::Write;

use crate::core::{Coord, GameEngine, Ship, Side, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

fn header() -> String {
    let mut line = String::from("   ");
    for c in 0..N {
        let _ = write!(line, "{} ", (b'A' + c as u8) as char);
    }
    line.trim_end().to_string()
}

fn own_cell(engine: &GameEngine, coord: Coord) -> char {
    let incoming = engine.ledger(Side::Bot);
    if incoming.hits.contains(coord) {
        'X'
    } else if incoming.misses.contains(coord) {
        '·'
    } else if engine.fleet(Side::Player).ship_at(coord).is_some() {
        'S'
    } else {
        '~'
    }
}

fn enemy_cell(engine: &GameEngine, coord: Coord) -> char {
    let shots = engine.ledger(Side::Player);
    if shots.hits.contains(coord) {
        if engine.is_destroyed_at(coord, Side::Player) {
            '#'
        } else {
            'X'
        }
    } else if shots.misses.contains(coord) {
        '·'
    } else {
        '~'
    }
}

/// The player's board (own ships, bot shots) next to the bot's board as seen
/// by the player.
pub fn render_boards(engine: &GameEngine) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(55));
    let _ = writeln!(out, "       YOUR BOARD                 ENEMY BOARD");
    let _ = writeln!(out, "{}        {}", header(), header().trim_start());
    for r in 0..N {
        let mut own = format!("{:2} ", r + 1);
        let mut enemy = format!("{:2} ", r + 1);
        for c in 0..N {
            let coord = Coord::from_index(r * N + c);
            own.push(own_cell(engine, coord));
            own.push(' ');
            enemy.push(enemy_cell(engine, coord));
            enemy.push(' ');
        }
        let _ = writeln!(out, "{}    {}", own, enemy.trim_end());
    }
    let _ = writeln!(out, "{}", "=".repeat(55));
    let _ = write!(out, "Legend: S=Ship X=Hit #=Destroyed ·=Miss ~=Water/Unknown");
    out
}

/// Ships placed so far, numbered from 1 in placement order.
pub fn render_placement(ships: &[Ship]) -> String {
    let mut grid = [['~'; N]; N];
    for (id, ship) in ships.iter().enumerate() {
        // ids past 9 wrap to keep one character per cell
        let mark = char::from_digit(((id + 1) % 10) as u32, 10).unwrap_or('?');
        for cell in ship.cells() {
            grid[cell.row()][cell.col()] = mark;
        }
    }
    let mut out = header();
    out.push('\n');
    for (r, row) in grid.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        let _ = writeln!(out, "{:2} {}", r + 1, cells.join(" "));
    }
    out
}
