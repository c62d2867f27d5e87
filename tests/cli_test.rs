use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::player::cli::parse_ship_input;
use salvo::{CliPlayer, Coord, GameError, Player, ShotLedger, NUM_SHIPS};

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col).unwrap()
}

fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::with_io(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_parse_ship_input() {
    assert_eq!(parse_ship_input("A1 a2  A3").unwrap(), vec![c(0, 0), c(1, 0), c(2, 0)]);
    assert!(matches!(parse_ship_input(""), Err(GameError::MalformedCoordinate(_))));
    assert!(matches!(parse_ship_input("A1 Z9"), Err(GameError::OutOfBounds { .. })));
}

#[test]
fn test_manual_placement_with_retries() {
    let input = "\
A1 A2 A3
A1 B1 C1 D1
C1 C2 C3
E1 E2 E3
J1 J2 J3
J5 J6 J7
A10 B10
D10 E10
G10 H10
F3
F5
F7
H3
";
    let mut rng = SmallRng::seed_from_u64(1);
    let mut cli = player(input);
    let fleet = cli.place_ships(&mut rng).unwrap().unwrap();
    assert_eq!(fleet.len(), NUM_SHIPS);
    assert_eq!(fleet.ship_at(c(0, 3)), Some(0));

    let out = String::from_utf8(cli.into_output()).unwrap();
    assert!(out.contains("Invalid input") || out.contains("Error"));
    assert!(out.contains("ships cannot touch each other"));
    assert!(out.contains("All ships placed successfully!"));
}

#[test]
fn test_placement_can_be_cancelled() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut cli = player("A1 B1 C1 D1\nquit\n");
    assert!(cli.place_ships(&mut rng).unwrap().is_none());

    let mut cli = player("");
    assert!(cli.place_ships(&mut rng).unwrap().is_none());
}

#[test]
fn test_random_fleet_skips_prompts() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut cli = player("").random_fleet(true);
    let fleet = cli.place_ships(&mut rng).unwrap().unwrap();
    assert_eq!(fleet.len(), NUM_SHIPS);
}

#[test]
fn test_select_target_reprompts() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ledger = ShotLedger::default();
    ledger.misses.insert(c(1, 1));
    let mut cli = player("hello\nK4\nB2\nb3\n");
    assert_eq!(cli.select_target(&mut rng, &ledger).unwrap(), Some(c(2, 1)));

    let out = String::from_utf8(cli.into_output()).unwrap();
    assert!(out.contains("invalid coordinate 'hello'"));
    assert!(out.contains("out of bounds"));
    assert!(out.contains("You already tried B2!"));
}

#[test]
fn test_select_target_quit() {
    let mut rng = SmallRng::seed_from_u64(1);
    let ledger = ShotLedger::default();
    for cmd in ["QUIT\n", "exit\n", ""] {
        let mut cli = player(cmd);
        assert_eq!(cli.select_target(&mut rng, &ledger).unwrap(), None);
    }
}
