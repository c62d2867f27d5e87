use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    adjacent_cells, generate_fleet, is_straight_line, ships_touch, Coord, Fleet, FleetBuilder,
    GameError, Orientation, PlacementError, Ship, NUM_SHIPS, SHIP_SIZES, TOTAL_SHIP_CELLS,
};

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col).unwrap()
}

fn cells(list: &[(i32, i32)]) -> Vec<Coord> {
    list.iter().map(|&(r, col)| c(r, col)).collect()
}

#[test]
fn test_straight_line_accepts_runs() {
    assert!(is_straight_line(&cells(&[(0, 0), (0, 1), (0, 2), (0, 3)]), 4));
    assert!(is_straight_line(&cells(&[(5, 7), (3, 7), (4, 7)]), 3));
    assert!(is_straight_line(&cells(&[(9, 9)]), 1));
}

#[test]
fn test_straight_line_rejects_bad_shapes() {
    // gap
    assert!(!is_straight_line(&cells(&[(0, 0), (0, 2), (0, 3)]), 3));
    // bend
    assert!(!is_straight_line(&cells(&[(0, 0), (0, 1), (1, 1)]), 3));
    // diagonal
    assert!(!is_straight_line(&cells(&[(0, 0), (1, 1)]), 2));
    // wrong size
    assert!(!is_straight_line(&cells(&[(0, 0), (0, 1)]), 3));
    // duplicates collapse below the expected size
    assert!(!is_straight_line(&cells(&[(0, 0), (0, 0), (0, 1)]), 3));
}

#[test]
fn test_ship_from_cells_requires_exact_count() {
    let err = Ship::from_cells(&cells(&[(2, 2), (2, 2)]), 2).unwrap_err();
    assert_eq!(err, PlacementError::WrongShape { expected: 2 });
    let ship = Ship::from_cells(&cells(&[(2, 3), (2, 2)]), 2).unwrap();
    assert_eq!(ship.size(), 2);
    assert_eq!(ship.orientation(), Some(Orientation::Horizontal));
}

#[test]
fn test_ship_new_out_of_bounds() {
    let err = Ship::new(Orientation::Horizontal, 0, 8, 3).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { row: 0, col: 10 });
    let ship = Ship::new(Orientation::Vertical, 6, 9, 4).unwrap();
    assert!(ship.contains(c(9, 9)));
}

#[test]
fn test_ships_touch_includes_diagonal() {
    let existing = vec![Ship::new(Orientation::Horizontal, 2, 2, 2).unwrap()];
    let diagonal = Ship::new(Orientation::Horizontal, 3, 4, 1).unwrap();
    assert!(ships_touch(&diagonal.cells(), &existing));
    let clear = Ship::new(Orientation::Horizontal, 4, 2, 2).unwrap();
    assert!(!ships_touch(&clear.cells(), &existing));
    let overlapping = Ship::new(Orientation::Vertical, 1, 3, 3).unwrap();
    assert!(ships_touch(&overlapping.cells(), &existing));
}

#[test]
fn test_builder_rejection_reasons() {
    let mut builder = FleetBuilder::new(&[3, 2, 2]);
    assert_eq!(builder.next_size(), Some(3));
    assert_eq!(
        builder.place_cells(&cells(&[(0, 0), (0, 1)])),
        Err(PlacementError::WrongShape { expected: 3 })
    );
    builder.place_cells(&cells(&[(0, 0), (0, 1), (0, 2)])).unwrap();
    assert_eq!(
        builder.place_cells(&cells(&[(0, 2), (1, 2)])),
        Err(PlacementError::Overlaps)
    );
    assert_eq!(
        builder.place_cells(&cells(&[(1, 3), (2, 3)])),
        Err(PlacementError::Touches)
    );
    builder.place_cells(&cells(&[(2, 0), (2, 1)])).unwrap();
    assert!(!builder.is_complete());
    builder.place_cells(&cells(&[(9, 8), (9, 9)])).unwrap();
    assert_eq!(builder.next_size(), None);
    assert_eq!(
        builder.place_cells(&cells(&[(5, 5)])),
        Err(PlacementError::FleetComplete)
    );
    let fleet = builder.finish().unwrap();
    assert_eq!(fleet.len(), 3);
    assert_eq!(fleet.ship_at(c(2, 1)), Some(1));
    assert_eq!(fleet.ship_at(c(5, 5)), None);
}

#[test]
fn test_incomplete_fleet_cannot_finish() {
    let mut builder = FleetBuilder::standard();
    builder.place_cells(&cells(&[(0, 0), (0, 1), (0, 2), (0, 3)])).unwrap();
    assert_eq!(
        builder.finish().unwrap_err(),
        PlacementError::IncompleteFleet { placed: 1 }
    );
}

#[test]
fn test_from_ships_rejects_touching() {
    let ships = vec![
        Ship::new(Orientation::Horizontal, 0, 0, 2).unwrap(),
        Ship::new(Orientation::Horizontal, 1, 2, 1).unwrap(),
    ];
    assert_eq!(Fleet::from_ships(ships), Err(PlacementError::Touches));
}

#[test]
fn test_generation_fails_when_fleet_cannot_fit() {
    // only five full-width rows fit with a one-row gap between them
    let mut rng = SmallRng::seed_from_u64(7);
    let err = generate_fleet(&mut rng, &[10; 6]).unwrap_err();
    assert!(matches!(err, GameError::GenerationFailed { .. }));
}

#[test]
fn test_generation_rejects_impossible_sizes() {
    let mut rng = SmallRng::seed_from_u64(7);
    assert!(generate_fleet(&mut rng, &[11]).is_err());
    assert!(generate_fleet(&mut rng, &[0]).is_err());
}

fn assert_fleet_invariants(fleet: &Fleet) -> Result<(), TestCaseError> {
    prop_assert_eq!(fleet.len(), NUM_SHIPS);
    prop_assert_eq!(fleet.occupied().len(), TOTAL_SHIP_CELLS);
    for (i, (ship, &size)) in fleet.ships().iter().zip(SHIP_SIZES.iter()).enumerate() {
        prop_assert_eq!(ship.size(), size);
        let cells: Vec<Coord> = ship.cells().iter().collect();
        prop_assert!(is_straight_line(&cells, size));
        for (j, other) in fleet.ships().iter().enumerate() {
            if i == j {
                continue;
            }
            prop_assert!(!ship.cells().intersects(&other.cells()));
            for cell in ship.cells() {
                prop_assert!(!adjacent_cells(cell, true).intersects(&other.cells()));
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleets_are_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        assert_fleet_invariants(&fleet)?;
    }

    #[test]
    fn random_fleets_revalidate(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        let rebuilt = Fleet::from_ships(fleet.ships().to_vec()).unwrap();
        prop_assert_eq!(rebuilt, fleet);
    }

    #[test]
    fn straight_runs_are_accepted(
        horizontal in any::<bool>(),
        size in 1usize..=4,
        a in 0i32..10,
        b in 0i32..7,
    ) {
        let (orientation, row, col) = if horizontal {
            (Orientation::Horizontal, a, b)
        } else {
            (Orientation::Vertical, b, a)
        };
        let ship = Ship::new(orientation, row, col, size).unwrap();
        let mut cells: Vec<Coord> = ship.cells().iter().collect();
        cells.reverse();
        prop_assert!(is_straight_line(&cells, size));
        prop_assert!(!is_straight_line(&cells, size + 1));
    }
}
