use proptest::prelude::*;
use salvo::{adjacent_cells, in_bounds, surrounding_cells, CellSet, Coord, GameError, BOARD_SIZE};

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_in_bounds_edges() {
    assert!(in_bounds(0, 0));
    assert!(in_bounds(9, 9));
    assert!(!in_bounds(-1, 0));
    assert!(!in_bounds(0, 10));
    assert!(!in_bounds(10, 5));
}

#[test]
fn test_adjacent_cells_interior() {
    let centre = c(4, 4);
    let orthogonal = adjacent_cells(centre, false);
    assert_eq!(orthogonal.len(), 4);
    for cell in [c(3, 4), c(5, 4), c(4, 3), c(4, 5)] {
        assert!(orthogonal.contains(cell));
    }
    let all = adjacent_cells(centre, true);
    assert_eq!(all.len(), 8);
    assert!(all.contains(c(3, 3)));
    assert!(all.contains(c(5, 5)));
    assert!(!all.contains(centre));
}

#[test]
fn test_adjacent_cells_edge_is_filtered() {
    assert_eq!(adjacent_cells(c(0, 5), true).len(), 5);
    assert_eq!(adjacent_cells(c(9, 9), false).len(), 2);
}

#[test]
fn test_surrounding_cells_of_vertical_ship() {
    let ship: CellSet = [c(2, 2), c(3, 2)].into_iter().collect();
    let ring = surrounding_cells(&ship);
    // 3 columns × 4 rows minus the two ship cells
    assert_eq!(ring.len(), 10);
    assert!(!ring.intersects(&ship));
    assert!(ring.contains(c(1, 1)));
    assert!(ring.contains(c(4, 3)));
}

#[test]
fn test_surrounding_cells_in_corner() {
    let ship = CellSet::single(c(0, 0));
    let ring = surrounding_cells(&ship);
    let expected: CellSet = [c(0, 1), c(1, 0), c(1, 1)].into_iter().collect();
    assert_eq!(ring, expected);
}

#[test]
fn test_notation_examples() {
    assert_eq!("A1".parse::<Coord>().unwrap(), c(0, 0));
    assert_eq!("J10".parse::<Coord>().unwrap(), c(9, 9));
    assert_eq!("c7".parse::<Coord>().unwrap(), c(6, 2));
    assert_eq!(" b2 ".parse::<Coord>().unwrap(), c(1, 1));
    assert_eq!(c(9, 0).to_string(), "A10");
}

#[test]
fn test_notation_errors() {
    assert!(matches!("".parse::<Coord>(), Err(GameError::MalformedCoordinate(_))));
    assert!(matches!("A".parse::<Coord>(), Err(GameError::MalformedCoordinate(_))));
    assert!(matches!("11".parse::<Coord>(), Err(GameError::MalformedCoordinate(_))));
    assert!(matches!("A1B".parse::<Coord>(), Err(GameError::MalformedCoordinate(_))));
    assert!(matches!("A-1".parse::<Coord>(), Err(GameError::MalformedCoordinate(_))));
    assert_eq!(
        "K1".parse::<Coord>(),
        Err(GameError::OutOfBounds { row: 0, col: 10 })
    );
    assert_eq!(
        "A0".parse::<Coord>(),
        Err(GameError::OutOfBounds { row: -1, col: 0 })
    );
}

#[test]
fn test_cell_set_operations() {
    let mut a = CellSet::new();
    assert!(a.insert(c(1, 1)));
    assert!(!a.insert(c(1, 1)));
    a.insert(c(2, 2));
    let b = CellSet::single(c(2, 2));
    assert!(b.is_subset(&a));
    assert!(!a.is_subset(&b));
    assert_eq!((a - b).iter().collect::<Vec<_>>(), vec![c(1, 1)]);
    assert_eq!(a & b, b);
    assert_eq!(!CellSet::new(), CellSet::full());
    assert_eq!(CellSet::full().len(), 100);
    assert!(a.remove(c(1, 1)));
    assert_eq!(a.first(), Some(c(2, 2)));
}

proptest! {
    #[test]
    fn coord_notation_roundtrip(row in 0..BOARD_SIZE as i32, col in 0..BOARD_SIZE as i32) {
        let coord = Coord::new(row, col).unwrap();
        let text = coord.to_string();
        let parsed: Coord = text.parse().unwrap();
        prop_assert_eq!(parsed, coord);
        prop_assert_eq!(parsed.row(), row as usize);
        prop_assert_eq!(parsed.col(), col as usize);
    }

    #[test]
    fn lowercase_parses_the_same(row in 0..BOARD_SIZE as i32, col in 0..BOARD_SIZE as i32) {
        let coord = Coord::new(row, col).unwrap();
        let lower = coord.to_string().to_lowercase();
        prop_assert_eq!(lower.parse::<Coord>().unwrap(), coord);
    }

    #[test]
    fn adjacency_is_symmetric(a in 0..100usize, b in 0..100usize) {
        let ca = Coord::new((a / 10) as i32, (a % 10) as i32).unwrap();
        let cb = Coord::new((b / 10) as i32, (b % 10) as i32).unwrap();
        prop_assert_eq!(
            adjacent_cells(ca, true).contains(cb),
            adjacent_cells(cb, true).contains(ca)
        );
    }
}
