use broadside::{BoardError, Orientation, Ship, ShipType, FLEET, TOTAL_SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_catalog_totals() {
    let ships: usize = FLEET.iter().map(|t| t.quantity()).sum();
    let cells: usize = FLEET.iter().map(|t| t.quantity() * t.length()).sum();
    assert_eq!(ships, TOTAL_SHIPS);
    assert_eq!(cells, TOTAL_SHIP_CELLS);
    assert_eq!((ShipType::Carry.length(), ShipType::Carry.quantity()), (6, 1));
    assert_eq!((ShipType::Submarine.length(), ShipType::Submarine.quantity()), (2, 4));
    // largest first
    assert!(FLEET.windows(2).all(|w| w[0].length() > w[1].length()));
}

#[test]
fn test_new_ship_is_unplaced() {
    let ship = Ship::new(ShipType::Cruiser);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert!(!ship.is_placed());
    assert!(ship.positions().is_empty());
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());
}

#[test]
fn test_calculate_positions_does_not_place() {
    let mut ship = Ship::new(ShipType::Destroyer);
    assert_eq!(ship.calculate_positions(2, 1), vec![(2, 1), (2, 2), (2, 3)]);
    assert!(!ship.is_placed());

    ship.rotate().unwrap();
    assert_eq!(ship.calculate_positions(2, 1), vec![(2, 1), (3, 1), (4, 1)]);
    // off-board cells are still produced; bounds are the board's job
    assert_eq!(ship.calculate_positions(9, -1)[0], (9, -1));
    assert!(ship.positions().is_empty());
}

#[test]
fn test_place_and_replace() {
    let mut ship = Ship::with_orientation(ShipType::Submarine, Orientation::Vertical);
    ship.place(0, 0);
    assert!(ship.is_placed());
    assert_eq!(ship.positions(), &[(0, 0), (1, 0)]);
    assert!(ship.occupies(1, 0));
    assert!(!ship.occupies(0, 1));

    ship.place(5, 5);
    assert_eq!(ship.positions(), &[(5, 5), (6, 5)]);
    assert!(!ship.occupies(0, 0));
}

#[test]
fn test_rotate_refused_once_placed() {
    let mut ship = Ship::new(ShipType::Carry);
    assert_eq!(ship.rotate(), Ok(Orientation::Vertical));
    assert_eq!(ship.rotate(), Ok(Orientation::Horizontal));
    ship.place(0, 0);
    assert_eq!(ship.rotate(), Err(BoardError::ShipAlreadyPlaced));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.positions().len(), 6);
}

#[test]
fn test_register_hit_saturates() {
    let mut ship = Ship::new(ShipType::Submarine);
    ship.place(3, 3);
    ship.register_hit();
    assert!(!ship.is_sunk());
    ship.register_hit();
    assert!(ship.is_sunk());
    ship.register_hit();
    ship.register_hit();
    assert_eq!(ship.hits(), 2);
    assert!(ship.is_sunk());
}

#[test]
fn test_calculate_positions_saturates() {
    let ship = Ship::new(ShipType::Destroyer);
    assert_eq!(
        ship.calculate_positions(0, i32::MAX - 1),
        vec![(0, i32::MAX - 1), (0, i32::MAX), (0, i32::MAX)]
    );
    let mut vertical = Ship::with_orientation(ShipType::Submarine, Orientation::Vertical);
    assert_eq!(
        vertical.calculate_positions(i32::MAX, 4),
        vec![(i32::MAX, 4), (i32::MAX, 4)]
    );
    vertical.rotate().unwrap();
    assert_eq!(vertical.calculate_positions(i32::MIN, i32::MIN).len(), 2);
}
