use broadside::{
    place_ships_randomly, AttackResult, Board, CellState, Orientation, Ship, ShipType,
    BOARD_SIZE, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::HashSet;

const N: i32 = BOARD_SIZE as i32;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_ships_randomly(&mut board, &mut rng).unwrap();
    let guesses = rng.random_range(0..BOARD_SIZE as usize * 3);
    for _ in 0..guesses {
        let r = rng.random_range(0..N);
        let c = rng.random_range(0..N);
        board.attack(r, c);
    }
    board
}

fn ship_type() -> impl Strategy<Value = ShipType> {
    prop_oneof![
        Just(ShipType::Carry),
        Just(ShipType::Cruiser),
        Just(ShipType::Destroyer),
        Just(ShipType::Submarine),
    ]
}

fn count_cells(board: &Board, state: CellState) -> usize {
    let mut n = 0;
    for r in 0..N {
        for c in 0..N {
            if board.cell_state(r, c).unwrap() == state {
                n += 1;
            }
        }
    }
    n
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_on_empty_board_marks_length_cells(
        ty in ship_type(),
        vertical in any::<bool>(),
        a in 0..N,
        b in 0..N,
    ) {
        let orient = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let len = ty.length() as i32;
        // clamp the origin so the ship fits
        let (row, col) = if vertical { (a % (N - len + 1), b) } else { (a, b % (N - len + 1)) };
        let mut board = Board::new();
        let ship = Ship::with_orientation(ty, orient);
        prop_assert!(board.can_place_ship(&ship, row, col));
        board.place_ship(ship, row, col).unwrap();
        prop_assert_eq!(count_cells(&board, CellState::Ship), ty.length());
        prop_assert_eq!(board.remaining_ships(ty), ty.quantity() - 1);
        prop_assert_eq!(board.ships()[0].positions().len(), ty.length());
    }

    #[test]
    fn random_fill_is_complete_and_disjoint(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        place_ships_randomly(&mut board, &mut rng).unwrap();
        prop_assert!(board.are_all_ships_placed());
        prop_assert_eq!(count_cells(&board, CellState::Ship), TOTAL_SHIP_CELLS);
        let cells: HashSet<_> = board
            .ships()
            .iter()
            .flat_map(|s| s.positions().iter().copied())
            .collect();
        prop_assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
        for ty in ShipType::ALL {
            prop_assert_eq!(board.remaining_ships(ty), 0);
        }
    }

    #[test]
    fn second_attack_is_already_attacked(seed in any::<u64>(), row in 0..N, col in 0..N) {
        let mut board = random_board(seed);
        let first = board.attack(row, col);
        let after_first = board.clone();
        if first.is_progressing() {
            prop_assert!(matches!(first, AttackResult::Miss | AttackResult::Hit | AttackResult::Sunk));
        } else {
            prop_assert_eq!(first, AttackResult::AlreadyAttacked);
        }
        for _ in 0..3 {
            prop_assert_eq!(board.attack(row, col), AttackResult::AlreadyAttacked);
        }
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn sunk_iff_every_cell_hit(seed in any::<u64>()) {
        let board = random_board(seed);
        for ship in board.ships() {
            let hit = ship
                .positions()
                .iter()
                .filter(|&&(r, c)| board.cell_state(r, c).unwrap() == CellState::Hit)
                .count();
            prop_assert_eq!(hit, ship.hits());
            prop_assert_eq!(ship.is_sunk(), hit == ship.ship_type().length());
        }
        let unhit: usize = board
            .ships()
            .iter()
            .map(|s| s.ship_type().length() - s.hits())
            .sum();
        prop_assert_eq!(board.remaining_ship_cells(), unhit);
    }

    #[test]
    fn out_of_range_attack_changes_nothing(seed in any::<u64>(), row in -20i32..30, col in -20i32..30) {
        prop_assume!(!(0..N).contains(&row) || !(0..N).contains(&col));
        let mut board = random_board(seed);
        let before = board.clone();
        prop_assert_eq!(board.attack(row, col), AttackResult::InvalidPosition);
        prop_assert!(board.cell_state(row, col).is_err());
        prop_assert_eq!(board, before);
    }
}
