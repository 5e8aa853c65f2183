use broadside::{
    place_ships_randomly, play_cpu_vs_cpu, AttackResult, Board, CellState, Cpu, GameStatus,
    Session, SessionError, Ship, ShipType, Side, BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn full_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_ships_randomly(&mut board, &mut rng).unwrap();
    board
}

fn session(seed: u64) -> Session {
    Session::new(full_board(seed), full_board(seed + 1), Cpu::from_seed(seed)).unwrap()
}

fn find_cell(board: &Board, state: CellState) -> (i32, i32) {
    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            if board.cell_state(r, c).unwrap() == state {
                return (r, c);
            }
        }
    }
    panic!("no {:?} cell", state);
}

#[test]
fn test_incomplete_fleet_rejected() {
    let mut partial = Board::new();
    partial.place_ship(Ship::new(ShipType::Carry), 0, 0).unwrap();
    let err = Session::new(partial, full_board(1), Cpu::from_seed(1)).err();
    assert_eq!(err, Some(SessionError::FleetIncomplete(Side::Player)));
    let err = Session::new(full_board(1), Board::new(), Cpu::from_seed(1)).err();
    assert_eq!(err, Some(SessionError::FleetIncomplete(Side::Cpu)));
}

#[test]
fn test_player_moves_first() {
    let mut s = session(10);
    assert_eq!(s.turn(), Side::Player);
    assert_eq!(s.status(), GameStatus::InProgress);
    assert_eq!(s.cpu_turn().err(), Some(SessionError::NotYourTurn(Side::Cpu)));
}

#[test]
fn test_non_progressing_shots_keep_the_turn() {
    let mut s = session(20);
    assert_eq!(s.player_attack(-1, 3), Ok(AttackResult::InvalidPosition));
    assert_eq!(s.turn(), Side::Player);

    let water = find_cell(s.board(Side::Cpu), CellState::Empty);
    assert_eq!(s.player_attack(water.0, water.1), Ok(AttackResult::Miss));
    assert_eq!(s.turn(), Side::Cpu);
    assert_eq!(
        s.player_attack(0, 0).err(),
        Some(SessionError::NotYourTurn(Side::Player))
    );

    s.cpu_turn().unwrap();
    assert_eq!(s.turn(), Side::Player);
    assert_eq!(
        s.player_attack(water.0, water.1),
        Ok(AttackResult::AlreadyAttacked)
    );
    assert_eq!(s.turn(), Side::Player);
    assert_eq!(s.stats(Side::Player).shots, 1);
    assert_eq!(s.stats(Side::Cpu).shots, 1);
}

#[test]
fn test_hit_passes_the_turn_and_counts() {
    let mut s = session(30);
    let target = find_cell(s.board(Side::Cpu), CellState::Ship);
    let result = s.player_attack(target.0, target.1).unwrap();
    assert!(result.is_hit());
    assert_eq!(s.turn(), Side::Cpu);
    assert_eq!(s.stats(Side::Player).hits, 1);
}

#[test]
fn test_cpu_turns_never_repeat() {
    let mut s = session(40);
    let mut fired = HashSet::new();
    let mut targets = Vec::new();
    // open water first, then the fleet
    for state in [CellState::Empty, CellState::Ship] {
        for r in 0..BOARD_SIZE as i32 {
            for c in 0..BOARD_SIZE as i32 {
                if s.board(Side::Cpu).cell_state(r, c).unwrap() == state {
                    targets.push((r, c));
                }
            }
        }
    }
    for &(r, c) in &targets {
        s.player_attack(r, c).unwrap();
        if s.status() != GameStatus::InProgress {
            break;
        }
        let (coord, result) = s.cpu_turn().unwrap();
        assert!(fired.insert(coord), "{:?} fired twice", coord);
        assert!(result.is_progressing());
        if s.status() != GameStatus::InProgress {
            break;
        }
    }
    match s.status() {
        GameStatus::Lost => {
            assert!(s.board(Side::Player).are_all_ships_sunk());
            assert_eq!(s.stats(Side::Cpu).sunk, 10);
        }
        GameStatus::Won => assert!(s.board(Side::Cpu).are_all_ships_sunk()),
        GameStatus::InProgress => panic!("match did not finish"),
    }
    assert_eq!(s.player_attack(0, 0).err(), Some(SessionError::GameOver));
    assert_eq!(s.cpu_turn().err(), Some(SessionError::GameOver));
}

#[test]
fn test_headless_match_is_reproducible() {
    let a = play_cpu_vs_cpu(2024).unwrap();
    let b = play_cpu_vs_cpu(2024).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.turns, a.player.shots + a.cpu.shots);
    let winner = match a.winner {
        Side::Player => a.player,
        Side::Cpu => a.cpu,
    };
    assert_eq!(winner.sunk, 10);
    assert_eq!(winner.hits, 31);
    // the player shoots first, so the loser never has more shots
    assert!(a.player.shots >= a.cpu.shots);
}
