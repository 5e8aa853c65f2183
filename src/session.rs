//! Match session: owns both boards, the computer opponent and the turn.

use core::fmt;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::{place_ships_randomly, Board},
    common::{AttackResult, BoardError, Coord},
    cpu::Cpu,
};

/// The two participants of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Cpu,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }
}

/// Current status of a match, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Progressing shots fired by one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotStats {
    pub shots: usize,
    pub hits: usize,
    pub sunk: usize,
}

impl ShotStats {
    fn record(&mut self, result: AttackResult) {
        if !result.is_progressing() {
            return;
        }
        self.shots += 1;
        if result.is_hit() {
            self.hits += 1;
        }
        if result == AttackResult::Sunk {
            self.sunk += 1;
        }
    }
}

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A side's fleet is not fully placed.
    FleetIncomplete(Side),
    /// It is the other side's turn.
    NotYourTurn(Side),
    /// The match has already been decided.
    GameOver,
    /// The opponent has no unattacked cell left to choose.
    CpuExhausted,
    Board(BoardError),
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::FleetIncomplete(side) => write!(f, "{:?} fleet is not fully placed", side),
            SessionError::NotYourTurn(side) => write!(f, "It is not {:?}'s turn", side),
            SessionError::GameOver => write!(f, "The match is already over"),
            SessionError::CpuExhausted => write!(f, "No unattacked cells remain"),
            SessionError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

/// One match between the player and the computer. The player moves first.
pub struct Session {
    player_board: Board,
    cpu_board: Board,
    cpu: Cpu,
    turn: Side,
    player_stats: ShotStats,
    cpu_stats: ShotStats,
}

impl Session {
    /// Start a match. Both fleets must be complete.
    pub fn new(player_board: Board, cpu_board: Board, cpu: Cpu) -> Result<Self, SessionError> {
        if !player_board.are_all_ships_placed() {
            return Err(SessionError::FleetIncomplete(Side::Player));
        }
        if !cpu_board.are_all_ships_placed() {
            return Err(SessionError::FleetIncomplete(Side::Cpu));
        }
        Ok(Session {
            player_board,
            cpu_board,
            cpu,
            turn: Side::Player,
            player_stats: ShotStats::default(),
            cpu_stats: ShotStats::default(),
        })
    }

    /// Side expected to shoot next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The waters belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Cpu => &self.cpu_board,
        }
    }

    pub fn stats(&self, side: Side) -> ShotStats {
        match side {
            Side::Player => self.player_stats,
            Side::Cpu => self.cpu_stats,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.cpu_board.are_all_ships_sunk() {
            GameStatus::Won
        } else if self.player_board.are_all_ships_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Fire the player's shot at the computer's board.
    ///
    /// `AlreadyAttacked` and `InvalidPosition` leave the turn with the player.
    pub fn player_attack(&mut self, row: i32, col: i32) -> Result<AttackResult, SessionError> {
        self.ensure_turn(Side::Player)?;
        let result = self.cpu_board.attack(row, col);
        log::debug!("player fires at ({}, {}): {:?}", row, col, result);
        self.finish_turn(Side::Player, result);
        Ok(result)
    }

    /// Let the computer pick a target, resolve it and learn from the outcome.
    pub fn cpu_turn(&mut self) -> Result<(Coord, AttackResult), SessionError> {
        self.ensure_turn(Side::Cpu)?;
        let coord = self.cpu.attack().ok_or(SessionError::CpuExhausted)?;
        let result = self.player_board.attack(coord.0, coord.1);
        self.cpu.process_result(result, coord);
        log::debug!("cpu fires at {:?}: {:?} ({:?} mode)", coord, result, self.cpu.mode());
        self.finish_turn(Side::Cpu, result);
        Ok((coord, result))
    }

    fn ensure_turn(&self, side: Side) -> Result<(), SessionError> {
        if self.status() != GameStatus::InProgress {
            return Err(SessionError::GameOver);
        }
        if self.turn != side {
            return Err(SessionError::NotYourTurn(side));
        }
        Ok(())
    }

    fn finish_turn(&mut self, side: Side, result: AttackResult) {
        match side {
            Side::Player => self.player_stats.record(result),
            Side::Cpu => self.cpu_stats.record(result),
        }
        if !result.is_progressing() {
            return;
        }
        match self.status() {
            GameStatus::InProgress => self.turn = side.opponent(),
            status => log::info!(
                "match over: {:?} after {} player / {} cpu shots",
                status,
                self.player_stats.shots,
                self.cpu_stats.shots
            ),
        }
    }
}

/// Summary of a finished headless match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub seed: u64,
    pub winner: Side,
    pub turns: usize,
    pub player: ShotStats,
    pub cpu: ShotStats,
}

/// Play a complete match with a second computer opponent standing in for
/// the player. Fully determined by `seed`.
pub fn play_cpu_vs_cpu(seed: u64) -> Result<MatchReport, SessionError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player_board = Board::new();
    let mut cpu_board = Board::new();
    place_ships_randomly(&mut player_board, &mut rng)?;
    place_ships_randomly(&mut cpu_board, &mut rng)?;

    let mut stand_in = Cpu::from_seed(seed.wrapping_add(1));
    let cpu = Cpu::from_seed(seed.wrapping_add(2));
    let mut session = Session::new(player_board, cpu_board, cpu)?;

    while session.status() == GameStatus::InProgress {
        match session.turn() {
            Side::Player => {
                let coord = stand_in.attack().ok_or(SessionError::CpuExhausted)?;
                let result = session.player_attack(coord.0, coord.1)?;
                stand_in.process_result(result, coord);
            }
            Side::Cpu => {
                session.cpu_turn()?;
            }
        }
    }

    let winner = match session.status() {
        GameStatus::Won => Side::Player,
        _ => Side::Cpu,
    };
    let player = session.stats(Side::Player);
    let cpu = session.stats(Side::Cpu);
    Ok(MatchReport {
        seed,
        winner,
        turns: player.shots + cpu.shots,
        player,
        cpu,
    })
}
