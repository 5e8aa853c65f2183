//! Game board: the cell grid, fleet quotas, placed ships and attack
//! resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{AttackResult, BoardError, CellState, PlacementIssue};
use crate::config::{
    in_bounds, BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, MAX_PLACEMENT_RESTARTS,
};
use crate::ship::{Orientation, Ship, ShipType};

const N: usize = BOARD_SIZE as usize;

/// One player's waters. Sole authority on placement and attack legality.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[CellState; N]; N],
    // Slot in `ships` of the ship covering each cell.
    owners: [[Option<usize>; N]; N],
    ships: Vec<Ship>,
    remaining: [usize; FLEET.len()],
}

impl Board {
    /// Empty grid with the full fleet still to place.
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; N]; N],
            owners: [[None; N]; N],
            ships: Vec::new(),
            remaining: FLEET.map(ShipType::quantity),
        }
    }

    /// Why `ship` may not go at (`row`, `col`), or `None` if it may.
    pub fn placement_issue(&self, ship: &Ship, row: i32, col: i32) -> Option<PlacementIssue> {
        if !in_bounds(row, col) {
            return Some(PlacementIssue::OutOfBounds);
        }
        let cells = ship.calculate_positions(row, col);
        if !cells.iter().all(|&(r, c)| in_bounds(r, c)) {
            return Some(PlacementIssue::OutOfBounds);
        }
        if cells
            .iter()
            .any(|&(r, c)| self.grid[r as usize][c as usize] != CellState::Empty)
        {
            return Some(PlacementIssue::Overlap);
        }
        if self.remaining_ships(ship.ship_type()) == 0 {
            return Some(PlacementIssue::QuotaExhausted);
        }
        None
    }

    /// `true` iff the ship fits on the grid over empty cells and its quota
    /// is not exhausted.
    pub fn can_place_ship(&self, ship: &Ship, row: i32, col: i32) -> bool {
        self.placement_issue(ship, row, col).is_none()
    }

    /// Place `ship` with its origin at (`row`, `col`).
    ///
    /// Nothing changes when the placement is refused.
    pub fn place_ship(&mut self, mut ship: Ship, row: i32, col: i32) -> Result<(), BoardError> {
        if let Some(issue) = self.placement_issue(&ship, row, col) {
            return Err(BoardError::IllegalPlacement(issue));
        }
        ship.place(row, col);
        let slot = self.ships.len();
        for &(r, c) in ship.positions() {
            self.grid[r as usize][c as usize] = CellState::Ship;
            self.owners[r as usize][c as usize] = Some(slot);
        }
        self.remaining[ship.ship_type().index()] -= 1;
        self.ships.push(ship);
        Ok(())
    }

    /// Ships of `ship_type` still available for placement.
    pub fn remaining_ships(&self, ship_type: ShipType) -> usize {
        self.remaining[ship_type.index()]
    }

    pub fn are_all_ships_placed(&self) -> bool {
        self.remaining.iter().all(|&n| n == 0)
    }

    /// State of the cell at (`row`, `col`).
    pub fn cell_state(&self, row: i32, col: i32) -> Result<CellState, BoardError> {
        if !in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.grid[row as usize][col as usize])
    }

    /// Resolve an attack at (`row`, `col`).
    ///
    /// Only the target cell and the ship owning it are touched.
    pub fn attack(&mut self, row: i32, col: i32) -> AttackResult {
        if !in_bounds(row, col) {
            return AttackResult::InvalidPosition;
        }
        let (r, c) = (row as usize, col as usize);
        match self.grid[r][c] {
            CellState::Hit | CellState::Miss => AttackResult::AlreadyAttacked,
            CellState::Empty => {
                self.grid[r][c] = CellState::Miss;
                AttackResult::Miss
            }
            CellState::Ship => {
                self.grid[r][c] = CellState::Hit;
                match self.owners[r][c].and_then(|slot| self.ships.get_mut(slot)) {
                    Some(ship) => {
                        ship.register_hit();
                        if ship.is_sunk() {
                            AttackResult::Sunk
                        } else {
                            AttackResult::Hit
                        }
                    }
                    None => {
                        debug_assert!(false, "ship cell ({}, {}) has no owner", row, col);
                        AttackResult::Hit
                    }
                }
            }
        }
    }

    /// Victory check: the whole fleet is on the board and every ship is sunk.
    pub fn are_all_ships_sunk(&self) -> bool {
        self.are_all_ships_placed() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Placed ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellState::Ship)
            .count()
    }

    /// Restore the just-constructed state.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship covering (`row`, `col`), if any.
    pub fn ship_at(&self, row: i32, col: i32) -> Option<&Ship> {
        if !in_bounds(row, col) {
            return None;
        }
        self.owners[row as usize][col as usize].and_then(|slot| self.ships.get(slot))
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// `true` while no ship has been placed.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Sample a legal (row, col, orientation) for a ship of `ship_type`.
    ///
    /// Origins are drawn so the ship always fits on the grid; gives up after
    /// [`MAX_PLACEMENT_ATTEMPTS`] overlapping draws.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Option<(i32, i32, Orientation)> {
        if self.remaining_ships(ship_type) == 0 {
            return None;
        }
        let len = ship_type.length();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (N - 1, N - len),
                Orientation::Vertical => (N - len, N - 1),
            };
            let r = rng.random_range(0..=max_r) as i32;
            let c = rng.random_range(0..=max_c) as i32;
            let ship = Ship::with_orientation(ship_type, orient);
            if self.can_place_ship(&ship, r, c) {
                return Some((r, c, orient));
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill `board` with a complete random fleet, largest ships first.
///
/// Any ships already on the board are discarded. When one ship cannot be
/// fitted the fill starts over from an empty board, up to
/// [`MAX_PLACEMENT_RESTARTS`] times.
pub fn place_ships_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), BoardError> {
    'restart: for _ in 0..MAX_PLACEMENT_RESTARTS {
        board.reset();
        for ship_type in FLEET {
            for _ in 0..ship_type.quantity() {
                let Some((r, c, orient)) = board.random_placement(rng, ship_type) else {
                    continue 'restart;
                };
                board.place_ship(Ship::with_orientation(ship_type, orient), r, c)?;
            }
        }
        return Ok(());
    }
    board.reset();
    Err(BoardError::UnableToPlaceShip)
}

/// Grid view with column letters and row numbers. Unhit ships show as `#`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..N {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "{:2} ", r + 1)?;
            for cell in row {
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("remaining", &self.remaining)
            .field("remaining_ship_cells", &self.remaining_ship_cells())
            .finish()
    }
}

