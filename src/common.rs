//! Common types for the engine: coordinates, cell states, attack results and
//! board errors.

/// A board coordinate as (row, col). Signed so callers can probe off-board.
pub type Coord = (i32, i32);

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Single character used when printing a board.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => '#',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
        }
    }
}

/// Outcome of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack landed on open water.
    Miss,
    /// Attack damaged a ship that is still afloat.
    Hit,
    /// Attack destroyed the last intact segment of a ship.
    Sunk,
    /// Cell was already resolved; nothing changed.
    AlreadyAttacked,
    /// Coordinate is off the board; nothing changed.
    InvalidPosition,
}

impl AttackResult {
    /// `false` for outcomes that must not consume a turn.
    pub fn is_progressing(self) -> bool {
        matches!(
            self,
            AttackResult::Miss | AttackResult::Hit | AttackResult::Sunk
        )
    }

    /// `true` when a ship segment was struck.
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Sunk)
    }
}

/// Reason a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementIssue {
    /// At least one segment would leave the grid.
    OutOfBounds,
    /// At least one segment would cover a non-empty cell.
    Overlap,
    /// No ships of this type remain to be placed.
    QuotaExhausted,
}

/// Errors returned by board and ship operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cell query outside the grid.
    OutOfBounds { row: i32, col: i32 },
    /// `place_ship` called where `can_place_ship` is false.
    IllegalPlacement(PlacementIssue),
    /// Rotation requested on a ship that already occupies cells.
    ShipAlreadyPlaced,
    /// Random fill ran out of restarts.
    UnableToPlaceShip,
}

impl core::fmt::Display for PlacementIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementIssue::OutOfBounds => write!(f, "ship would extend past the board edge"),
            PlacementIssue::Overlap => write!(f, "ship would overlap an occupied cell"),
            PlacementIssue::QuotaExhausted => write!(f, "no ships of this type remain"),
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::IllegalPlacement(issue) => write!(f, "Illegal placement: {}", issue),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
