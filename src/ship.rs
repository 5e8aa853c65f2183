//! Ship catalog and the per-ship damage and placement state.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing column.
    #[default]
    Horizontal,
    /// Extends along increasing row.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Ship classes in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Carry,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipType {
    /// Every class, largest first.
    pub const ALL: [ShipType; 4] = [
        ShipType::Carry,
        ShipType::Cruiser,
        ShipType::Destroyer,
        ShipType::Submarine,
    ];

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Carry => 6,
            ShipType::Cruiser => 4,
            ShipType::Destroyer => 3,
            ShipType::Submarine => 2,
        }
    }

    /// How many ships of this class a fleet holds.
    pub const fn quantity(self) -> usize {
        match self {
            ShipType::Carry => 1,
            ShipType::Cruiser => 2,
            ShipType::Destroyer => 3,
            ShipType::Submarine => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carry => "Carry",
            ShipType::Cruiser => "Cruiser",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
        }
    }

    /// Slot of this class in [`ShipType::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            ShipType::Carry => 0,
            ShipType::Cruiser => 1,
            ShipType::Destroyer => 2,
            ShipType::Submarine => 3,
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One vessel: its class, orientation, occupied cells and damage.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    hits: usize,
    placed: bool,
    positions: Vec<Coord>,
}

impl Ship {
    /// Unplaced ship of `ship_type`, lying horizontally.
    pub fn new(ship_type: ShipType) -> Self {
        Self::with_orientation(ship_type, Orientation::Horizontal)
    }

    /// Unplaced ship of `ship_type` with the given orientation.
    pub fn with_orientation(ship_type: ShipType, orientation: Orientation) -> Self {
        Ship {
            ship_type,
            orientation,
            hits: 0,
            placed: false,
            positions: Vec::new(),
        }
    }

    /// Toggle orientation for the next placement.
    ///
    /// A placed ship keeps its cells; rotating it is refused with
    /// [`BoardError::ShipAlreadyPlaced`].
    pub fn rotate(&mut self) -> Result<Orientation, BoardError> {
        if self.placed {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        self.orientation = self.orientation.toggled();
        Ok(self.orientation)
    }

    /// Cells this ship would cover with its origin at (`row`, `col`).
    /// Bounds and collisions are not checked; coordinates saturate at the
    /// `i32` limits.
    pub fn calculate_positions(&self, row: i32, col: i32) -> Vec<Coord> {
        (0..self.ship_type.length() as i32)
            .map(|i| match self.orientation {
                Orientation::Horizontal => (row, col.saturating_add(i)),
                Orientation::Vertical => (row.saturating_add(i), col),
            })
            .collect()
    }

    /// Commit the ship to the cells starting at (`row`, `col`).
    ///
    /// Calling again moves the ship. Legality is the board's concern, so
    /// callers should go through [`crate::Board::place_ship`].
    pub fn place(&mut self, row: i32, col: i32) {
        self.positions = self.calculate_positions(row, col);
        self.placed = true;
    }

    /// Record one point of damage, saturating at the ship's length.
    pub fn register_hit(&mut self) {
        if self.hits < self.ship_type.length() {
            self.hits += 1;
        }
    }

    /// Check if every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    /// Occupied cells; empty until placed.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    /// Whether (`row`, `col`) is one of this ship's cells.
    pub fn occupies(&self, row: i32, col: i32) -> bool {
        self.positions.contains(&(row, col))
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Damage taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ type: {}, orientation: {:?}, hits: {}/{}, positions: {:?} }}",
            self.ship_type,
            self.orientation,
            self.hits,
            self.ship_type.length(),
            self.positions,
        )
    }
}
