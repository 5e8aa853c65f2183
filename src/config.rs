use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;

/// Fleet catalog, largest ships first.
pub const FLEET: [ShipType; 4] = ShipType::ALL;

/// Number of ships in a complete fleet.
pub const TOTAL_SHIPS: usize = 1 + 2 + 3 + 4;

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 6 + 2 * 4 + 3 * 3 + 4 * 2;

/// Origins sampled for one ship before the random fill starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Full restarts allowed before the random fill gives up.
pub const MAX_PLACEMENT_RESTARTS: usize = 64;

/// Returns `true` when (`row`, `col`) lies on the board.
#[inline]
pub fn in_bounds(row: i32, col: i32) -> bool {
    let n = BOARD_SIZE as i32;
    (0..n).contains(&row) && (0..n).contains(&col)
}
