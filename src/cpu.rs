// Hunt/target opponent. Sees the enemy board only through attack results.
// Uses no_std collections from `alloc`.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    bitboard::BitBoard,
    common::{AttackResult, Coord},
    config::{in_bounds, BOARD_SIZE},
};

/// Bitboard type alias for convenience.
type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const _: () = assert!(BB::FITS, "board does not fit in the attacked-cell mask");

/// Search phase of the adversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No lead; sweep one checkerboard colour at random.
    Hunt,
    /// Following up on a hit.
    Target,
}

/// Compass direction along which a damaged ship is being followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Neighbour probe order around a fresh hit.
    const PROBE_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The cell one step away from `from`, saturating at the `i32` limits.
    pub fn step(self, from: Coord) -> Coord {
        let (r, c) = from;
        match self {
            Direction::North => (r.saturating_sub(1), c),
            Direction::South => (r.saturating_add(1), c),
            Direction::West => (r, c.saturating_sub(1)),
            Direction::East => (r, c.saturating_add(1)),
        }
    }

    /// Direction leading from `from` to `to` when both share a row or column.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        use core::cmp::Ordering::*;
        match (to.0.cmp(&from.0), to.1.cmp(&from.1)) {
            (Equal, Greater) => Some(Direction::East),
            (Equal, Less) => Some(Direction::West),
            (Greater, Equal) => Some(Direction::South),
            (Less, Equal) => Some(Direction::North),
            _ => None,
        }
    }
}

/// Computer opponent with private belief state about one enemy board.
///
/// Call [`Cpu::attack`] for the next shot, resolve it against the enemy
/// board, then hand the outcome to [`Cpu::process_result`].
#[derive(Debug, Clone)]
pub struct Cpu {
    rng: SmallRng,
    attacked: BB,
    queue: VecDeque<Coord>,
    first_hit: Option<Coord>,
    last_hit: Option<Coord>,
    direction: Option<Direction>,
    reversed: bool,
    // Unsunk hits gathered while tracking; reused when a line dead-ends.
    lead: Vec<Coord>,
    mode: Mode,
}

impl Cpu {
    /// Opponent seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic opponent for reproducible matches.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Cpu {
            rng,
            attacked: BB::new(),
            queue: VecDeque::new(),
            first_hit: None,
            last_hit: None,
            direction: None,
            reversed: false,
            lead: Vec::new(),
            mode: Mode::Hunt,
        }
    }

    /// Choose the next coordinate and record it as attacked.
    ///
    /// Never repeats a coordinate within a match. Returns `None` only once
    /// every cell of the board has been attacked.
    pub fn attack(&mut self) -> Option<Coord> {
        while let Some(coord) = self.queue.pop_front() {
            if let Ok(true) = self.attacked.insert(coord) {
                return Some(coord);
            }
        }
        if self.mode == Mode::Target {
            self.clear_tracking();
        }
        self.hunt()
    }

    /// Update belief state from the outcome of the shot at `position`.
    pub fn process_result(&mut self, result: AttackResult, position: Coord) {
        if in_bounds(position.0, position.1) {
            let _ = self.attacked.insert(position);
        }
        match result {
            AttackResult::Sunk => self.clear_tracking(),
            AttackResult::Hit => self.on_hit(position),
            AttackResult::Miss => {
                if self.mode == Mode::Target && self.direction.is_some() {
                    self.on_line_miss();
                }
            }
            AttackResult::AlreadyAttacked | AttackResult::InvalidPosition => {}
        }
    }

    /// Forget everything learned about the enemy board.
    pub fn reset(&mut self) {
        self.clear_tracking();
        self.attacked.clear();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Direction currently being followed, if a line has been confirmed.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn attacked_count(&self) -> usize {
        self.attacked.len()
    }

    pub fn has_attacked(&self, coord: Coord) -> bool {
        self.attacked.contains(coord)
    }

    /// Number of queued follow-up candidates.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // Random unattacked cell with even (row + col); row-major scan once the
    // even colour is exhausted.
    fn hunt(&mut self) -> Option<Coord> {
        let open = !self.attacked;
        let even = open & BB::parity(0);
        let pick = if even.is_empty() {
            open.nth(0)
        } else {
            let k = self.rng.random_range(0..even.len());
            even.nth(k)
        };
        let coord = pick?;
        let _ = self.attacked.insert(coord);
        Some(coord)
    }

    fn on_hit(&mut self, pos: Coord) {
        self.mode = Mode::Target;
        self.lead.push(pos);
        match (self.first_hit, self.direction) {
            (None, _) => {
                self.first_hit = Some(pos);
                self.last_hit = Some(pos);
                self.enqueue_neighbours(pos);
            }
            (Some(first), None) => match Direction::between(first, pos) {
                Some(dir) => {
                    self.direction = Some(dir);
                    self.reversed = false;
                    self.last_hit = Some(pos);
                    self.queue.clear();
                    self.extend();
                }
                None => self.enqueue_neighbours(pos),
            },
            (Some(_), Some(_)) => {
                self.last_hit = Some(pos);
                self.queue.clear();
                self.extend();
            }
        }
    }

    fn on_line_miss(&mut self) {
        self.queue.clear();
        if self.reversed {
            self.abandon_line();
        } else {
            self.reverse();
            self.extend();
        }
    }

    // Queue the next cell along the tracked line, turning back to the first
    // hit once the current end is blocked.
    fn extend(&mut self) {
        loop {
            let (Some(dir), Some(from)) = (self.direction, self.last_hit) else {
                return;
            };
            let next = dir.step(from);
            if in_bounds(next.0, next.1) && !self.attacked.contains(next) {
                self.queue.push_back(next);
                return;
            }
            if self.reversed {
                self.abandon_line();
                return;
            }
            self.reverse();
        }
    }

    fn reverse(&mut self) {
        self.direction = self.direction.map(Direction::opposite);
        self.last_hit = self.first_hit;
        self.reversed = true;
    }

    // Both ends of the line are closed but nothing sank: the hits span more
    // than one ship. Probe around every hit gathered so far.
    fn abandon_line(&mut self) {
        self.first_hit = None;
        self.last_hit = None;
        self.direction = None;
        self.reversed = false;
        self.queue.clear();
        let lead = core::mem::take(&mut self.lead);
        for &hit in &lead {
            self.enqueue_neighbours(hit);
        }
        self.lead = lead;
        if self.queue.is_empty() {
            self.clear_tracking();
        }
    }

    fn enqueue_neighbours(&mut self, pos: Coord) {
        for dir in Direction::PROBE_ORDER {
            let next = dir.step(pos);
            if in_bounds(next.0, next.1)
                && !self.attacked.contains(next)
                && !self.queue.contains(&next)
            {
                self.queue.push_back(next);
            }
        }
    }

    fn clear_tracking(&mut self) {
        self.queue.clear();
        self.first_hit = None;
        self.last_hit = None;
        self.direction = None;
        self.reversed = false;
        self.lead.clear();
        self.mode = Mode::Hunt;
    }
}

#[cfg(feature = "std")]
impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
