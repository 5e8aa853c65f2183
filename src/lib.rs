#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod cpu;
#[cfg(feature = "std")]
mod logging;
mod session;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use cpu::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_log_level, LOG_ENV};
pub use session::*;
pub use ship::*;
