//! Gridfall: a terminal falling-block puzzle game.
//!
//! The crate splits into a pure rules layer and thin I/O shells:
//!
//! - [`core`]: grid, pieces, collision, line clearing, and the game state
//!   machine. No I/O, fully deterministic under a seed.
//! - [`term`]: framebuffer-based terminal rendering via crossterm.
//! - [`input`]: keyboard events mapped to the closed game command set.
//! - [`types`]: shared constants and plain data types.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
