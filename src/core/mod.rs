//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O and is deterministic under a seed.

pub mod game;
pub mod grid;
pub mod pieces;
pub mod rng;

// Re-export commonly used types
pub use game::{collides, ActivePiece, GameState};
pub use grid::Grid;
pub use pieces::Shape;
pub use rng::{PieceFactory, SimpleRng};
