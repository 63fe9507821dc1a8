//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row. A pass clearing N rows scores 100 * N;
/// there is no multi-line bonus multiplier.
pub const LINE_CLEAR_SCORE: u32 = 100;

/// The five canonical piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Bar,
    L,
    J,
    O,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Bar,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::T,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Bar => "bar",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::T => "t",
        }
    }
}

/// Game commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Restart,
}

/// Cell on the grid (None = empty, Some = locked piece kind)
pub type Cell = Option<PieceKind>;
