//! Game state module - the single owner of all session state
//!
//! `GameState` owns the grid, the active piece, the score, and the game-over
//! flag. Every mutation, whether driven by the gravity tick or by player
//! commands, flows through the same transition functions here: the input path
//! and the tick path share one lock/clear/spawn implementation.

use crate::core::pieces::{spawn_x, Shape};
use crate::core::{Grid, PieceFactory};
use crate::types::{Command, PieceKind, DROP_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH, LINE_CLEAR_SCORE};

/// Pure collision check over a candidate piece placement.
///
/// A placement collides when any occupied shape cell falls outside the
/// horizontal bounds, at or below the bottom bound, or overlaps an occupied
/// grid cell. Cells above the grid (negative row) are exempt from the
/// occupancy check but not from the horizontal bounds.
pub fn collides(grid: &Grid, shape: &Shape, x: i8, y: i8) -> bool {
    for (dx, dy) in shape.cells() {
        let col = x + dx;
        let row = y + dy;

        if col < 0 || col >= GRID_WIDTH as i8 || row >= GRID_HEIGHT as i8 {
            return true;
        }
        if row >= 0 && grid.is_occupied(col, row) {
            return true;
        }
    }
    false
}

/// The currently falling piece: kind, current orientation, grid offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn position: horizontally centered, row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::template(kind);
        let x = spawn_x(&shape);
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<ActivePiece>,
    factory: PieceFactory,
    score: u32,
    game_over: bool,
    started: bool,
    drop_timer_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            factory: PieceFactory::new(seed),
            score: 0,
            game_over: false,
            started: false,
            drop_timer_ms: 0,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, mainly for scenario setup in tests
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Spawn the next randomly-selected piece.
    ///
    /// Returns false (and enters game over) when the fresh piece collides at
    /// the spawn position.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.factory.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a specific piece kind at the spawn position
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        self.started = true;

        let piece = ActivePiece::spawn(kind);
        if collides(&self.grid, &piece.shape, piece.x, piece.y) {
            // Board is full near the top: terminal state. Grid and score
            // stay frozen until an explicit restart.
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to shift the active piece horizontally; reverted on collision
    pub fn try_shift(&mut self, dx: i8) -> bool {
        let Some(piece) = self.active.as_ref() else {
            return false;
        };

        if collides(&self.grid, &piece.shape, piece.x + dx, piece.y) {
            return false;
        }

        if let Some(piece) = self.active.as_mut() {
            piece.x += dx;
        }
        true
    }

    /// Try to rotate the active piece clockwise.
    ///
    /// The rotated orientation is collision-checked before being committed;
    /// on failure the prior orientation is kept. No wall kicks are attempted.
    pub fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_ref() else {
            return false;
        };

        let rotated = piece.shape.rotated_cw();
        if collides(&self.grid, &rotated, piece.x, piece.y) {
            return false;
        }

        if let Some(piece) = self.active.as_mut() {
            piece.shape = rotated;
        }
        true
    }

    /// One downward transition, shared by gravity, soft drop, and hard drop.
    ///
    /// Returns true when the piece moved down one row. When the move would
    /// collide, the piece locks instead: it merges into the grid, full rows
    /// clear, the score updates, and the next piece spawns.
    pub fn step_down(&mut self) -> bool {
        let Some(piece) = self.active.as_ref() else {
            return false;
        };

        if collides(&self.grid, &piece.shape, piece.x, piece.y + 1) {
            self.lock_active();
            return false;
        }

        if let Some(piece) = self.active.as_mut() {
            piece.y += 1;
        }
        true
    }

    /// Drop the active piece straight down until it locks
    pub fn hard_drop(&mut self) {
        let Some(piece) = self.active.as_ref() else {
            return;
        };

        let mut y = piece.y;
        while !collides(&self.grid, &piece.shape, piece.x, y + 1) {
            y += 1;
        }

        if let Some(piece) = self.active.as_mut() {
            piece.y = y;
        }
        self.lock_active();
    }

    /// Merge the active piece into the grid, clear full rows, score them,
    /// and spawn the next piece. The only lock/clear/spawn path in the game.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.grid.merge(&piece.shape, piece.x, piece.y, piece.kind);

        let cleared = self.grid.clear_full_rows();
        self.score += LINE_CLEAR_SCORE * cleared as u32;

        self.spawn_piece();
    }

    /// Advance game time; fires a gravity step once the drop interval elapses.
    ///
    /// Returns true when a gravity step ran. Does nothing after game over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || !self.started || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < DROP_INTERVAL_MS {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down();
        true
    }

    /// Apply a player command.
    ///
    /// Invalid moves are silently rejected (returns false). After game over
    /// only `Restart` has any effect.
    pub fn apply(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Restart => {
                self.restart();
                true
            }
            _ if self.game_over || !self.started => false,
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::Rotate => self.try_rotate(),
            Command::SoftDrop => {
                self.drop_timer_ms = 0;
                self.step_down()
            }
            Command::HardDrop => {
                self.drop_timer_ms = 0;
                self.hard_drop();
                true
            }
        }
    }

    /// Reset grid, score, and game-over flag, then spawn a fresh piece.
    /// The piece sequence continues from the current RNG state.
    pub fn restart(&mut self) {
        let seed = self.factory.seed();
        *self = Self::new(seed);
        self.start();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
