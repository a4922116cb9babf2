//! Piece module - the active falling piece.
//!
//! A `Piece` is a pure value holder: a catalog shape plus a position and
//! rotation index. It carries no validity logic of its own; the board is
//! the single authority on legality, and the controller reverts any
//! mutation the board rejects.

use crate::shapes::{mask_cells, rotation_state, Mask};
use crate::types::{PieceKind, NUM_ROTATIONS, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Rotation index, 0-3, wraps
    pub rotation: u8,
    /// Column of the mask's top-left corner in board space
    pub x: i8,
    /// Row of the mask's top-left corner in board space
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Advance the rotation index by one 90° step, wrapping modulo 4
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % NUM_ROTATIONS;
    }

    /// Undo one `rotate` (equivalent to rotating three more times)
    pub fn rotate_back(&mut self) {
        self.rotation = (self.rotation + NUM_ROTATIONS - 1) % NUM_ROTATIONS;
    }

    /// Translate the origin by an integer offset
    pub fn shift(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Occupancy mask for the current rotation
    pub fn mask(&self) -> &'static Mask {
        rotation_state(self.kind, self.rotation)
    }

    /// Iterate the piece's occupied cells in board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        mask_cells(self.mask()).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}
