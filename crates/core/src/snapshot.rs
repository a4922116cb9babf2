//! Read-only per-frame view of a game session.
//!
//! The presentation adapter consumes these; it never touches the engine
//! directly. Snapshots are plain `Copy` data so a caller can keep one and
//! refill it every frame.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The active piece as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a frame needs: grid, pieces, score, level, and flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<PieceSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: PieceKind::I,
            score: 0,
            high_score: 0,
            level: 1,
            paused: false,
            game_over: false,
        }
    }
}
