//! Shared types and constants for the board engine.
//!
//! Pure data with no external dependencies, usable from the core engine,
//! the input mapper, and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn origin**: (3, 0), rotation index 0
//!
//! # Timing Constants
//!
//! All timing is in milliseconds and advanced by the caller each tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Runner frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 500 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Gravity speed-up per level |
//! | `MIN_FALL_MS` | 150 | Gravity interval floor |
//! | `LEVEL_UP_MS` | 30000 | Wall-clock time per level |
//! | `KEY_REPEAT_DELAY_MS` | 250 | Held-key delay before auto-repeat |
//! | `KEY_REPEAT_INTERVAL_MS` | 100 | Auto-repeat cadence once started |

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for new pieces
pub const SPAWN_X: i8 = 3;

/// Spawn row for new pieces
pub const SPAWN_Y: i8 = 0;

/// Runner frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (500ms per row)
pub const BASE_FALL_MS: u32 = 500;

/// How much the gravity interval shrinks on each level-up
pub const FALL_STEP_MS: u32 = 50;

/// Gravity interval floor; difficulty never increases past this
pub const MIN_FALL_MS: u32 = 150;

/// Wall-clock time between level-ups (30 seconds)
pub const LEVEL_UP_MS: u32 = 30_000;

/// Held-key delay before auto-repeat starts
pub const KEY_REPEAT_DELAY_MS: u32 = 250;

/// Auto-repeat cadence once the delay has elapsed
pub const KEY_REPEAT_INTERVAL_MS: u32 = 100;

/// Number of rotation states per piece (90° steps)
pub const NUM_ROTATIONS: u8 = 4;

/// The seven tetromino piece kinds
///
/// Each kind has a distinct shape and render color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order. Uniform piece generation draws from this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// One-letter label for panels and previews
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked with the given piece kind
///
/// The board stores these in a flat array; the locked grid is the single
/// source of truth for occupancy.
pub type Cell = Option<PieceKind>;

/// One-shot input events fed into the controller
///
/// Each physical key press maps to exactly one of these. Held-key
/// auto-repeat is generated inside the controller's tick, not by
/// re-sending these events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Instantly drop piece to its lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° (advance rotation index)
    Rotate,
    /// Toggle pause state
    Pause,
}

/// Held movement directions, for key-up handling and repeat bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldDir {
    Left,
    Right,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_timing_defaults() {
        assert_eq!(BASE_FALL_MS, 500);
        assert_eq!(FALL_STEP_MS, 50);
        assert_eq!(MIN_FALL_MS, 150);
        assert_eq!(LEVEL_UP_MS, 30_000);
        assert_eq!(KEY_REPEAT_DELAY_MS, 250);
        assert_eq!(KEY_REPEAT_INTERVAL_MS, 100);
    }

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
