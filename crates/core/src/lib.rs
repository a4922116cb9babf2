//! Core game engine - pure, deterministic, and testable.
//!
//! All game rules and state management live here, with no dependency on
//! UI or I/O:
//!
//! - **Deterministic**: the same seed produces an identical game
//! - **Single-owner**: one [`GameState`] exclusively owns one session's
//!   board and pieces; multiple sessions are multiple instances
//! - **Cooperative**: timers are plain accumulators advanced by the
//!   caller's `tick`; nothing blocks or suspends
//!
//! # Module Structure
//!
//! - [`shapes`]: static catalog of the 7 piece kinds, 4 rotation masks each
//! - [`piece`]: the active piece as a pure value holder
//! - [`board`]: 10x20 locked-cell grid, validity authority, row compaction
//! - [`game_state`]: the controller - input handling, gravity, key repeat,
//!   scoring, leveling, pause and game-over
//! - [`rng`]: seeded LCG with uniform piece draws
//! - [`scoring`]: the `100 * n * n` row-clear score table
//! - [`snapshot`]: read-only per-frame state for presentation code
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.handle_key_down(GameAction::MoveRight);
//! game.handle_key_down(GameAction::Rotate);
//! game.handle_key_down(GameAction::HardDrop);
//!
//! // One tick per frame with real elapsed milliseconds.
//! game.tick(16);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
pub use shapes::{mask_cells, rotation_state, Mask, MASK_SIZE};
pub use snapshot::{GameSnapshot, PieceSnapshot};
