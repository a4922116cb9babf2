//! Terminal presentation adapter.
//!
//! Reads engine snapshots and draws them; sends nothing back into the
//! engine. The view ([`GameView`]) is pure, the renderer
//! ([`TerminalRenderer`]) owns the raw-mode terminal session.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::FrameBuffer;
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
