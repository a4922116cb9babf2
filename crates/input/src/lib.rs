//! Terminal input mapping (engine-facing).
//!
//! Translates `crossterm` key events into the engine's discrete input
//! events. Press mapping is one-shot: the engine generates held-key
//! auto-repeat itself, so terminal auto-repeat events must not be fed
//! back in.

pub mod map;

pub use blockfall_types as types;

pub use map::{key_down_action, key_up_direction, should_quit};
