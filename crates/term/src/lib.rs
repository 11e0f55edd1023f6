//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders grid snapshots into a simple framebuffer that is then flushed
//! to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so it can be unit-tested without a terminal
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
