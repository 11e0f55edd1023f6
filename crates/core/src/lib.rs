//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management. It has **zero
//! dependencies** on terminal handling or I/O, making it:
//!
//! - **Deterministic**: A seeded piece source produces identical games
//! - **Testable**: Every rule is exercised by unit and property tests
//! - **Portable**: Can run behind a terminal shell or headless
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with placement checks, movement and line clearing
//! - [`game_state`]: the engine owning the board and the live piece
//! - [`pieces`]: shape templates and the [`Piece`] value type
//! - [`rng`]: seedable piece selection
//! - [`snapshot`]: defensive grid copies for rendering
//!
//! # Game Rules
//!
//! - **Shapes**: L, T and I, picked uniformly at random
//! - **Gravity**: one row per tick; a piece that cannot fall locks in place
//! - **Line clear**: full rows are removed in one top-to-bottom sweep
//! - **Game over**: a freshly drawn piece cannot be placed at its spawn cells
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameState, PieceCatalog, StepOutcome};
//!
//! let mut game = GameState::new(10, 20, PieceCatalog::from_seed(12345));
//! assert!(!game.is_game_over());
//!
//! // Spawn cells always leave room to fall at least one row.
//! assert_eq!(game.tick_down(), StepOutcome::Moved);
//!
//! let grid = game.snapshot();
//! assert_eq!(grid.filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, GameStatus, SpawnResult, StepOutcome};
pub use pieces::{get_template, spawn_anchor, Piece};
pub use rng::{get_random_piece, PieceCatalog, PieceSource, ScriptedPieces};
pub use snapshot::Grid;
