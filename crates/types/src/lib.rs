//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Coordinates are `(row, col)` with the origin at the top-left corner.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Fixed gravity interval |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameAction, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.color(), 2);
//!
//! let action = GameAction::from_str("softDrop").unwrap();
//! assert_eq!(action, GameAction::SoftDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds (one row down every 500ms)
pub const TICK_MS: u32 = 500;

/// Value of an empty grid cell
pub const EMPTY: u8 = 0;

/// A board position as `(row, col)`.
///
/// Signed so that deltas can be applied before bounds are checked.
pub type Coord = (i16, i16);

/// The falling-block shape variants
///
/// Each kind has a fixed 4-cell template and a distinct color tag:
/// - **L**: vertical bar with a foot to the right, tag 1
/// - **T**: nub on top of a 3-wide bar, tag 2
/// - **I**: horizontal 4-wide bar, tag 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    L,
    T,
    I,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::L, ShapeKind::T, ShapeKind::I];

    /// Color tag written into the grid for this kind (always non-zero).
    pub fn color(&self) -> u8 {
        match self {
            ShapeKind::L => 1,
            ShapeKind::T => 2,
            ShapeKind::I => 3,
        }
    }

    /// Reverse of [`ShapeKind::color`].
    pub fn from_color(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(ShapeKind::L),
            2 => Some(ShapeKind::T),
            3 => Some(ShapeKind::I),
            _ => None,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("l"), Some(ShapeKind::L));
    /// assert_eq!(ShapeKind::from_str("I"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("o"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(ShapeKind::L),
            "t" => Some(ShapeKind::T),
            "i" => Some(ShapeKind::I),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::L => "l",
            ShapeKind::T => "t",
            ShapeKind::I => "i",
        }
    }
}

/// Game actions that the shell forwards to the engine
///
/// Every action maps to one engine call. Blocked moves are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it when it cannot fall further
    SoftDrop,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("MOVERIGHT"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("rotateCw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
        }
    }
}
