//! Game state module - the engine driving one game session
//!
//! This module ties together the board, the live piece and the piece source.
//! It handles spawning, movement, locking, line clears and the game-over
//! transition. Timing lives in the caller: every [`GameState::tick_down`] is
//! one gravity step.

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::{PieceCatalog, PieceSource};
use crate::snapshot::Grid;
use crate::types::{GameAction, ShapeKind};

/// Engine lifecycle.
///
/// Spawning and locking happen inside a single call, so only the resting
/// states are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// A live piece is on the board.
    Falling,
    /// A new piece could not be placed. Terminal.
    GameOver,
}

/// Result of trying to bring a new piece into play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnResult {
    Spawned(ShapeKind),
    /// A piece is already falling; nothing changed.
    AlreadyLive(ShapeKind),
    /// Spawn cells were blocked; the game is over.
    Blocked,
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece fell one row.
    Moved,
    /// The piece locked, full rows were cleared and a replacement was drawn.
    Locked {
        lines_cleared: usize,
        spawn: SpawnResult,
    },
    /// The game is already over; nothing changed.
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = PieceCatalog> {
    board: Board,
    current: Option<Piece>,
    source: S,
    status: GameStatus,
    /// Successful spawns so far, including the current piece.
    pieces_spawned: u32,
    lines_cleared: u32,
}

impl<S: PieceSource> GameState<S> {
    /// Create a game on an empty `width x height` board and spawn the first piece.
    ///
    /// A board too small for the spawn cells starts out in [`GameStatus::GameOver`].
    pub fn new(width: usize, height: usize, source: S) -> Self {
        let mut state = Self {
            board: Board::new(width, height),
            current: None,
            source,
            status: GameStatus::Falling,
            pieces_spawned: 0,
            lines_cleared: 0,
        };
        state.spawn();
        state
    }

    /// Draw the next piece and put it on the board.
    ///
    /// When the spawn cells are not free the game ends and the board is left
    /// untouched. While a piece is still falling this does nothing.
    pub fn spawn(&mut self) -> SpawnResult {
        if self.status == GameStatus::GameOver {
            return SpawnResult::Blocked;
        }
        if let Some(live) = self.current {
            return SpawnResult::AlreadyLive(live.kind);
        }

        let piece = self.source.next_piece();
        if !self.board.can_place(&piece) {
            self.status = GameStatus::GameOver;
            self.current = None;
            return SpawnResult::Blocked;
        }

        self.board.place(&piece);
        self.current = Some(piece);
        self.status = GameStatus::Falling;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        SpawnResult::Spawned(piece.kind)
    }

    /// One gravity step: fall a row, or lock, clear lines and respawn.
    pub fn tick_down(&mut self) -> StepOutcome {
        if self.status == GameStatus::GameOver {
            return StepOutcome::Idle;
        }
        let Some(mut piece) = self.current else {
            return StepOutcome::Idle;
        };

        if self.board.can_move(&piece, 1, 0) {
            self.board.move_piece(&mut piece, 1, 0);
            self.current = Some(piece);
            return StepOutcome::Moved;
        }

        self.board.lock(&piece);
        let lines_cleared = self.board.clear_full_lines();
        self.lines_cleared = self.lines_cleared.wrapping_add(lines_cleared as u32);
        self.current = None;

        let spawn = self.spawn();
        StepOutcome::Locked {
            lines_cleared,
            spawn,
        }
    }

    /// Shift the piece one column left. Returns false when blocked.
    pub fn move_left(&mut self) -> bool {
        self.try_shift(0, -1)
    }

    /// Shift the piece one column right. Returns false when blocked.
    pub fn move_right(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    fn try_shift(&mut self, d_row: i16, d_col: i16) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }
        let Some(mut piece) = self.current else {
            return false;
        };

        if !self.board.can_move(&piece, d_row, d_col) {
            return false;
        }
        self.board.move_piece(&mut piece, d_row, d_col);
        self.current = Some(piece);
        true
    }

    /// Apply an action from the shell.
    ///
    /// Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.tick_down() != StepOutcome::Idle,
        }
    }
}

impl<S> GameState<S> {
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.current
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Defensive copy of the board for rendering
    pub fn snapshot(&self) -> Grid {
        self.board.snapshot()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
