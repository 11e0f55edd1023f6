//! Property tests for board rules and engine invariants.
//!
//! Covered:
//! - `can_place` agrees with a cell-by-cell bounds and emptiness check.
//! - Clearing a board without full rows changes nothing.
//! - Every engine step keeps the filled-cell count consistent with its outcome.
//! - Cells only ever hold empty or a shape color tag.
//! - Gravity alone ends every seeded game in bounded time.

use proptest::prelude::*;
use tui_blockfall::core::{Board, GameState, Piece, PieceCatalog, SpawnResult, StepOutcome};
use tui_blockfall::types::{GameAction, ShapeKind};

const W: usize = 10;
const H: usize = 20;

fn board_from_mask(mask: &[bool]) -> Board {
    let mut board = Board::new(W, H);
    for (i, &filled) in mask.iter().enumerate() {
        if filled {
            board.set((i / W) as i16, (i % W) as i16, 1);
        }
    }
    board
}

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    prop_oneof![Just(ShapeKind::L), Just(ShapeKind::T), Just(ShapeKind::I)]
}

fn action_strategy() -> impl Strategy<Value = Option<GameAction>> {
    prop_oneof![
        Just(None),
        Just(Some(GameAction::MoveLeft)),
        Just(Some(GameAction::MoveRight)),
        Just(Some(GameAction::SoftDrop)),
    ]
}

proptest! {
    #[test]
    fn can_place_matches_cellwise_check(
        mask in prop::collection::vec(prop::bool::weighted(0.3), W * H),
        kind in kind_strategy(),
        row in -3i16..23,
        col in -4i16..13,
    ) {
        let board = board_from_mask(&mask);
        let piece = Piece::at(kind, row, col);

        let expected = piece.cells().iter().all(|&(r, c)| {
            r >= 0 && c >= 0 && (r as usize) < H && (c as usize) < W
                && !mask[r as usize * W + c as usize]
        });
        prop_assert_eq!(board.can_place(&piece), expected);
    }

    #[test]
    fn clearing_without_full_rows_is_noop(
        mask in prop::collection::vec(any::<bool>(), W * H),
        holes in prop::collection::vec(0usize..W, H),
    ) {
        let mut board = board_from_mask(&mask);
        for (row, &col) in holes.iter().enumerate() {
            board.set(row as i16, col as i16, 0);
        }
        let before = board.clone();

        prop_assert_eq!(board.clear_full_lines(), 0);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn steps_keep_cell_count_consistent(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..300),
    ) {
        let mut game = GameState::new(W, H, PieceCatalog::from_seed(seed));

        for action in actions {
            let before = game.snapshot().filled_count();

            let outcome = match action {
                Some(GameAction::MoveLeft) => {
                    game.move_left();
                    StepOutcome::Moved
                }
                Some(GameAction::MoveRight) => {
                    game.move_right();
                    StepOutcome::Moved
                }
                _ => game.tick_down(),
            };

            let after = game.snapshot().filled_count();
            match outcome {
                StepOutcome::Moved | StepOutcome::Idle => prop_assert_eq!(after, before),
                StepOutcome::Locked { lines_cleared, spawn } => {
                    let spawned = if matches!(spawn, SpawnResult::Spawned(_)) { 4 } else { 0 };
                    prop_assert_eq!(after + lines_cleared * W, before + spawned);
                }
            }

            prop_assert!(game.snapshot().cells().iter().all(|&c| c <= 3));
            if game.is_game_over() {
                prop_assert!(game.current_piece().is_none());
            }
        }
    }

    #[test]
    fn gravity_alone_ends_the_game(seed in any::<u64>()) {
        let mut game = GameState::new(W, H, PieceCatalog::from_seed(seed));

        // Nothing moves sideways, so no row outside cols 3..=6 ever fills and
        // each piece adds four cells for good.
        let mut ticks = 0;
        while !game.is_game_over() {
            game.tick_down();
            ticks += 1;
            prop_assert!(ticks <= (W * H / 4 + 1) * H);
        }
        prop_assert_eq!(game.lines_cleared(), 0);
        prop_assert_eq!(game.tick_down(), StepOutcome::Idle);
    }
}
