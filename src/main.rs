//! Terminal block-fall runner (default binary).
//!
//! Reads the session config, then drives the engine from crossterm key events
//! and a fixed gravity tick. Rendering goes through the framebuffer renderer.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_blockfall::config::GameConfig;
use tui_blockfall::core::{GameState, PieceCatalog, SpawnResult, StepOutcome};
use tui_blockfall::event_log::{EventLog, LogEvent};
use tui_blockfall::input::{handle_key_event, is_press, should_quit};
use tui_blockfall::term::{GameView, StatusView, TerminalRenderer, Viewport};
use tui_blockfall::types::GameAction;

/// How a session ended.
enum Exit {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let config = GameConfig::load()?;

    let mut log = match &config.log_path {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };

    let catalog = match config.seed {
        Some(seed) => PieceCatalog::from_seed(seed),
        None => PieceCatalog::from_entropy(),
    };
    let mut game = GameState::new(config.width, config.height, catalog);

    log.record(&LogEvent::SessionStart {
        seed: game.source().seed(),
        width: config.width,
        height: config.height,
        tick_ms: config.tick_ms,
    });
    if let Some(piece) = game.current_piece() {
        log.record(&LogEvent::spawn(piece.kind));
    }

    // Restore the terminal before the panic message is printed.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ =
            crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::style::ResetColor);
        let _ = crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::cursor::Show);
        let _ = crossterm::ExecutableCommand::execute(
            &mut io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
        );
        eprint!("{panic_info}\n\n");
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut log, config.tick_duration());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(err) = log.take_error() {
        eprintln!("[Log] Event log disabled after write error: {}", err);
    }

    match result? {
        Exit::GameOver => eprintln!(
            "[Game] Game over! pieces={} lines={}",
            game.pieces_spawned(),
            game.lines_cleared()
        ),
        Exit::Quit => eprintln!(
            "[Game] Quit. pieces={} lines={}",
            game.pieces_spawned(),
            game.lines_cleared()
        ),
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    log: &mut EventLog,
    tick_duration: Duration,
) -> Result<Exit> {
    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let status = StatusView {
            game_over: game.is_game_over(),
            pieces: game.pieces_spawned(),
            lines: game.lines_cleared(),
            seed: game.source().seed(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), &status, Viewport::new(w, h));
        term.draw(&fb)?;

        // Ticks stop; the final frame stays up until any key.
        if game.is_game_over() {
            match game_over_input(&event::read()?) {
                GameOverInput::Exit => return Ok(Exit::GameOver),
                GameOverInput::Redraw => term.invalidate(),
                GameOverInput::Ignore => {}
            }
            continue;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(key) => {
                    if should_quit(key) {
                        return Ok(Exit::Quit);
                    }
                    match handle_key_event(key) {
                        Some(GameAction::SoftDrop) => {
                            let outcome = game.tick_down();
                            log_step(log, outcome, game);
                        }
                        Some(action) => {
                            game.apply_action(action);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let outcome = game.tick_down();
            log_step(log, outcome, game);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameOverInput {
    Exit,
    /// The terminal was resized; the frame must be drawn again in full.
    Redraw,
    Ignore,
}

fn game_over_input(event: &Event) -> GameOverInput {
    match event {
        Event::Key(key) if is_press(*key) => GameOverInput::Exit,
        Event::Resize(_, _) => GameOverInput::Redraw,
        _ => GameOverInput::Ignore,
    }
}

fn log_step(log: &mut EventLog, outcome: StepOutcome, game: &GameState) {
    let StepOutcome::Locked {
        lines_cleared,
        spawn,
    } = outcome
    else {
        return;
    };

    log.record(&LogEvent::Lock {
        lines: lines_cleared,
    });
    match spawn {
        SpawnResult::Spawned(kind) => log.record(&LogEvent::spawn(kind)),
        SpawnResult::Blocked => log.record(&LogEvent::GameOver {
            pieces: game.pieces_spawned(),
            lines: game.lines_cleared(),
        }),
        SpawnResult::AlreadyLive(_) => {}
    }
}
