//! Terminal 2048 runner (default binary).
//!
//! Blocks on crossterm events: every key press or mouse swipe is applied to the session
//! to completion before the next event is read. Configuration comes from `TUI_2048_*`
//! environment variables (see [`tui_2048::config`]).

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_2048::best_score::{BestScoreStore, FileBestScore};
use tui_2048::config::GameConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref(), &config.log_filter)?;

    let mut store = FileBestScore::new(config.best_path.clone());
    let best = store.load().unwrap_or_else(|e| {
        warn!("{e:#}; starting best score from 0");
        0
    });

    let mut game = GameState::new(config.size, config.seed)?
        .with_spawn_policy(config.spawn_policy)
        .with_best(best);
    info!(
        "starting {0}x{0} game, seed {1}, spawn {2}, best {3} from {4}",
        game.size(),
        config.seed,
        game.spawn_policy().as_str(),
        best,
        store.path().display()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut store);

    // Always try to restore terminal state.
    let _ = term.exit();

    game.end_session();
    persist_best(&mut game, &mut store);
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    store: &mut impl BestScoreStore,
) -> Result<()> {
    let view = GameView::default();
    let mut swipe = SwipeTracker::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse(mouse).map(GameAction::from),
            Event::Resize(..) => {
                term.invalidate();
                swipe.reset();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            game.apply_action(action)?;
            persist_best(game, store);
        }
    }
}

/// Write the best score if the session raised it. Failures are logged, never fatal.
fn persist_best(game: &mut GameState, store: &mut impl BestScoreStore) {
    if let Some(best) = game.take_new_best() {
        if let Err(e) = store.save(best) {
            warn!("{e:#}");
        }
    }
}
