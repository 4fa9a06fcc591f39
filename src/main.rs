//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_2048::term`. Keys and mouse swipes map to engine actions; the engine
//! is ticked at a fixed timestep so its settle window elapses in real time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use tui_2048::config::AppConfig;
use tui_2048::core::{Collaborators, GameEngine, GameSnapshot, LogEventSink};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::store::{JsonFileBestScore, MemoryBestScore};
use tui_2048::term::{BellSound, FrameBuffer, GameView, RedrawFlag, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    tui_2048::logging::init(config.log_path.as_deref())?;

    let redraw = RedrawFlag::new();
    let mut game = build_engine(&config, redraw.clone())?;

    let mut term = TerminalRenderer::new().with_mouse_capture(config.mouse);
    term.enter()?;

    let result = run(&mut term, &mut game, &redraw);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(%err, "game loop failed");
    }
    info!(score = game.score(), best = game.best_score(), "exit");
    result
}

fn build_engine(config: &AppConfig, redraw: RedrawFlag) -> Result<GameEngine> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let hooks = Collaborators::new(rng)
        .with_events(LogEventSink)
        .with_sound(BellSound::stdout())
        .with_render(redraw);
    let hooks = match &config.best_path {
        Some(path) => hooks.with_best_score(JsonFileBestScore::new(path)),
        None => hooks.with_best_score(MemoryBestScore::default()),
    };

    info!(
        size = config.engine.size,
        win_value = config.engine.win_value,
        seed = ?config.seed,
        "starting game"
    );
    Ok(GameEngine::new(config.engine.clone(), hooks)?)
}

fn run(term: &mut TerminalRenderer, game: &mut GameEngine, redraw: &RedrawFlag) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut swipe = SwipeTracker::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render only when something changed.
        if redraw.take() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply(game, action, redraw);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(direction) = swipe.handle_mouse_event(mouse) {
                        apply(game, GameAction::Move(direction), redraw);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    redraw.mark();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if game.tick(TICK_MS) {
                redraw.mark();
            }
        }
    }
}

fn apply(game: &mut GameEngine, action: GameAction, redraw: &RedrawFlag) {
    let changed = game.apply_action(action);
    debug!(action = action.as_str(), changed, "input");
    redraw.mark();
}
