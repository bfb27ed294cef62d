use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::game::{Direction, GameConfig, GameEngine, TickOutcome};
use crate::input::{Command, InputHandler, SwipeTracker};
use crate::metrics::SessionStats;
use crate::render::Renderer;
use crate::schedule::GameSession;

/// Raw mode and alternate screen, undone on drop.
///
/// Created before any fallible setup step so an early `?` still restores
/// the terminal.
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self {
            restore: restore_terminal,
        };
        let mut out = stderr();
        execute!(out, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to disable raw mode");
    }
    let mut out = stderr();
    if let Err(err) = execute!(out, DisableMouseCapture, LeaveAlternateScreen, Show) {
        warn!(%err, "failed to leave alternate screen");
    }
}

/// Interactive terminal game
pub struct PlayMode {
    session: GameSession,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };

        Self {
            session: GameSession::new(engine),
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::acquire()?;
        let backend = CrosstermBackend::new(stderr());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;
        self.session.stop();

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Inert unless a game is running
                _ = self.session.next_tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.stats.refresh();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session.snapshot(), &self.stats);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => match self.input_handler.handle_key_event(key) {
                Command::Steer(direction) => self.steer(direction),
                Command::Start => self.start_game(),
                Command::Quit => self.should_quit = true,
                Command::None => {}
            },
            Event::Mouse(mouse) => {
                if let Some(direction) = self.swipe.handle_mouse_event(mouse) {
                    self.steer(direction);
                }
            }
            _ => {}
        }
    }

    fn steer(&mut self, direction: Direction) {
        if !self.session.steer(direction) {
            debug!(?direction, "steer ignored");
        }
    }

    fn start_game(&mut self) {
        if self.session.start() {
            self.stats.on_game_start();
            // A 1x1 board is finished as soon as it starts
            let status = self.session.snapshot().status;
            if status.is_finished() {
                self.stats.on_game_end(status, self.session.snapshot().score);
            }
        }
    }

    fn update_game(&mut self) {
        let outcome = self.session.on_tick();

        if matches!(outcome, TickOutcome::Collided(_) | TickOutcome::Won) {
            let snapshot = self.session.snapshot();
            self.stats.on_game_end(snapshot.status, snapshot.score);
        }
    }
}
