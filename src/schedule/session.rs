use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use super::ticker::Ticker;
use crate::game::{Direction, GameEngine, GameStatus, Snapshot, TickOutcome};

/// Hosting context for one engine.
///
/// Owns the ticker while, and only while, the engine is running. Every exit
/// from Running (game over, win, restart, teardown) releases it.
pub struct GameSession<R: Rng = StdRng> {
    engine: GameEngine<R>,
    ticker: Option<Ticker>,
}

impl<R: Rng> GameSession<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            ticker: None,
        }
    }

    /// Start or restart the game with a fresh ticker.
    ///
    /// Returns false when a game is already running.
    pub fn start(&mut self) -> bool {
        if !self.engine.start() {
            return false;
        }

        self.release_ticker();
        if self.engine.status() == GameStatus::Running {
            let period = self.engine.config().tick_interval();
            debug!(?period, "ticker acquired");
            self.ticker = Some(Ticker::new(period));
        }

        true
    }

    /// Forward a heading change; never advances the game
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.engine.set_direction(direction)
    }

    /// Resolves on the next tick, or never when no ticker is held
    pub async fn next_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => ticker.tick().await,
            None => std::future::pending().await,
        }
    }

    /// Run one engine tick
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();

        if self.engine.status() != GameStatus::Running {
            self.release_ticker();
        }

        outcome
    }

    /// Teardown: drop the ticker regardless of engine state
    pub fn stop(&mut self) {
        if self.ticker.is_some() {
            info!("session stopped with ticker active");
        }
        self.release_ticker();
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.engine.snapshot()
    }

    fn release_ticker(&mut self) {
        if self.ticker.take().is_some() {
            debug!("ticker released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, GameConfig, Position};
    use std::time::Duration;
    use tokio::time::timeout;

    fn session_with(board_size: usize, cell: Position, direction: Direction) -> GameSession {
        let config = GameConfig {
            board_size,
            tick_interval_ms: 100,
            initial_cell: cell,
            initial_direction: direction,
        };
        GameSession::new(GameEngine::with_seed(config, 21))
    }

    async fn ticks_within(session: &mut GameSession, wait: Duration) -> bool {
        timeout(wait, session.next_tick()).await.is_ok()
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_never_ticks() {
        let mut session = session_with(10, Position::new(5, 5), Direction::Right);

        assert!(!session.is_ticking());
        assert!(!ticks_within(&mut session, Duration::from_secs(5)).await);
        assert_eq!(session.snapshot().status, GameStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_acquires_ticker() {
        let mut session = session_with(10, Position::new(5, 5), Direction::Right);

        assert!(session.start());
        assert!(session.is_ticking());
        assert!(ticks_within(&mut session, Duration::from_millis(150)).await);

        let outcome = session.on_tick();
        assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Ate));
        assert_eq!(session.snapshot().head(), Position::new(6, 5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_releases_ticker() {
        let mut session = session_with(10, Position::new(9, 0), Direction::Right);
        session.start();

        session.next_tick().await;
        let outcome = session.on_tick();

        assert_eq!(outcome, TickOutcome::Collided(CollisionType::Wall));
        assert!(!session.is_ticking());
        assert!(!ticks_within(&mut session, Duration::from_secs(5)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_game_over() {
        let mut session = session_with(10, Position::new(9, 0), Direction::Right);
        session.start();
        session.on_tick();
        assert_eq!(session.snapshot().status, GameStatus::GameOver);

        assert!(session.start());

        assert!(session.is_ticking());
        assert_eq!(session.snapshot().status, GameStatus::Running);
        assert_eq!(session.snapshot().snake, &[Position::new(9, 0)]);
        assert!(ticks_within(&mut session, Duration::from_millis(150)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_is_ignored() {
        let mut session = session_with(10, Position::new(5, 5), Direction::Right);
        session.start();
        session.on_tick();
        let head = session.snapshot().head();

        assert!(!session.start());
        assert!(session.is_ticking());
        assert_eq!(session.snapshot().head(), head);
    }

    #[tokio::test(start_paused = true)]
    async fn test_steering_does_not_tick() {
        let mut session = session_with(10, Position::new(5, 5), Direction::Right);
        session.start();

        assert!(session.steer(Direction::Up));
        assert!(session.steer(Direction::Down));
        assert!(!session.steer(Direction::Left));

        assert_eq!(session.snapshot().snake, &[Position::new(5, 5)]);
        assert_eq!(session.snapshot().direction, Direction::Right);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_releases_ticker() {
        let mut session = session_with(10, Position::new(5, 5), Direction::Right);
        session.start();

        session.stop();

        assert!(!session.is_ticking());
        assert!(!ticks_within(&mut session, Duration::from_secs(5)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_cell_board_never_ticks() {
        let mut session = session_with(1, Position::new(0, 0), Direction::Right);

        assert!(session.start());

        assert_eq!(session.snapshot().status, GameStatus::Won);
        assert!(!session.is_ticking());
    }
}
