use super::{
    board::{Board, Position},
    config::GameConfig,
    direction::Direction,
    state::{CollisionType, EngineState, GameStatus, Snapshot},
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// What a call to [`GameEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Engine was not running; nothing changed
    Ignored,
    /// Snake advanced one cell at constant length
    Moved,
    /// Snake ate and grew; new food placed
    Ate,
    /// Snake ate the last free cell
    Won,
    /// The move was refused and the game is over
    Collided(CollisionType),
}

/// The game engine that owns and advances all game state
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    board: Board,
    state: EngineState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from OS entropy
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let board = Board::new(config.board_size);
        let state = EngineState::idle(config.initial_cell, config.initial_direction);

        Self {
            config,
            board,
            state,
            rng,
        }
    }

    /// Begin a new game from Idle, GameOver or Won.
    ///
    /// Ignored while a game is running; returns whether a new game began.
    pub fn start(&mut self) -> bool {
        if self.state.status == GameStatus::Running {
            debug!("start ignored, game already running");
            return false;
        }

        self.state = EngineState::idle(self.config.initial_cell, self.config.initial_direction);
        self.state.food = self.spawn_food();
        self.state.status = match self.state.food {
            Some(_) => GameStatus::Running,
            // 1x1 board: the snake already covers everything
            None => GameStatus::Won,
        };

        info!(
            board_size = self.board.size(),
            food = ?self.state.food,
            status = ?self.state.status,
            "game started"
        );
        true
    }

    /// Buffer a heading change for the next tick.
    ///
    /// Only accepted while running, and never when `direction` reverses the
    /// current heading. The last accepted call before a tick wins.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.status != GameStatus::Running {
            return false;
        }

        if self.state.direction.is_opposite(direction) {
            debug!(current = ?self.state.direction, requested = ?direction, "reversal rejected");
            return false;
        }

        self.state.pending_direction = Some(direction);
        true
    }

    /// Advance the game by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Ignored;
        }

        if let Some(direction) = self.state.pending_direction.take() {
            self.state.direction = direction;
        }

        let new_head = self.state.snake.head().moved_in_direction(self.state.direction);

        if let Some(collision) = self.check_collision(new_head) {
            self.state.status = GameStatus::GameOver;
            info!(?collision, score = self.state.score, "game over");
            return TickOutcome::Collided(collision);
        }

        let ate_food = self.state.food == Some(new_head);
        self.state.snake.advance(new_head, ate_food);

        if !ate_food {
            trace!(x = new_head.x, y = new_head.y, "moved");
            return TickOutcome::Moved;
        }

        self.state.score += 1;
        self.state.food = self.spawn_food();

        match self.state.food {
            Some(food) => {
                debug!(score = self.state.score, x = food.x, y = food.y, "food eaten");
                TickOutcome::Ate
            }
            None => {
                self.state.status = GameStatus::Won;
                info!(score = self.state.score, "board filled");
                TickOutcome::Won
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: self.state.snake.segments(),
            food: self.state.food,
            score: self.state.score,
            status: self.state.status,
            direction: self.state.direction,
            board_size: self.board.size(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check if the new head position causes a collision.
    ///
    /// The current tail counts as occupied even though it would move away
    /// this tick.
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.board.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Uniform pick among free cells, `None` when the snake fills the board
    fn spawn_food(&mut self) -> Option<Position> {
        let free = self.board.free_cells(self.state.snake.segments());
        free.choose(&mut self.rng).copied()
    }
}
