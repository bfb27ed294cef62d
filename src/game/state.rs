use super::board::Position;
use super::direction::Direction;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
}

impl Snake {
    /// A one-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Any segment, tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`, dropping the tail unless growing
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Not started yet
    Idle,
    /// Ticks are being applied
    Running,
    /// Hit a wall or itself; terminal until restarted
    GameOver,
    /// Snake covers every cell; terminal until restarted
    Won,
}

impl GameStatus {
    /// Terminal states that accept a restart
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Won)
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Everything the engine mutates, owned by a single engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub snake: Snake,
    pub food: Option<Position>,
    pub direction: Direction,
    /// Last accepted steer since the previous tick
    pub pending_direction: Option<Direction>,
    pub score: u32,
    pub status: GameStatus,
}

impl EngineState {
    /// Pre-game state: initial snake, no food
    pub fn idle(initial_cell: Position, initial_direction: Direction) -> Self {
        Self {
            snake: Snake::new(initial_cell),
            food: None,
            direction: initial_direction,
            pending_direction: None,
            score: 0,
            status: GameStatus::Idle,
        }
    }
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub snake: &'a [Position],
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
    pub board_size: usize,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    /// Index of `pos` in the snake, head = 0
    pub fn segment_index(&self, pos: Position) -> Option<usize> {
        self.snake.iter().position(|segment| *segment == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.segments(), &[Position::new(6, 5)]);

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.segments(), &[Position::new(7, 5), Position::new(6, 5)]);
    }

    #[test]
    fn test_occupies_includes_head_and_tail() {
        let snake = Snake::from_segments(vec![
            Position::new(3, 3),
            Position::new(2, 3),
            Position::new(1, 3),
        ]);
        assert!(snake.occupies(Position::new(3, 3)));
        assert!(snake.occupies(Position::new(1, 3)));
        assert!(!snake.occupies(Position::new(4, 3)));
    }

    #[test]
    #[should_panic]
    fn test_empty_snake_rejected() {
        Snake::from_segments(Vec::new());
    }

    #[test]
    fn test_finished_states() {
        assert!(!GameStatus::Idle.is_finished());
        assert!(!GameStatus::Running.is_finished());
        assert!(GameStatus::GameOver.is_finished());
        assert!(GameStatus::Won.is_finished());
    }

    #[test]
    fn test_snapshot_segment_index() {
        let body = [Position::new(2, 2), Position::new(1, 2)];
        let snapshot = Snapshot {
            snake: &body,
            food: None,
            score: 1,
            status: GameStatus::Running,
            direction: Direction::Right,
            board_size: 4,
        };
        assert_eq!(snapshot.head(), Position::new(2, 2));
        assert_eq!(snapshot.segment_index(Position::new(1, 2)), Some(1));
        assert_eq!(snapshot.segment_index(Position::new(0, 0)), None);
    }
}
