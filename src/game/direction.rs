use serde::{Deserialize, Serialize};

/// Direction the snake can move
///
/// The y axis grows downwards, so `Up` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns true if the two unit vectors cancel out
    pub fn is_opposite(&self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        let (odx, ody) = other.delta();
        dx + odx == 0 && dy + ody == 0
    }

    /// Classify a swipe displacement.
    ///
    /// The axis with the larger magnitude wins and its sign picks the
    /// direction. Equal magnitudes resolve to the vertical axis. A zero
    /// displacement is not a swipe.
    pub fn from_swipe(dx: i32, dy: i32) -> Option<Direction> {
        if dx == 0 && dy == 0 {
            return None;
        }

        let dir = if dx.unsigned_abs() > dy.unsigned_abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        };

        Some(dir)
    }
}
