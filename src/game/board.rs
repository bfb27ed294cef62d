use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid
///
/// Coordinates are signed so that a head stepping off the board can be
/// represented and rejected by [`Board::is_in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square N×N grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let n = self.size as i32;
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }

    /// Check if `pos` appears in `cells`
    pub fn is_occupied(cells: &[Position], pos: Position) -> bool {
        cells.contains(&pos)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let n = self.size as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Position::new(x, y)))
    }

    /// Cells not covered by `occupied`, row-major
    pub fn free_cells(&self, occupied: &[Position]) -> Vec<Position> {
        self.cells()
            .filter(|pos| !Self::is_occupied(occupied, *pos))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in_direction(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_bounds_checking() {
        let board = Board::new(20);

        assert!(board.is_in_bounds(Position::new(0, 0)));
        assert!(board.is_in_bounds(Position::new(19, 19)));
        assert!(!board.is_in_bounds(Position::new(-1, 0)));
        assert!(!board.is_in_bounds(Position::new(0, -1)));
        assert!(!board.is_in_bounds(Position::new(20, 0)));
        assert!(!board.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_occupancy() {
        let cells = [Position::new(1, 1), Position::new(1, 2)];
        assert!(Board::is_occupied(&cells, Position::new(1, 2)));
        assert!(!Board::is_occupied(&cells, Position::new(2, 1)));
        assert!(!Board::is_occupied(&[], Position::new(0, 0)));
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::new(2);
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
        assert_eq!(board.cell_count(), 4);
    }

    #[test]
    fn test_free_cells_excludes_occupied() {
        let board = Board::new(3);
        let snake = [Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)];
        let free = board.free_cells(&snake);

        assert_eq!(free.len(), 6);
        assert!(snake.iter().all(|pos| !free.contains(pos)));
    }

    #[test]
    fn test_full_board_has_no_free_cells() {
        let board = Board::new(2);
        let all: Vec<_> = board.cells().collect();
        assert!(board.free_cells(&all).is_empty());
    }
}
