use super::grid::{Cell, Direction};
use std::collections::{HashSet, VecDeque};

/// The snake's body and heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, with the head at the front.  Never
    /// empty.
    pub(super) cells: VecDeque<Cell>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// The direction the snake will adopt on its next step
    pub(super) pending: Direction,
}

impl Snake {
    /// Create a new snake consisting of just a head at `head`, facing in
    /// `direction`
    pub(super) fn new(head: Cell, direction: Direction) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
            direction,
            pending: direction,
        }
    }

    pub(super) fn head(&self) -> Cell {
        self.cells[0]
    }

    pub(super) fn cells(&self) -> &VecDeque<Cell> {
        &self.cells
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Test whether any part of the snake, tail included, is on `cell`
    pub(super) fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub(super) fn occupied(&self) -> HashSet<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Request that the snake turn to face `direction` on its next step.
    /// Requests to reverse onto the current direction are dropped, and the
    /// return value is `false`.
    ///
    /// Only the most recent accepted request is kept.
    pub(super) fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.pending = direction;
            true
        }
    }

    /// Make the pending direction current and return it
    pub(super) fn adopt_pending(&mut self) -> Direction {
        self.direction = self.pending;
        self.direction
    }

    pub(super) fn push_head(&mut self, cell: Cell) {
        self.cells.push_front(cell);
    }

    /// Remove the last cell of the snake.  The head is never removed.
    pub(super) fn drop_tail(&mut self) {
        if self.cells.len() > 1 {
            let _ = self.cells.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right);
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.pending, Direction::Right);
        assert_eq!(snake.adopt_pending(), Direction::Right);
    }

    #[test]
    fn latest_valid_turn_wins() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right);
        assert!(snake.steer(Direction::Up));
        assert!(snake.steer(Direction::Down));
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.pending, Direction::Down);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.adopt_pending(), Direction::Down);
    }

    #[test]
    fn reversal_checked_against_current_not_pending() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right);
        assert!(snake.steer(Direction::Up));
        // Down reverses the pending Up but not the current Right
        assert!(snake.steer(Direction::Down));
        assert_eq!(snake.pending, Direction::Down);
    }

    #[test]
    fn head_is_never_dropped() {
        let mut snake = Snake::new(Cell::new(3, 3), Direction::Up);
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(3, 3));
    }
}
