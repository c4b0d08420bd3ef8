/// A single square of the board.  Coordinates are relative to the top-left
/// corner, with `y` increasing downwards.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }

    /// Test whether the cell lies on a square board with sides of length
    /// `board_size`
    pub(crate) fn in_bounds(self, board_size: u16) -> bool {
        self.x < board_size && self.y < board_size
    }

    /// Return the neighboring cell in the given direction, or `None` if that
    /// would leave a board with sides of length `board_size`.
    pub(crate) fn offset(self, direction: Direction, board_size: u16) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Cell { x, y }).filter(|c| c.in_bounds(board_size))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(2, 7), 10, Some(Cell::new(2, 6)))]
    #[case(Direction::Down, Cell::new(2, 7), 10, Some(Cell::new(2, 8)))]
    #[case(Direction::Left, Cell::new(2, 7), 10, Some(Cell::new(1, 7)))]
    #[case(Direction::Right, Cell::new(2, 7), 10, Some(Cell::new(3, 7)))]
    #[case(Direction::Up, Cell::new(2, 0), 10, None)]
    #[case(Direction::Down, Cell::new(2, 9), 10, None)]
    #[case(Direction::Left, Cell::new(0, 5), 10, None)]
    #[case(Direction::Right, Cell::new(9, 5), 10, None)]
    #[case(Direction::Right, Cell::new(0, 0), 1, None)]
    #[case(Direction::Right, Cell::new(u16::MAX, 0), u16::MAX, None)]
    fn test_offset(
        #[case] d: Direction,
        #[case] cell: Cell,
        #[case] board_size: u16,
        #[case] r: Option<Cell>,
    ) {
        assert_eq!(cell.offset(d, board_size), r);
    }

    #[rstest]
    #[case(Cell::new(0, 0), 20, true)]
    #[case(Cell::new(19, 19), 20, true)]
    #[case(Cell::new(20, 3), 20, false)]
    #[case(Cell::new(3, 20), 20, false)]
    #[case(Cell::new(0, 0), 0, false)]
    fn test_in_bounds(#[case] cell: Cell, #[case] board_size: u16, #[case] r: bool) {
        assert_eq!(cell.in_bounds(board_size), r);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn reverse_cancels_delta(#[case] d: Direction) {
        let (dx, dy) = d.delta();
        let (rx, ry) = d.reverse().delta();
        assert_eq!((dx + rx, dy + ry), (0, 0));
        assert_eq!(d.reverse().reverse(), d);
    }
}
