use super::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Return the cell one step from `cell` in this direction, wrapping
    /// around the edges of `grid`
    pub(crate) fn advance(self, cell: Cell, grid: Grid) -> Cell {
        let Cell { mut row, mut col } = cell;
        match self {
            Direction::Up => row = decrement_wrapping(row, grid.height()),
            Direction::Down => row = increment_wrapping(row, grid.height()),
            Direction::Left => col = decrement_wrapping(col, grid.width()),
            Direction::Right => col = increment_wrapping(col, grid.width()),
        }
        Cell { row, col }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the direction in which one step from `from` lands on `to`, if
    /// the two cells are adjacent on `grid`
    pub(crate) fn between(from: Cell, to: Cell, grid: Grid) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.advance(from, grid) == to)
    }
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    match x.checked_sub(1) {
        Some(x2) if x2 < max => x2,
        _ => max - 1,
    }
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < max).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(7, 2), Cell::new(6, 2))]
    #[case(Direction::Down, Cell::new(7, 2), Cell::new(8, 2))]
    #[case(Direction::Left, Cell::new(7, 2), Cell::new(7, 1))]
    #[case(Direction::Right, Cell::new(7, 2), Cell::new(7, 3))]
    #[case(Direction::Up, Cell::new(0, 2), Cell::new(14, 2))]
    #[case(Direction::Down, Cell::new(14, 2), Cell::new(0, 2))]
    #[case(Direction::Left, Cell::new(7, 0), Cell::new(7, 11))]
    #[case(Direction::Right, Cell::new(7, 11), Cell::new(7, 0))]
    fn test_advance(#[case] d: Direction, #[case] cell: Cell, #[case] r: Cell) {
        let grid = Grid::new(15, 12).unwrap();
        assert_eq!(d.advance(cell, grid), r);
    }

    #[test]
    fn reverse_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[rstest]
    #[case(Cell::new(5, 5), Cell::new(5, 6), Some(Direction::Right))]
    #[case(Cell::new(5, 5), Cell::new(4, 5), Some(Direction::Up))]
    #[case(Cell::new(5, 11), Cell::new(5, 0), Some(Direction::Right))]
    #[case(Cell::new(0, 3), Cell::new(14, 3), Some(Direction::Up))]
    #[case(Cell::new(5, 5), Cell::new(6, 6), None)]
    #[case(Cell::new(5, 5), Cell::new(5, 5), None)]
    fn test_between(#[case] from: Cell, #[case] to: Cell, #[case] r: Option<Direction>) {
        let grid = Grid::new(15, 12).unwrap();
        assert_eq!(Direction::between(from, to, grid), r);
    }
}
