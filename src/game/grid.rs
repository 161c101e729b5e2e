use crate::consts;
use std::fmt;
use thiserror::Error;

/// A position on the playing field, counted from the top-left corner
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) row: u16,
    pub(crate) col: u16,
}

impl Cell {
    pub(crate) const ORIGIN: Cell = Cell { row: 0, col: 0 };

    pub(crate) const fn new(row: u16, col: u16) -> Cell {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The dimensions of the playing field.  The field is a torus: leaving one
/// edge puts you on the opposite one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    height: u16,
    width: u16,
}

impl Grid {
    /// Construct a grid of the given size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the grid is smaller than
    /// [`MIN_HEIGHT`][consts::MIN_HEIGHT] × [`MIN_WIDTH`][consts::MIN_WIDTH].
    pub(crate) fn new(height: u16, width: u16) -> Result<Grid, GridTooSmall> {
        if height < consts::MIN_HEIGHT || width < consts::MIN_WIDTH {
            Err(GridTooSmall { height, width })
        } else {
            Ok(Grid { height, width })
        }
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    /// The cell in the middle of the grid
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.height / 2, self.width / 2)
    }

    /// Fold a cell that has strayed past an edge back onto the grid
    pub(crate) fn wrap(self, cell: Cell) -> Cell {
        Cell {
            row: if cell.row >= self.height { 0 } else { cell.row },
            col: if cell.col >= self.width { 0 } else { cell.col },
        }
    }

    /// Iterate over every cell in the grid in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "screen size too small: got {height} rows by {width} columns, need at least {min_height} by {min_width}",
    min_height = consts::MIN_HEIGHT,
    min_width = consts::MIN_WIDTH
)]
pub(crate) struct GridTooSmall {
    pub(crate) height: u16,
    pub(crate) width: u16,
}
