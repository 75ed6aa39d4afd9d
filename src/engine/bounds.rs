use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};
use thiserror::Error;

/// The dimensions of the playing field.  The set of cells is always derived
/// from these on demand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    width: u16,
    height: u16,
}

impl Bounds {
    /// Create a grid `width` columns wide and `height` rows tall.  The grid
    /// must be wide enough to hold the starting snake.
    pub(crate) fn new(width: u16, height: u16) -> Result<Bounds, BoundsError> {
        if width < consts::INITIAL_SNAKE_LENGTH {
            Err(BoundsError::TooNarrow(width))
        } else if height == 0 {
            Err(BoundsError::NoRows)
        } else {
            Ok(Bounds { width, height })
        }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Total number of cells in the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterate over every cell, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    /// Return the row-major index of `pos`, or `None` if it is off the grid
    pub(crate) fn index_of(self, pos: Position) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height)
            .then(|| usize::from(pos.y) * usize::from(self.width) + usize::from(pos.x))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoundsError {
    #[error("grid width {0} is too narrow; must be at least {min}", min = consts::INITIAL_SNAKE_LENGTH)]
    TooNarrow(u16),
    #[error("grid must have at least one row")]
    NoRows,
}
