use super::bounds::Bounds;
use super::direction::Direction;
use super::GameStatus;
use ratatui::layout::Position;

/// What occupies a single grid cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Occupancy {
    Empty,
    Snake,
    Food,
}

/// An immutable picture of the engine's state, handed to the view layer for
/// rendering
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(super) bounds: Bounds,
    /// Occupancy of every cell in row-major order
    pub(super) cells: Vec<Occupancy>,
    pub(super) head: Position,
    pub(super) heading: Direction,
    pub(super) score: u32,
    pub(super) highest_score: u32,
    pub(super) status: GameStatus,
    pub(super) paused: bool,
    pub(super) show_grid: bool,
}

impl Snapshot {
    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Iterate over every cell of the grid along with its occupant
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Position, Occupancy)> + '_ {
        self.bounds.positions().zip(self.cells.iter().copied())
    }

    pub(crate) fn head(&self) -> Position {
        self.head
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn highest_score(&self) -> u32 {
        self.highest_score
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn show_grid(&self) -> bool {
        self.show_grid
    }
}
