use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, tail first and head last
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently heading
    pub(super) direction: Direction,
}

impl Snake {
    /// Create the snake every game starts with: [`INITIAL_SNAKE_LENGTH`]
    /// cells along the top row, starting from the top-left corner and heading
    /// right.
    ///
    /// [`INITIAL_SNAKE_LENGTH`]: consts::INITIAL_SNAKE_LENGTH
    pub(crate) fn new() -> Snake {
        let body = (0..consts::INITIAL_SNAKE_LENGTH)
            .map(|x| Position::new(x, 0))
            .collect();
        Snake {
            body,
            direction: Direction::Right,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        // The body is never empty
        self.body.back().copied().unwrap_or_default()
    }

    /// Return the cells of the snake, tail first
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move the head to `pos` and drop the tail, keeping the length constant
    pub(crate) fn slither(&mut self, pos: Position) {
        self.body.push_back(pos);
        let _ = self.body.pop_front();
    }

    /// Move the head to `pos` without dropping the tail
    pub(crate) fn grow(&mut self, pos: Position) {
        self.body.push_back(pos);
    }
}
