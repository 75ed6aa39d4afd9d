//! The game-state engine.  Everything here is pure state transition; drawing
//! and timing are left to the caller.
mod bounds;
mod direction;
mod snake;
mod snapshot;
pub(crate) use self::bounds::{Bounds, BoundsError};
pub(crate) use self::direction::Direction;
use self::snake::Snake;
pub(crate) use self::snapshot::{Occupancy, Snapshot};
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info, trace};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    snake: Snake,
    /// `None` only once the snake has filled the grid
    food: Option<Position>,
    /// Direction changes requested since the last step, oldest first
    queue: VecDeque<Direction>,
    status: GameStatus,
    score: u32,
    /// Best score reached at the end of any game this session.  Survives
    /// resets.
    highest_score: u32,
    paused: bool,
    /// Whether the view should draw grid lines.  Has no effect on play.
    show_grid: bool,
}

impl Engine<rand::rngs::ThreadRng> {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Engine::with_rng(bounds, rand::rng())
    }
}

impl<R: Rng> Engine<R> {
    pub(crate) fn with_rng(bounds: Bounds, rng: R) -> Engine<R> {
        let mut engine = Engine {
            rng,
            bounds,
            snake: Snake::new(),
            food: None,
            queue: VecDeque::new(),
            status: GameStatus::Playing,
            score: 0,
            highest_score: 0,
            paused: false,
            show_grid: false,
        };
        engine.respawn_food();
        engine
    }

    /// Advance the game by one tick and return what happened along with the
    /// resulting snapshot.  Does nothing if the game is paused or over.
    pub(crate) fn step(&mut self) -> StepResult {
        let event = self.advance();
        trace!(?event, score = self.score, "Stepped");
        StepResult {
            event,
            snapshot: self.snapshot(),
        }
    }

    /// Start a new game.  The highest score and the grid-lines setting carry
    /// over.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new();
        self.food = None;
        self.queue.clear();
        self.status = GameStatus::Playing;
        self.score = 0;
        self.paused = false;
        self.respawn_food();
        debug!(highest_score = self.highest_score, "Game reset");
    }

    fn advance(&mut self) -> StepEvent {
        if !self.ticking() {
            return StepEvent::Idle;
        }
        let heading = self.resolve_heading();
        let head = self.snake.head();
        let Some(next_head) = heading.advance(head, self.bounds) else {
            debug!(x = head.x, y = head.y, ?heading, "Snake hit a wall");
            self.finish(GameStatus::Lost);
            return StepEvent::HitWall;
        };
        // This is checked against the whole body as it stands before moving,
        // tail included, so moving into the cell the tail is about to vacate
        // is still a collision.
        if self.snake.contains(next_head) {
            debug!(x = next_head.x, y = next_head.y, "Snake hit itself");
            self.finish(GameStatus::Lost);
            return StepEvent::HitSelf;
        }
        self.snake.turn(heading);
        if self.food == Some(next_head) {
            self.snake.grow(next_head);
            self.score += 1;
            self.respawn_food();
            if self.status == GameStatus::Won {
                StepEvent::Won
            } else {
                StepEvent::Ate
            }
        } else {
            self.snake.slither(next_head);
            StepEvent::Moved
        }
    }

    /// Place the food on a random cell not occupied by the snake.  If there
    /// are no such cells, the game is won.
    fn respawn_food(&mut self) {
        let occupied = self.snake.body().iter().copied().collect::<HashSet<_>>();
        self.food = self
            .bounds
            .positions()
            .filter(|p| !occupied.contains(p))
            .choose(&mut self.rng);
        match self.food {
            Some(pos) => debug!(x = pos.x, y = pos.y, "Placed food"),
            None => self.finish(GameStatus::Won),
        }
    }
}

impl<R> Engine<R> {
    /// Queue up a change of direction to be considered on a future step.
    /// Ignored once the game is over.  Intents queued while paused are kept
    /// and replayed, one per step, after the game resumes.
    pub(crate) fn enqueue_direction(&mut self, intent: Direction) {
        if self.status == GameStatus::Playing {
            self.queue.push_back(intent);
        }
    }

    pub(crate) fn toggle_pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.paused = !self.paused;
            debug!(paused = self.paused, "Toggled pause");
        }
    }

    pub(crate) fn set_show_grid(&mut self, show_grid: bool) {
        self.show_grid = show_grid;
    }

    /// Whether calling [`Engine::step()`] would currently do anything
    pub(crate) fn ticking(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        let mut cells = vec![Occupancy::Empty; self.bounds.area()];
        let body = self.snake.body().iter().map(|&p| (p, Occupancy::Snake));
        for (pos, occ) in body.chain(self.food.map(|p| (p, Occupancy::Food))) {
            if let Some(cell) = self.bounds.index_of(pos).and_then(|i| cells.get_mut(i)) {
                *cell = occ;
            }
        }
        Snapshot {
            bounds: self.bounds,
            cells,
            head: self.snake.head(),
            heading: self.snake.direction(),
            score: self.score,
            highest_score: self.highest_score,
            status: self.status,
            paused: self.paused,
            show_grid: self.show_grid,
        }
    }

    /// Pop queued directions until one is found that does not reverse the
    /// snake.  Reversals are discarded; anything after the accepted direction
    /// stays queued for later steps.
    fn resolve_heading(&mut self) -> Direction {
        let current = self.snake.direction();
        while let Some(intent) = self.queue.pop_front() {
            if !intent.is_opposite(current) {
                return intent;
            }
            trace!(?intent, "Discarded reversal");
        }
        current
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        if self.score > self.highest_score {
            self.highest_score = self.score;
        }
        info!(
            ?status,
            score = self.score,
            length = self.snake.len(),
            highest_score = self.highest_score,
            "Game ended"
        );
    }
}

#[cfg(test)]
impl<R> Engine<R> {
    /// Move the food to `pos` so that tests don't depend on where the RNG
    /// puts it
    pub(crate) fn set_food(&mut self, pos: Position) {
        self.food = Some(pos);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameStatus {
    Playing,
    /// The snake has filled the grid and there is nowhere left to put food
    Won,
    Lost,
}

/// What a call to [`Engine::step()`] did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepEvent {
    /// The game is paused or over
    Idle,
    Moved,
    Ate,
    /// Ate the last piece of food there was room for
    Won,
    HitWall,
    HitSelf,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct StepResult {
    pub(crate) event: StepEvent,
    pub(crate) snapshot: Snapshot,
}
