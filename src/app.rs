use crate::command::Command;
use crate::consts;
use crate::engine::{Engine, Snapshot, StepEvent, StepResult};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;
use tracing::debug;

/// The terminal front end: drives the engine on a fixed tick, feeds it key
/// presses, and draws whatever snapshot it last produced
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    snapshot: Snapshot,
    next_tick: Option<Instant>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(engine: Engine<R>) -> App<R> {
        let snapshot = engine.snapshot();
        App {
            engine,
            snapshot,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self.snapshot, frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next tick or an input event, whichever comes
    /// first.  The tick source is suspended while the game is paused or
    /// over.
    fn process_input(&mut self) -> io::Result<()> {
        if self.engine.ticking() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + consts::TICK_PERIOD);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.next_tick = None;
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn tick(&mut self) {
        let StepResult { event, snapshot } = self.engine.step();
        if !matches!(event, StepEvent::Idle | StepEvent::Moved) {
            debug!(?event, score = snapshot.score(), "Tick");
        }
        self.snapshot = snapshot;
        self.next_tick = None;
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.engine.ticking() {
                self.engine.toggle_pause();
                self.snapshot = self.engine.snapshot();
            }
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        debug!(?cmd, "Received command");
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Turn(direction) => self.engine.enqueue_direction(direction),
            Command::Pause => self.engine.toggle_pause(),
            Command::Reset => {
                self.engine.reset();
                self.next_tick = None;
            }
            Command::ToggleGrid => self.engine.set_show_grid(!self.snapshot.show_grid()),
        }
        self.snapshot = self.engine.snapshot();
    }
}
