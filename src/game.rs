//! Host-facing game facade
//!
//! Owns the session state, the frame clock and the best-score store, and
//! persists a new record when a session ends.

use crate::highscores::BestScore;
use crate::persistence::ScoreStore;
use crate::platform::FrameClock;
use crate::sim::{
    GameEvent, GameState, InputEvent, PlayArea, Receptacle, SessionPhase, Verdict, handle_input,
    layout_row, start, tick,
};
use crate::tuning::Tuning;
use crate::view::Snapshot;

/// Game instance holding all state
pub struct Game<S: ScoreStore> {
    state: GameState,
    store: S,
    clock: FrameClock,
    // Track phase for auto-save
    last_phase: SessionPhase,
}

impl<S: ScoreStore> Game<S> {
    /// Create an idle game with the default bin layout; the best score is
    /// read from `store` (missing counts as 0)
    pub fn new(seed: u64, tuning: Tuning, play_area: PlayArea, store: S) -> Self {
        let mut state = GameState::new(seed, tuning, play_area);
        state.best_score = BestScore::load(&store).value;
        Self {
            last_phase: state.phase,
            state,
            store,
            clock: FrameClock::new(),
        }
    }

    /// Start a session, or retry after one ended
    pub fn start(&mut self) {
        self.clock.reset();
        start(&mut self.state);
        self.last_phase = self.state.phase;
    }

    /// Run the simulation for the frame at `now_ms` (host timestamp)
    ///
    /// Events raised by the frame queue up until [`Game::drain_events`];
    /// hosts that only read [`Game::snapshot`] should still drain once per
    /// frame. [`Game::start`] discards whatever is left over.
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.advance(now_ms);
        self.step(dt);
    }

    /// Run the simulation for `dt_ms`
    pub fn step(&mut self, dt_ms: f32) {
        tick(&mut self.state, dt_ms);
        self.on_phase_change();
    }

    /// Apply a host input event
    pub fn handle(&mut self, event: &InputEvent) -> Option<Verdict> {
        handle_input(&mut self.state, event)
    }

    /// The play area was resized: relayout the bins
    pub fn resize(&mut self, play_area: PlayArea) {
        self.state.set_layout(play_area, layout_row(&play_area));
    }

    /// Install a custom bin layout
    pub fn set_layout(&mut self, play_area: PlayArea, receptacles: Vec<Receptacle>) {
        self.state.set_layout(play_area, receptacles);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Auto-save the record when a session ends with a new best
    fn on_phase_change(&mut self) {
        let current = self.state.phase;
        if current == self.last_phase {
            return;
        }
        if current == SessionPhase::Ended {
            if let Some(result) = self.state.last_result.filter(|r| r.new_best) {
                self.store.save_best_score(result.best);
            }
        }
        self.last_phase = current;
    }
}
