//! Session lifecycle and the per-frame update
//!
//! `Idle/Ended -> Playing` on [`start`], `Playing -> Ended` when the clock
//! runs out. [`tick`] does nothing outside `Playing`, so a frame that arrives
//! after the session ended is harmless.

use super::difficulty::{Difficulty, progress};
use super::judge::apply_floor_loss;
use super::spawn::{clear_items, spawn_item};
use super::state::{FallingItem, GameEvent, GameState, SessionPhase, SessionResult};
use crate::consts::MIN_COMBO;
use crate::highscores::BestScore;

/// Begin (or restart) a session. Valid from any phase; always yields the
/// same fresh counters with exactly one item on screen. Undrained events of
/// the previous session are dropped.
pub fn start(state: &mut GameState) {
    clear_items(state);
    state.events.clear();

    let initial = Difficulty::at(&state.tuning, 0.0);
    state.phase = SessionPhase::Playing;
    state.time_remaining_ms = state.tuning.session_ms;
    state.score = 0;
    state.correct = 0;
    state.incorrect = 0;
    state.combo = MIN_COMBO;
    state.fall_speed = initial.fall_speed;
    state.spawn_interval_ms = initial.spawn_interval_ms;
    state.spawn_timer.reset();
    state.last_result = None;

    state.emit(GameEvent::SessionStarted);
    log::info!("Session started (best so far: {})", state.best_score);

    // First item right away so there's no initial wait
    spawn_item(state);
}

/// Advance the session by `dt_ms` of wall-clock time
pub fn tick(state: &mut GameState, dt_ms: f32) {
    if !state.is_playing() {
        return;
    }
    let dt = crate::clamp(dt_ms, 0.0, state.tuning.max_tick_ms);

    state.time_remaining_ms -= dt;
    if state.time_remaining_ms <= 0.0 {
        state.time_remaining_ms = 0.0;
        end(state);
        return;
    }

    // Difficulty ramp
    let p = progress(state.time_remaining_ms, state.tuning.session_ms);
    let difficulty = Difficulty::at(&state.tuning, p);
    state.fall_speed = difficulty.fall_speed;
    state.spawn_interval_ms = difficulty.spawn_interval_ms;

    // Timed spawns
    if state.spawn_timer.advance(dt, state.spawn_interval_ms) {
        spawn_item(state);
    }

    // Fall; dragged items belong to the gesture
    let area = state.play_area;
    let fall_speed = state.fall_speed;
    let mut landed = Vec::new();
    for item in state.items.iter_mut().filter(|i| !i.is_dragging()) {
        item.vel = fall_speed;
        item.pos.y += item.vel * (dt / 1000.0);
        if item.pos.y >= area.floor_y(item.size.y) {
            landed.push(item.id);
        }
    }
    for id in landed {
        apply_floor_loss(state, id);
    }

    state.clamp_items_horizontally();
    state.normalize_order();
}

/// Close the session: clear the field, settle the record, publish results.
/// Only acts on a running session.
pub fn end(state: &mut GameState) {
    if !state.is_playing() {
        return;
    }
    state.phase = SessionPhase::Ended;
    clear_items(state);

    let mut best = BestScore::new(state.best_score);
    let new_best = best.submit(state.score);
    if new_best {
        state.best_score = best.value;
        state.emit(GameEvent::NewBest { score: state.score });
        log::info!("New best score: {}", state.score);
    }

    let result = SessionResult {
        score: state.score,
        correct: state.correct,
        incorrect: state.incorrect,
        best: state.best_score,
        new_best,
    };
    state.last_result = Some(result);
    state.emit(GameEvent::SessionEnded(result));
    log::info!(
        "Session ended: score {} ({} correct, {} incorrect)",
        result.score,
        result.correct,
        result.incorrect
    );
}

/// The live item closest to the floor (largest y); first by id on ties
pub fn lowest_item(state: &GameState) -> Option<u32> {
    state
        .items
        .iter()
        .fold(None, |lowest: Option<&FallingItem>, item| match lowest {
            Some(l) if l.pos.y >= item.pos.y => Some(l),
            _ => Some(item),
        })
        .map(|i| i.id)
}
