//! Drag gestures on falling items
//!
//! `Idle -> Dragging` on start, `Dragging -> Dragging` on move,
//! `Dragging -> Idle` on end. While dragging, the gesture owns the item's
//! position and the fall update skips it. There is no drag timeout.

use glam::Vec2;

use super::judge::{Verdict, classify};
use super::state::{GameState, Gesture};
use super::targets::find_target_at;
use crate::clamp;

/// Pointer pressed on item `id` (absolute pointer coordinates)
pub fn gesture_start(state: &mut GameState, id: u32, pointer: Vec2) {
    if !state.is_playing() {
        return;
    }
    let local = state.play_area.to_local(pointer);
    let Some(item) = state.item_mut(id) else {
        return;
    };
    if item.is_dragging() {
        return;
    }
    item.gesture = Gesture::Dragging {
        grab_offset: local - item.pos,
    };
}

/// Pointer moved while holding item `id`
pub fn gesture_move(state: &mut GameState, id: u32, pointer: Vec2) {
    let area = state.play_area;
    let top_allowance = state.tuning.drag_top_allowance;
    let Some(item) = state.item_mut(id) else {
        return;
    };
    let Gesture::Dragging { grab_offset } = item.gesture else {
        return;
    };

    let target = area.to_local(pointer) - grab_offset;
    item.pos = Vec2::new(
        clamp(target.x, 0.0, area.max_x(item.size.x)),
        clamp(target.y, -top_allowance, area.floor_y(item.size.y)),
    );
}

/// Pointer released over `pointer`. Drops the item into the bin whose mouth
/// is under the pointer; otherwise the item resumes falling.
pub fn gesture_end(state: &mut GameState, id: u32, pointer: Vec2) -> Option<Verdict> {
    let item = state.item_mut(id)?;
    if !item.is_dragging() {
        return None;
    }
    item.gesture = Gesture::Idle;

    let claimed = find_target_at(&state.receptacles, pointer)?.material;
    classify(state, id, claimed)
}
