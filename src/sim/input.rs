//! Host input events
//!
//! Hosts translate their pointer/keyboard plumbing into [`InputEvent`]s and
//! hand them to [`handle_input`] as they arrive, between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::drag::{gesture_end, gesture_move, gesture_start};
use super::judge::{Verdict, classify};
use super::state::GameState;
use super::tick::lowest_item;
use crate::catalog::Material;

/// Input commands (pointers in absolute coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    GestureStart { id: u32, pointer: Vec2 },
    GestureMove { id: u32, pointer: Vec2 },
    GestureEnd { id: u32, pointer: Vec2 },
    /// Keyboard shortcut ('1'..'5')
    Shortcut(char),
    /// Click on a bin: send the lowest item there
    SubmitCategory(Material),
}

/// Apply one input event. Returns the verdict when it led to a sort attempt.
pub fn handle_input(state: &mut GameState, event: &InputEvent) -> Option<Verdict> {
    match *event {
        InputEvent::GestureStart { id, pointer } => {
            gesture_start(state, id, pointer);
            None
        }
        InputEvent::GestureMove { id, pointer } => {
            gesture_move(state, id, pointer);
            None
        }
        InputEvent::GestureEnd { id, pointer } => gesture_end(state, id, pointer),
        InputEvent::Shortcut(key) => submit_by_shortcut(state, key),
        InputEvent::SubmitCategory(material) => submit_to_category(state, material),
    }
}

/// Send the lowest item to the bin mapped to `key`; unknown keys are ignored
pub fn submit_by_shortcut(state: &mut GameState, key: char) -> Option<Verdict> {
    let material = Material::from_shortcut(key)?;
    submit_to_category(state, material)
}

/// Send the lowest item straight to the bin for `material`
pub fn submit_to_category(state: &mut GameState, material: Material) -> Option<Verdict> {
    if !state.is_playing() {
        return None;
    }
    let id = lowest_item(state)?;
    classify(state, id, material)
}
