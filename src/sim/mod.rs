//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - Stable iteration order (by item ID)
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod drag;
pub mod geom;
pub mod input;
pub mod judge;
pub mod spawn;
pub mod state;
pub mod targets;
pub mod tick;

pub use difficulty::{Difficulty, SpawnScheduler, progress};
pub use drag::{gesture_end, gesture_move, gesture_start};
pub use geom::{PlayArea, Rect};
pub use input::{InputEvent, handle_input, submit_by_shortcut, submit_to_category};
pub use judge::{Verdict, apply_floor_loss, classify};
pub use spawn::{clear_items, despawn_item, spawn_item};
pub use state::{FallingItem, GameEvent, GameState, Gesture, SessionPhase, SessionResult};
pub use targets::{Receptacle, acceptance_zone_center, find_target_at, layout_row};
pub use tick::{end, lowest_item, start, tick};
