//! Trash Sorter - a timed recycling sorter arcade game
//!
//! Core modules:
//! - `catalog`: Static material categories (shortcut keys, educational facts)
//! - `sim`: Deterministic simulation (spawning, falling, dragging, scoring)
//! - `view`: Presentation snapshot for hosts that render the game
//! - `game`: Host-facing facade (clock, best-score persistence)
//! - `platform`: Frame timing helpers
//! - `persistence`: Best-score storage collaborators
//! - `tuning`: Data-driven game balance

pub mod catalog;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod view;

pub use catalog::{CATALOG, Material, MaterialCategory};
pub use game::Game;
pub use highscores::BestScore;
pub use persistence::{JsonFileStore, MemoryStore, ScoreStore};
pub use tuning::Tuning;

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Session length in milliseconds
    pub const SESSION_MS: f32 = 60_000.0;
    /// Longest single step the session will simulate (stalled frames are cut short)
    pub const MAX_TICK_MS: f32 = 34.0;

    /// Fall speed at the start of a session (px/s)
    pub const BASE_FALL_SPEED: f32 = 60.0;
    /// Fall speed gained by the end of a session (px/s)
    pub const FALL_SPEED_RANGE: f32 = 120.0;
    /// Spawn interval at the start of a session (ms)
    pub const BASE_SPAWN_INTERVAL_MS: f32 = 1600.0;
    /// Spawn interval shed by the end of a session (ms)
    pub const SPAWN_INTERVAL_RANGE_MS: f32 = 800.0;

    /// Item footprint
    pub const ITEM_SIZE: f32 = 48.0;
    pub const ITEM_MIN_SIZE: f32 = 36.0;
    pub const ITEM_MAX_SIZE: f32 = 54.0;

    /// How far above the visible top edge an item may be dragged
    pub const DRAG_TOP_ALLOWANCE: f32 = 20.0;

    /// Combo multiplier bounds
    pub const MIN_COMBO: u32 = 1;
    pub const MAX_COMBO: u32 = 9;

    /// Feedback animation hints for the presentation layer
    pub const SUCCESS_ANIM_MS: f32 = 240.0;
    pub const SUCCESS_END_SCALE: f32 = 0.6;
    pub const FAIL_SHAKE_MS: f32 = 180.0;

    /// Receptacle mouth: top third of the bin, narrowed on both sides
    pub const MOUTH_HEIGHT_FRACTION: f32 = 1.0 / 3.0;
    pub const MOUTH_INSET_FRACTION: f32 = 0.12;
    /// Default bin height relative to the play area
    pub const BIN_HEIGHT_FRACTION: f32 = 0.22;
}

/// Clamp `v` into `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics: when the range is inverted
/// (an item wider than the play area) the lower bound wins.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// Uniform sample in `[min, max)`
#[inline]
pub fn rand_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Uniformly pick one element of a slice
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}
