//! Data-driven game balance
//!
//! Defaults reproduce the classic 60 second session. Hosts may override any
//! subset of fields from a JSON document; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Session ===
    /// Session length (ms)
    pub session_ms: f32,
    /// Cap on a single simulated step (ms)
    pub max_tick_ms: f32,

    // === Difficulty ramp ===
    /// Fall speed at progress 0 (px/s)
    pub base_fall_speed: f32,
    /// Fall speed added at progress 1 (px/s)
    pub fall_speed_range: f32,
    /// Spawn interval at progress 0 (ms)
    pub base_spawn_interval_ms: f32,
    /// Spawn interval removed at progress 1 (ms)
    pub spawn_interval_range_ms: f32,

    // === Items ===
    pub item_size: f32,
    pub item_min_size: f32,
    pub item_max_size: f32,
    /// Drag may lift an item this far above the top edge
    pub drag_top_allowance: f32,

    // === Scoring ===
    pub max_combo: u32,

    // === Feedback hints ===
    pub success_anim_ms: f32,
    pub success_end_scale: f32,
    pub fail_shake_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            session_ms: SESSION_MS,
            max_tick_ms: MAX_TICK_MS,

            base_fall_speed: BASE_FALL_SPEED,
            fall_speed_range: FALL_SPEED_RANGE,
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            spawn_interval_range_ms: SPAWN_INTERVAL_RANGE_MS,

            item_size: ITEM_SIZE,
            item_min_size: ITEM_MIN_SIZE,
            item_max_size: ITEM_MAX_SIZE,
            drag_top_allowance: DRAG_TOP_ALLOWANCE,

            max_combo: MAX_COMBO,

            success_anim_ms: SUCCESS_ANIM_MS,
            success_end_scale: SUCCESS_END_SCALE,
            fail_shake_ms: FAIL_SHAKE_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing fields fall back to defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any problem
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Footprint edge length, clamped into the allowed range
    pub fn clamped_item_size(&self) -> f32 {
        crate::clamp(self.item_size, self.item_min_size, self.item_max_size)
    }

    /// Combo cap, never below the minimum combo
    pub fn combo_cap(&self) -> u32 {
        self.max_combo.max(MIN_COMBO)
    }
}
