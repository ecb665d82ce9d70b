//! Presentation snapshot
//!
//! Everything a host needs to draw a frame and update its HUD, decoupled
//! from any rendering surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::catalog::Material;
use crate::sim::{FallingItem, GameState, SessionPhase};

/// A live item as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: u32,
    pub material: Material,
    pub material_id: String,
    /// Top-left, play-area-local
    pub pos: Vec2,
    pub size: Vec2,
    pub dragging: bool,
    /// Semantic label for assistive technology
    pub label: String,
}

impl ItemView {
    fn from_item(item: &FallingItem) -> Self {
        Self {
            id: item.id,
            material: item.material,
            material_id: item.material.id().to_string(),
            pos: item.pos,
            size: item.size,
            dragging: item.is_dragging(),
            label: item_label(item.material),
        }
    }
}

/// Accessibility label for an item of `material`
pub fn item_label(material: Material) -> String {
    format!("{} item. Drag it to the mouth of a bin.", material.id())
}

/// Frame snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub time_remaining_ms: f32,
    /// Whole seconds for the HUD (rounded up, never negative)
    pub seconds_left: u32,
    pub score: i64,
    pub combo: u32,
    /// "x3"
    pub combo_label: String,
    pub correct: u32,
    pub incorrect: u32,
    pub best: i64,
    pub items: Vec<ItemView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            time_remaining_ms: state.time_remaining_ms,
            seconds_left: (state.time_remaining_ms.max(0.0) / 1000.0).ceil() as u32,
            score: state.score,
            combo: state.combo,
            combo_label: format!("x{}", state.combo),
            correct: state.correct,
            incorrect: state.incorrect,
            best: state.best_score,
            items: state.items.iter().map(ItemView::from_item).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
