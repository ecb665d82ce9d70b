//! Session state and core simulation types
//!
//! Everything a session owns lives in [`GameState`]; there is no global
//! state, so independent sessions (and tests) never interfere.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, SpawnScheduler};
use super::geom::{PlayArea, Rect};
use super::targets::{Receptacle, layout_row};
use crate::catalog::Material;
use crate::consts::MIN_COMBO;
use crate::tuning::Tuning;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Not started yet (start screen)
    Idle,
    /// Clock running, items falling
    Playing,
    /// Time ran out (result screen)
    Ended,
}

/// Drag gesture state of an item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Gesture {
    #[default]
    Idle,
    /// Held by the pointer; the fall update leaves it alone
    Dragging {
        /// Pointer position minus item position at grab time
        grab_offset: Vec2,
    },
}

/// A falling item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    pub material: Material,
    /// Top-left corner, play-area-local
    pub pos: Vec2,
    /// Footprint
    pub size: Vec2,
    /// Downward speed (px/s)
    pub vel: f32,
    pub gesture: Gesture,
}

impl FallingItem {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Local bounds of the item
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.pos + self.size)
    }
}

/// Final numbers of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub score: i64,
    pub correct: u32,
    pub incorrect: u32,
    /// Best score after this session
    pub best: i64,
    /// This session set a new record
    pub new_best: bool,
}

/// Discrete notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    ItemSpawned {
        id: u32,
        material: Material,
    },
    /// Rendering resources for the item can be released
    ItemDespawned {
        id: u32,
    },
    /// Play an eased move from `from` to `to` while shrinking to `end_scale`
    SortSucceeded {
        id: u32,
        material: Material,
        points: i64,
        from: Vec2,
        to: Vec2,
        end_scale: f32,
        duration_ms: f32,
    },
    /// Play a short lateral shake on the item
    SortFailed {
        id: u32,
        claimed: Material,
        shake_ms: f32,
    },
    /// Educational fact to show briefly
    FactShown {
        material: Material,
        text: String,
    },
    /// An item hit the floor unsorted
    FloorLoss {
        id: u32,
        material: Material,
    },
    NewBest {
        score: i64,
    },
    SessionEnded(SessionResult),
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Category and fact selection
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: SessionPhase,
    /// Clock (ms)
    pub time_remaining_ms: f32,
    /// Score (may go negative)
    pub score: i64,
    pub correct: u32,
    pub incorrect: u32,
    /// Multiplier for the next correct sort
    pub combo: u32,
    /// Best score ever, loaded from the host's store
    pub best_score: i64,
    /// Current fall speed (px/s)
    pub fall_speed: f32,
    /// Current spawn interval (ms)
    pub spawn_interval_ms: f32,
    pub spawn_timer: SpawnScheduler,
    /// Live items (sorted by id)
    pub items: Vec<FallingItem>,
    pub play_area: PlayArea,
    pub receptacles: Vec<Receptacle>,
    /// Result of the last finished session
    pub last_result: Option<SessionResult>,
    /// Pending notifications (drained by the host)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next item id
    next_id: u32,
}

impl GameState {
    /// Create an idle session with the default bin layout
    pub fn new(seed: u64, tuning: Tuning, play_area: PlayArea) -> Self {
        let receptacles = layout_row(&play_area);
        Self::with_layout(seed, tuning, play_area, receptacles)
    }

    /// Create an idle session with a host-provided bin layout
    pub fn with_layout(
        seed: u64,
        tuning: Tuning,
        play_area: PlayArea,
        receptacles: Vec<Receptacle>,
    ) -> Self {
        let initial = Difficulty::at(&tuning, 0.0);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_remaining_ms: tuning.session_ms,
            tuning,
            phase: SessionPhase::Idle,
            score: 0,
            correct: 0,
            incorrect: 0,
            combo: MIN_COMBO,
            best_score: 0,
            fall_speed: initial.fall_speed,
            spawn_interval_ms: initial.spawn_interval_ms,
            spawn_timer: SpawnScheduler::default(),
            items: Vec::new(),
            play_area,
            receptacles,
            last_result: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new item ID
    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn item(&self, id: u32) -> Option<&FallingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: u32) -> Option<&mut FallingItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Replace the play area and bin layout (window resize / reflow)
    pub fn set_layout(&mut self, play_area: PlayArea, receptacles: Vec<Receptacle>) {
        self.play_area = play_area;
        self.receptacles = receptacles;
        self.clamp_items_horizontally();
    }

    /// Bin accepting `material`, if one is laid out
    pub fn receptacle_for(&self, material: Material) -> Option<&Receptacle> {
        self.receptacles.iter().find(|r| r.material == material)
    }

    /// Keep every item inside the play area horizontally
    pub fn clamp_items_horizontally(&mut self) {
        let area = self.play_area;
        for item in &mut self.items {
            item.pos.x = crate::clamp(item.pos.x, 0.0, area.max_x(item.size.x));
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure items are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.items.sort_by_key(|i| i.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_reset() {
        let state = GameState::new(42, Tuning::default(), PlayArea::sized(480.0, 640.0));
        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.combo, 1);
        assert_eq!(state.score, 0);
        assert!(state.items.is_empty());
        assert_eq!(state.receptacles.len(), 5);
        assert_eq!(state.fall_speed, 60.0);
        assert_eq!(state.spawn_interval_ms, 1600.0);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let mut state = GameState::new(1, Tuning::default(), PlayArea::sized(480.0, 640.0));
        let a = state.next_item_id();
        let b = state.next_item_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut state = GameState::new(9, Tuning::default(), PlayArea::sized(480.0, 640.0));
        state.score = -3;
        state.emit(GameEvent::SessionStarted);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, -3);
        assert_eq!(back.rng, state.rng);
        // Events are transient
        assert!(back.events.is_empty());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(3, Tuning::default(), PlayArea::sized(480.0, 640.0));
        state.emit(GameEvent::SessionStarted);
        assert_eq!(state.drain_events(), vec![GameEvent::SessionStarted]);
        assert!(state.drain_events().is_empty());
    }
}
