//! Item lifecycle: creation and removal of falling items

use glam::Vec2;

use super::state::{FallingItem, GameEvent, GameState, Gesture};
use crate::catalog::CATALOG;
use crate::{clamp, pick, rand_range};

/// Spawn one item just above the visible top edge. Returns its id.
pub fn spawn_item(state: &mut GameState) -> u32 {
    // CATALOG is a non-empty static array
    let material = pick(&mut state.rng, &CATALOG)
        .map(|c| c.material)
        .unwrap_or(CATALOG[0].material);

    let edge = state.tuning.clamped_item_size();
    let size = Vec2::splat(edge);

    // Never spawn partially outside the play area
    let max_x = state.play_area.max_x(size.x);
    let x = clamp(rand_range(&mut state.rng, 0.0, max_x), 0.0, max_x);

    let id = state.next_item_id();
    state.items.push(FallingItem {
        id,
        material,
        pos: Vec2::new(x, -size.y),
        size,
        vel: state.fall_speed,
        gesture: Gesture::Idle,
    });
    state.emit(GameEvent::ItemSpawned { id, material });
    log::debug!("Spawned item {} ({}) at x={:.1}", id, material.id(), x);
    id
}

/// Remove an item. Removing an item that is not live is a no-op (returns false).
pub fn despawn_item(state: &mut GameState, id: u32) -> bool {
    let before = state.items.len();
    state.items.retain(|i| i.id != id);
    if state.items.len() == before {
        return false;
    }
    state.emit(GameEvent::ItemDespawned { id });
    true
}

/// Remove every live item
pub fn clear_items(state: &mut GameState) {
    let ids: Vec<u32> = state.items.iter().map(|i| i.id).collect();
    for id in ids {
        despawn_item(state, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::PlayArea;
    use crate::tuning::Tuning;

    fn state(width: f32) -> GameState {
        GameState::new(2024, Tuning::default(), PlayArea::sized(width, 600.0))
    }

    #[test]
    fn test_spawn_places_item_above_top_inside_width() {
        let mut s = state(400.0);
        for _ in 0..200 {
            let id = spawn_item(&mut s);
            let item = s.item(id).unwrap();
            assert!(item.pos.x >= 0.0 && item.pos.x <= 400.0 - item.size.x);
            assert_eq!(item.pos.y, -item.size.y);
            assert_eq!(item.size, Vec2::splat(48.0));
            assert_eq!(item.vel, s.fall_speed);
            assert_eq!(item.gesture, Gesture::Idle);
        }
    }

    #[test]
    fn test_spawn_in_area_narrower_than_item_clamps_to_zero() {
        let mut s = state(20.0);
        let id = spawn_item(&mut s);
        assert_eq!(s.item(id).unwrap().pos.x, 0.0);
    }

    #[test]
    fn test_spawn_uses_every_material_eventually() {
        let mut s = state(400.0);
        for _ in 0..200 {
            spawn_item(&mut s);
        }
        for category in CATALOG.iter() {
            assert!(s.items.iter().any(|i| i.material == category.material));
        }
    }

    #[test]
    fn test_despawn_is_idempotent() {
        let mut s = state(400.0);
        let id = spawn_item(&mut s);
        s.drain_events();
        assert!(despawn_item(&mut s, id));
        assert!(!despawn_item(&mut s, id));
        assert!(s.items.is_empty());
        assert_eq!(s.drain_events(), vec![GameEvent::ItemDespawned { id }]);
    }

    #[test]
    fn test_clear_items() {
        let mut s = state(400.0);
        spawn_item(&mut s);
        spawn_item(&mut s);
        clear_items(&mut s);
        assert!(s.items.is_empty());
    }
}
