//! Classification judge: scoring, combo and feedback for sort attempts

use serde::{Deserialize, Serialize};

use super::spawn::despawn_item;
use super::state::{GameEvent, GameState};
use super::targets::acceptance_zone_center;
use crate::catalog::Material;
use crate::consts::MIN_COMBO;
use crate::pick;

/// Outcome of a sort attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Right bin; `points` were added to the score
    Correct { points: i64 },
    /// Wrong bin; one point was deducted
    Incorrect,
}

/// Judge an attempt to put item `id` into the bin for `claimed`.
///
/// Returns `None` (and changes nothing) when the session is not running or
/// the item is not live.
pub fn classify(state: &mut GameState, id: u32, claimed: Material) -> Option<Verdict> {
    if !state.is_playing() {
        return None;
    }
    let item = state.item(id)?.clone();

    if item.material == claimed {
        let points = i64::from(state.combo);
        state.score += points;
        state.correct += 1;
        state.combo = (state.combo + 1).min(state.tuning.combo_cap());

        if let Some(fact) = pick(&mut state.rng, item.material.facts()) {
            let text = (*fact).to_string();
            state.emit(GameEvent::FactShown {
                material: item.material,
                text,
            });
        }

        // Aim so the item's center lands on the mouth center
        let to = state
            .receptacle_for(claimed)
            .map(|r| acceptance_zone_center(r, &state.play_area) - item.size * 0.5)
            .unwrap_or(item.pos);
        state.emit(GameEvent::SortSucceeded {
            id,
            material: item.material,
            points,
            from: item.pos,
            to,
            end_scale: state.tuning.success_end_scale,
            duration_ms: state.tuning.success_anim_ms,
        });
        despawn_item(state, id);

        log::debug!(
            "Item {} sorted into {} (+{}, combo x{})",
            id,
            claimed.id(),
            points,
            state.combo
        );
        Some(Verdict::Correct { points })
    } else {
        apply_penalty(state);
        state.emit(GameEvent::SortFailed {
            id,
            claimed,
            shake_ms: state.tuning.fail_shake_ms,
        });
        log::debug!(
            "Item {} ({}) dropped into {}: wrong bin",
            id,
            item.material.id(),
            claimed.id()
        );
        Some(Verdict::Incorrect)
    }
}

/// Item `id` reached the floor unsorted: penalize and remove it
pub fn apply_floor_loss(state: &mut GameState, id: u32) {
    let Some(material) = state.item(id).map(|i| i.material) else {
        return;
    };
    apply_penalty(state);
    state.emit(GameEvent::FloorLoss { id, material });
    despawn_item(state, id);
    log::debug!("Item {} ({}) hit the floor", id, material.id());
}

/// Penalty shared by wrong bins and floor losses; combo never scales it
fn apply_penalty(state: &mut GameState) {
    state.score -= 1;
    state.incorrect += 1;
    state.combo = MIN_COMBO;
}
