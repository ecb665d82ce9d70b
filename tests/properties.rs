// Property tests for the simulation invariants.

use glam::Vec2;
use proptest::prelude::*;
use trash_sorter::sim::{
    Difficulty, GameState, InputEvent, PlayArea, Verdict, handle_input, progress, start, tick,
};
use trash_sorter::{Material, Tuning};

#[derive(Debug, Clone)]
enum Action {
    Tick(f32),
    Shortcut(usize),
    Drag { dx: f32, dy: f32 },
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0.0f32..80.0).prop_map(Action::Tick),
        1 => (0usize..5).prop_map(Action::Shortcut),
        1 => (-900.0f32..900.0, -900.0f32..900.0).prop_map(|(dx, dy)| Action::Drag { dx, dy }),
    ]
}

fn apply(state: &mut GameState, action: &Action) -> Option<Verdict> {
    match *action {
        Action::Tick(dt) => {
            tick(state, dt);
            None
        }
        Action::Shortcut(i) => {
            handle_input(state, &InputEvent::Shortcut(Material::ALL[i].shortcut()))
        }
        Action::Drag { dx, dy } => {
            let item = state.items.first()?.clone();
            let id = item.id;
            let grab = state.play_area.to_absolute(item.pos);
            handle_input(state, &InputEvent::GestureStart { id, pointer: grab });
            let pointer = grab + Vec2::new(dx, dy);
            handle_input(state, &InputEvent::GestureMove { id, pointer });
            handle_input(state, &InputEvent::GestureEnd { id, pointer })
        }
    }
}

proptest! {
    #[test]
    fn items_stay_inside_play_area(
        seed in any::<u64>(),
        width in 30.0f32..900.0,
        height in 200.0f32..900.0,
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let mut state = GameState::new(seed, Tuning::default(), PlayArea::sized(width, height));
        start(&mut state);
        for a in &actions {
            apply(&mut state, a);
            for item in state.items.iter().filter(|i| !i.is_dragging()) {
                let max_x = (width - item.size.x).max(0.0);
                prop_assert!(item.pos.x >= 0.0 && item.pos.x <= max_x);
                prop_assert!(item.pos.y <= height - item.size.y);
            }
        }
    }

    #[test]
    fn combo_and_score_arithmetic(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let mut state = GameState::new(seed, Tuning::default(), PlayArea::sized(480.0, 640.0));
        start(&mut state);
        for a in &actions {
            let (score, combo, correct, incorrect) =
                (state.score, state.combo, state.correct, state.incorrect);
            let verdict = apply(&mut state, a);
            match verdict {
                Some(Verdict::Correct { points }) => {
                    prop_assert_eq!(points, i64::from(combo));
                    prop_assert_eq!(state.score, score + points);
                    prop_assert_eq!(state.correct, correct + 1);
                    prop_assert_eq!(state.combo, (combo + 1).min(9));
                }
                Some(Verdict::Incorrect) => {
                    prop_assert_eq!(state.score, score - 1);
                    prop_assert_eq!(state.incorrect, incorrect + 1);
                    prop_assert_eq!(state.combo, 1);
                }
                None => {
                    // Only floor losses may move the counters outside a verdict
                    let losses = i64::from(state.incorrect - incorrect);
                    prop_assert_eq!(state.score, score - losses);
                    prop_assert_eq!(state.correct, correct);
                    if losses > 0 {
                        prop_assert_eq!(state.combo, 1);
                    }
                }
            }
            prop_assert!((1..=9).contains(&state.combo));
        }
    }

    #[test]
    fn difficulty_is_monotonic(a in 0.0f32..60_000.0, b in 0.0f32..60_000.0) {
        let tuning = Tuning::default();
        let (earlier, later) = if a >= b { (a, b) } else { (b, a) };
        // `earlier`/`later` are remaining times: less remaining = later in the session
        let d_early = Difficulty::at(&tuning, progress(earlier, tuning.session_ms));
        let d_late = Difficulty::at(&tuning, progress(later, tuning.session_ms));
        prop_assert!(d_late.fall_speed >= d_early.fall_speed);
        prop_assert!(d_late.spawn_interval_ms <= d_early.spawn_interval_ms);
    }

    #[test]
    fn difficulty_ramps_while_playing(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..600),
    ) {
        let mut state = GameState::new(seed, Tuning::default(), PlayArea::sized(480.0, 640.0));
        start(&mut state);
        let mut fall_speed = state.fall_speed;
        let mut spawn_interval = state.spawn_interval_ms;
        for a in &actions {
            apply(&mut state, a);
            prop_assert!(state.fall_speed >= fall_speed);
            prop_assert!(state.spawn_interval_ms <= spawn_interval);
            fall_speed = state.fall_speed;
            spawn_interval = state.spawn_interval_ms;
        }
    }
}
