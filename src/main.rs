//! Trash Sorter headless entry point
//!
//! Plays one session with a simple autoplayer and logs the result. Useful as
//! a smoke run of the engine; real hosts drive `Game` from their own frame
//! loop and input plumbing.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use trash_sorter::sim::{InputEvent, PlayArea, lowest_item};
use trash_sorter::{Game, JsonFileStore, Material, Tuning};

/// Frame period of the simulated host (60 fps)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Autoplayer mistake rate
const MISTAKE_CHANCE: f64 = 0.1;

fn main() {
    env_logger::init();
    log::info!("Trash Sorter (headless) starting...");

    let mut args = std::env::args().skip(1);
    let best_path = args
        .next()
        .unwrap_or_else(|| "trash-sorter-best.json".to_string());
    let tuning = args.next().map(Tuning::load).unwrap_or_default();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::new(
        seed,
        tuning,
        PlayArea::sized(480.0, 720.0),
        JsonFileStore::new(best_path),
    );
    let mut bot = Pcg32::seed_from_u64(seed ^ 0x5eed);

    game.start();
    let mut now = 0.0;
    while game.state().is_playing() {
        now += FRAME_MS;
        game.frame(now);
        autoplay(&mut game, &mut bot);
        for event in game.drain_events() {
            log::debug!("{:?}", event);
        }
    }

    if let Some(result) = game.state().last_result {
        log::info!(
            "Final score {} ({} correct, {} incorrect), best {}{}",
            result.score,
            result.correct,
            result.incorrect,
            result.best,
            if result.new_best { " - new record!" } else { "" }
        );
    }
}

/// Sort the lowest item once it is half way down the play area
fn autoplay(game: &mut Game<JsonFileStore>, bot: &mut Pcg32) {
    let state = game.state();
    let Some(item) = lowest_item(state).and_then(|id| state.item(id)) else {
        return;
    };
    if item.pos.y < state.play_area.height() * 0.5 {
        return;
    }

    let mut material = item.material;
    if bot.random_bool(MISTAKE_CHANCE) {
        let others: Vec<Material> = Material::ALL
            .into_iter()
            .filter(|m| *m != material)
            .collect();
        if let Some(wrong) = trash_sorter::pick(bot, &others) {
            material = *wrong;
        }
    }
    game.handle(&InputEvent::Shortcut(material.shortcut()));
}
