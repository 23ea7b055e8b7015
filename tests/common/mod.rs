//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - frame time is pinned with `TimeUpdateStrategy::ManualDuration`.
//! - we then call `cannon_range::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use cannon_range::common::state::GameState;
use cannon_range::common::tunables::Tunables;
use cannon_range::plugins::input::PointerClick;
use cannon_range::plugins::targets::messages::Died;
use cannon_range::plugins::targets::TargetPool;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn test_tunables() -> Tunables {
    Tunables {
        rng_seed: Some(11),
        ..Tunables::default()
    }
}

pub fn app_headless() -> App {
    app_with(test_tunables())
}

pub fn app_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner and mesh storage exist for physics.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.init_asset::<Mesh>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(tunables);

    cannon_range::game::configure_headless(&mut app);
    // `App::run` normally does this; plugins such as avian's finish setup here.
    app.finish();
    app.cleanup();
    app
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn click(app: &mut App) {
    app.world_mut().write_message(PointerClick);
}

/// Update until `pred` holds. Returns the number of frames it took.
pub fn run_until(
    app: &mut App,
    max_frames: usize,
    mut pred: impl FnMut(&App) -> bool,
) -> Option<usize> {
    for frame in 1..=max_frames {
        app.update();
        if pred(app) {
            return Some(frame);
        }
    }
    None
}

/// Title → click → countdown → Gameplay, with the first wave up.
pub fn enter_gameplay(app: &mut App) {
    app.update();
    click(app);
    run_until(app, 100, |a| state(a) == GameState::Gameplay).expect("reached Gameplay");
    // The first wave is served in the frame Gameplay is entered.
    assert_eq!(
        live_targets(app).len(),
        app.world().resource::<Tunables>().target_pool_size
    );
}

pub fn live_targets(app: &App) -> Vec<Entity> {
    let pool = app.world().resource::<TargetPool>();
    pool.active_slots().filter_map(|id| pool.entity(id)).collect()
}

pub fn kill(app: &mut App, targets: &[Entity]) {
    for &entity in targets {
        app.world_mut().write_message(Died { entity });
    }
}
