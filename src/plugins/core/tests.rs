use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preloaded_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables {
        round_duration_secs: 5.0,
        ..Tunables::default()
    });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().round_duration_secs, 5.0);
}

#[test]
fn default_tunables_match_the_reference_game() {
    let t = Tunables::default();
    assert_eq!(t.round_duration_secs, 60.0);
    assert_eq!(t.wave_cleared_bonus, 100);
    assert_eq!(t.target_pool_size, 5);
    assert_eq!(t.spawn_half_extents(), Vec3::new(5.0, 2.5, 2.0));
    assert_eq!(t.min_target_spacing, 1.0);
    assert_eq!(t.max_placement_attempts, 5);
    assert_eq!(t.target_points, 10);
    assert_eq!(t.reveal_step_delay_secs, 1.0);
    assert_eq!(t.countdown_secs, 3);
    assert_eq!(t.cannonball_lifetime_secs, 2.0);
}

#[test]
fn partial_ron_keeps_defaults_for_missing_fields() {
    let t = Tunables::from_ron("(round_duration_secs: 30.0, rng_seed: Some(9))").unwrap();
    assert_eq!(t.round_duration_secs, 30.0);
    assert_eq!(t.rng_seed, Some(9));
    assert_eq!(t.target_pool_size, 5);
}

#[test]
fn malformed_ron_is_an_error() {
    assert!(Tunables::from_ron("(round_duration_secs: \"soon\")").is_err());
}

#[test]
fn missing_file_yields_defaults() {
    let t = Tunables::load_or_default("definitely/not/here/tunables.ron");
    assert_eq!(t, Tunables::default());
}

#[test]
fn malformed_file_yields_defaults() {
    let path = std::env::temp_dir()
        .join(format!("cannon-range-bad-{}.ron", std::process::id()));
    std::fs::write(&path, "(wave_cleared_bonus: ").unwrap();

    let t = Tunables::load_or_default(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(t, Tunables::default());
}

#[test]
fn shipped_tunables_file_matches_defaults() {
    let text = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/tunables.ron"
    ))
    .expect("assets/tunables.ron is shipped");
    assert_eq!(Tunables::from_ron(&text).unwrap(), Tunables::default());
}

#[test]
fn negative_lifetime_falls_back_to_default() {
    let t = Tunables::from_ron("(cannonball_lifetime_secs: -1.0, cannonball_speed: 4.0)")
        .unwrap();
    assert_eq!(t.cannonball_lifetime_secs, 2.0);
    assert_eq!(t.cannonball_speed, 4.0);
}

#[test]
fn non_finite_extents_fall_back_per_axis() {
    let t = Tunables {
        spawn_half_extents: [f32::NAN, 1.0, f32::INFINITY],
        min_target_spacing: -3.0,
        round_duration_secs: f32::NAN,
        ..Tunables::default()
    }
    .sanitized();

    assert_eq!(t.spawn_half_extents, [5.0, 1.0, 2.0]);
    assert_eq!(t.min_target_spacing, 1.0);
    assert_eq!(t.round_duration_secs, 60.0);
}

#[test]
fn sanitized_keeps_valid_values() {
    let t = Tunables {
        round_duration_secs: 0.0,
        spawn_half_extents: [0.0, 0.5, 9.0],
        cannonball_speed: -2.0,
        ..Tunables::default()
    };
    assert_eq!(t.clone().sanitized(), t);
}

#[test]
fn loading_a_file_with_bad_values_sanitizes_them() {
    let path = std::env::temp_dir()
        .join(format!("cannon-range-range-{}.ron", std::process::id()));
    std::fs::write(
        &path,
        "(cannonball_lifetime_secs: -1.0, reveal_step_delay_secs: 0.5)",
    )
    .unwrap();

    let t = Tunables::load_or_default(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(t.cannonball_lifetime_secs, 2.0);
    assert_eq!(t.reveal_step_delay_secs, 0.5);
}
