mod common;

use bevy::prelude::*;

use cannon_range::common::state::GameState;
use cannon_range::common::tunables::Tunables;
use cannon_range::plugins::cannon::Cannon;
use cannon_range::plugins::hud::HudState;
use cannon_range::plugins::projectiles::messages::FireRequest;
use cannon_range::plugins::session::record::{RoundClock, ScoreRecord};
use cannon_range::plugins::targets::TargetPool;

use common::{enter_gameplay, kill, live_targets, run_until, state};

fn record(app: &App) -> ScoreRecord {
    *app.world().resource::<ScoreRecord>()
}

fn cannon_enabled(app: &mut App) -> bool {
    app.world_mut()
        .query::<&Cannon>()
        .single(app.world())
        .expect("one cannon")
        .enabled
}

#[test]
fn click_runs_the_countdown_into_gameplay() {
    let mut app = common::app_headless();
    app.update();
    common::click(&mut app);
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::PreGame);
    assert_eq!(app.world().resource::<HudState>().countdown, "3");
    assert!(!cannon_enabled(&mut app));

    let frames =
        run_until(&mut app, 100, |a| state(a) == GameState::Gameplay).expect("Gameplay");
    // Three one-second steps at 100 ms per frame.
    assert!((28..=32).contains(&frames), "took {frames} frames");

    let hud = app.world().resource::<HudState>();
    assert_eq!(hud.countdown, "");
    assert_eq!(hud.score, "0000");
    assert!(hud.cursor_locked);
    assert!(cannon_enabled(&mut app));
    assert!(app.world().resource::<RoundClock>().active);
}

#[test]
fn last_target_awards_bonus_once_and_next_wave_waits_a_frame() {
    let mut app = common::app_headless();
    enter_gameplay(&mut app);
    let tunables = common::test_tunables();
    let points = tunables.target_points;
    let bonus = tunables.wave_cleared_bonus;

    let wave = live_targets(&app);
    assert_eq!(wave.len(), 5);

    kill(&mut app, &wave[..4]);
    app.update();
    assert_eq!(record(&app).total_score, 4 * points);
    assert_eq!(record(&app).targets_hit, 4);
    assert_eq!(live_targets(&app), vec![wave[4]]);

    app.update();
    assert_eq!(live_targets(&app).len(), 1, "no new wave while one target stands");

    // Last target, with a duplicate death in the same frame.
    kill(&mut app, &[wave[4], wave[4]]);
    app.update();
    assert_eq!(record(&app).total_score, 5 * points + bonus);
    assert_eq!(record(&app).targets_hit, 5);
    assert!(
        live_targets(&app).is_empty(),
        "next wave must not spawn in the clearing frame"
    );

    app.update();
    assert_eq!(live_targets(&app).len(), 5);
    assert_eq!(record(&app).total_score, 5 * points + bonus);

    app.update();
    assert_eq!(record(&app).total_score, 5 * points + bonus);
    assert_eq!(
        app.world().resource::<HudState>().score,
        format!("{:04}", 5 * points + bonus)
    );
}

#[test]
fn respawned_wave_keeps_its_spacing() {
    let mut app = common::app_headless();
    enter_gameplay(&mut app);
    let spacing = common::test_tunables().min_target_spacing;

    for _ in 0..3 {
        let wave = live_targets(&app);
        kill(&mut app, &wave);
        app.update();
        app.update();

        let live = live_targets(&app);
        assert_eq!(live.len(), 5);
        let positions: Vec<Vec3> = live
            .iter()
            .map(|&e| app.world().get::<Transform>(e).unwrap().translation)
            .collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a.distance(*b) >= spacing);
            }
        }
    }
}

#[test]
fn shots_and_hits_give_accuracy() {
    // Balls stay at the muzzle so none of them reaches a target.
    let mut app = common::app_with(Tunables {
        cannonball_speed: 0.0,
        ..common::test_tunables()
    });
    enter_gameplay(&mut app);

    for _ in 0..4 {
        app.world_mut().write_message(FireRequest);
    }
    app.update();
    let wave = live_targets(&app);
    kill(&mut app, &wave[..3]);
    app.update();

    let r = record(&app);
    assert_eq!(r.shots_fired, 4);
    assert_eq!(r.targets_hit, 3);
    assert_eq!(r.accuracy(), 75);
}

#[test]
fn round_ends_once_and_reveals_the_snapshot_in_order() {
    let tunables = Tunables {
        round_duration_secs: 2.0,
        reveal_step_delay_secs: 0.5,
        ..common::test_tunables()
    };
    let mut app = common::app_with(tunables);
    enter_gameplay(&mut app);

    let wave = live_targets(&app);
    kill(&mut app, &wave[..2]);
    app.update();

    run_until(&mut app, 40, |a| state(a) == GameState::GameOver).expect("GameOver");
    let snapshot = record(&app);
    assert_eq!(snapshot.total_score, 20);
    assert!(!cannon_enabled(&mut app));
    assert!(!app.world().resource::<RoundClock>().active);

    // Deaths after the round do not touch the record or the results.
    let rest = live_targets(&app);
    kill(&mut app, &rest);

    let fields = |h: &HudState| {
        [
            !h.final_score.is_empty(),
            !h.shots_fired.is_empty(),
            !h.targets_hit.is_empty(),
            !h.accuracy.is_empty(),
            h.restart_prompt,
        ]
    };
    let mut first_seen = [None; 5];
    for frame in 0..60 {
        app.update();
        assert_eq!(state(&app), GameState::GameOver, "left GameOver on frame {frame}");
        let shown = fields(app.world().resource::<HudState>());
        for (i, on) in shown.iter().enumerate() {
            if *on && first_seen[i].is_none() {
                first_seen[i] = Some(frame);
            }
        }
    }

    let order: Vec<usize> = first_seen
        .iter()
        .map(|f| f.expect("every step shown"))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "steps out of order: {order:?}");

    let hud = app.world().resource::<HudState>();
    assert_eq!(hud.final_score, "20");
    assert_eq!(hud.shots_fired, "0");
    assert_eq!(hud.targets_hit, "2");
    assert_eq!(hud.accuracy, "0%");
    assert!(hud.restart_prompt);
    assert!(!hud.cursor_locked);
    assert_eq!(record(&app), snapshot);
}

#[test]
fn hud_time_counts_down_to_zero_during_gameplay() {
    let tunables = Tunables {
        round_duration_secs: 2.0,
        ..common::test_tunables()
    };
    let mut app = common::app_with(tunables);
    enter_gameplay(&mut app);

    let hud_time = |a: &App| -> f32 {
        a.world()
            .resource::<HudState>()
            .time
            .parse()
            .expect("time is a number")
    };
    // The clock already ticked once in the frame Gameplay was entered.
    assert_eq!(app.world().resource::<HudState>().time, "1.9");

    let mut shown = vec![hud_time(&app)];
    while state(&app) == GameState::Gameplay && shown.len() < 40 {
        app.update();
        shown.push(hud_time(&app));
    }

    assert_eq!(state(&app), GameState::GameOver);
    assert!(shown.windows(2).all(|w| w[1] <= w[0]), "time went up: {shown:?}");
    assert!(shown.iter().any(|t| *t > 0.0 && *t < 2.0), "no intermediate time: {shown:?}");
    assert_eq!(app.world().resource::<HudState>().time, "0.0");
}

#[test]
fn restart_click_goes_back_through_the_countdown_with_a_clean_record() {
    let tunables = Tunables {
        round_duration_secs: 1.0,
        reveal_step_delay_secs: 0.2,
        ..common::test_tunables()
    };
    let mut app = common::app_with(tunables);
    enter_gameplay(&mut app);

    let wave = live_targets(&app);
    kill(&mut app, &wave[..1]);
    run_until(&mut app, 40, |a| a.world().resource::<HudState>().restart_prompt)
        .expect("restart prompt");
    assert_eq!(record(&app).total_score, 10);

    common::click(&mut app);
    run_until(&mut app, 5, |a| state(a) == GameState::PreGame).expect("PreGame");
    assert!(app.world().resource::<HudState>().cursor_locked);
    assert!(!app.world().resource::<HudState>().restart_prompt);

    run_until(&mut app, 100, |a| state(a) == GameState::Gameplay).expect("Gameplay again");
    assert_eq!(record(&app), ScoreRecord::default());
    assert_eq!(live_targets(&app).len(), 5);
    assert_eq!(app.world().resource::<TargetPool>().active_count(), 5);
    assert!(cannon_enabled(&mut app));
}

#[test]
fn click_before_the_prompt_does_not_restart() {
    let tunables = Tunables {
        round_duration_secs: 0.5,
        reveal_step_delay_secs: 0.5,
        ..common::test_tunables()
    };
    let mut app = common::app_with(tunables);
    enter_gameplay(&mut app);
    run_until(&mut app, 20, |a| state(a) == GameState::GameOver).expect("GameOver");

    common::click(&mut app);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(state(&app), GameState::GameOver);
}
