use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::test_utils::run_system_once;

use super::*;

#[test]
fn score_is_zero_padded_to_four_digits() {
    assert_eq!(format_score(0), "0000");
    assert_eq!(format_score(42), "0042");
    assert_eq!(format_score(12345), "12345");
    assert_eq!(format_score(-7), "-0007");
}

#[test]
fn time_has_one_decimal() {
    assert_eq!(format_time(59.96), "60.0");
    assert_eq!(format_time(12.34), "12.3");
    assert_eq!(format_time(0.0), "0.0");
}

#[test]
fn entering_gameplay_locks_the_cursor() {
    let mut hud = HudState::default();
    assert!(!hud.cursor_locked);

    hud.apply(&HudCommand::SetState(GameState::Gameplay));
    assert!(hud.cursor_locked);
    assert_eq!(hud.screen, GameState::Gameplay);

    hud.apply(&HudCommand::UnlockCursor);
    assert!(!hud.cursor_locked);
}

#[test]
fn clear_results_wipes_every_line_and_the_prompt() {
    let mut hud = HudState::default();
    hud.apply(&HudCommand::ResultsStep {
        field: ResultsField::FinalScore,
        text: "120".into(),
    });
    hud.apply(&HudCommand::ResultsStep {
        field: ResultsField::Accuracy,
        text: "75%".into(),
    });
    hud.apply(&HudCommand::RestartPrompt(true));

    hud.apply(&HudCommand::ClearResults);

    assert!(hud.final_score.is_empty());
    assert!(hud.accuracy.is_empty());
    assert!(!hud.restart_prompt);
}

#[test]
fn results_step_writes_only_its_field() {
    let mut hud = HudState::default();
    hud.apply(&HudCommand::ResultsStep {
        field: ResultsField::ShotsFired,
        text: "4".into(),
    });

    assert_eq!(hud.shots_fired, "4");
    assert!(hud.final_score.is_empty());
    assert!(hud.targets_hit.is_empty());
}

#[test]
fn system_applies_commands_in_order() {
    let mut world = World::new();
    world.init_resource::<HudState>();
    world.init_resource::<Messages<HudCommand>>();

    world.write_message(HudCommand::Score(10));
    world.write_message(HudCommand::Score(110));
    world.write_message(HudCommand::CountdownDigit("2".into()));
    world.write_message(HudCommand::Time(59.94));
    run_system_once(&mut world, apply_hud_commands);

    let hud = world.resource::<HudState>();
    assert_eq!(hud.score, "0110");
    assert_eq!(hud.countdown, "2");
    assert_eq!(hud.time, "59.9");
}
