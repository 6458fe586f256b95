mod common;

use common::{complete_stage, scripted};
use lemonade::random::{RandomRange, SeededRandom, ThreadRandom};
use lemonade::stage::{LABEL_NEXT, LABEL_RESTART};
use lemonade::{SqueezeRange, Stage, StageController};

#[test]
fn fresh_controller_starts_incomplete_in_select() {
    let controller: StageController = StageController::default();
    assert_eq!(controller.stage(), Stage::Select);
    assert!(!controller.is_complete());
    assert!(!controller.describe().button_enabled);
}

#[test]
fn enter_stage_always_clears_completion() {
    let mut controller = scripted(&[3]);
    for stage in Stage::ALL {
        controller.tap();
        complete_stage(&mut controller);
        controller.enter_stage(stage);
        assert_eq!(controller.stage(), stage);
        assert!(!controller.is_complete(), "{stage:?} should start incomplete");
    }
}

#[test]
fn enter_squeeze_draws_in_default_range() {
    let mut controller = StageController::new(ThreadRandom);
    for _ in 0..100 {
        controller.enter_stage(Stage::Squeeze);
        assert!((2..=4).contains(&controller.remaining_taps()));
    }
}

#[test]
fn enter_squeeze_rerolls_every_time() {
    let mut controller = scripted(&[2, 4, 3]);
    controller.enter_stage(Stage::Squeeze);
    assert_eq!(controller.remaining_taps(), 2);
    controller.enter_stage(Stage::Squeeze);
    assert_eq!(controller.remaining_taps(), 4);
    controller.enter_stage(Stage::Squeeze);
    assert_eq!(controller.remaining_taps(), 3);
}

#[test]
fn one_tap_then_advance_from_fresh() {
    let mut controller = scripted(&[3]);
    controller.tap();
    assert!(controller.is_complete());
    assert!(controller.advance());
    assert_eq!(controller.stage(), Stage::Squeeze);
    assert!(!controller.is_complete());
    assert_eq!(controller.remaining_taps(), 3);
}

#[test]
fn squeeze_completes_exactly_on_nth_tap() {
    for n in 2..=4 {
        let mut controller = scripted(&[n]);
        controller.enter_stage(Stage::Squeeze);
        for i in 1..n {
            controller.tap();
            assert!(!controller.is_complete(), "n={n}: complete after tap {i}");
        }
        controller.tap();
        assert!(controller.is_complete(), "n={n}: not complete after tap {n}");
    }
}

#[test]
fn extra_squeeze_taps_clamp_at_zero() {
    let mut controller = scripted(&[2]);
    controller.enter_stage(Stage::Squeeze);
    for _ in 0..5 {
        controller.tap();
    }
    assert_eq!(controller.remaining_taps(), 0);
    assert!(controller.is_complete());
}

#[test]
fn single_tap_stages_are_idempotent() {
    let mut controller = scripted(&[2]);
    controller.enter_stage(Stage::Drink);
    controller.tap();
    let after_one = *controller.state();
    controller.tap();
    controller.tap();
    assert_eq!(*controller.state(), after_one);
}

#[test]
fn full_cycle_has_period_four() {
    let mut controller = scripted(&[2, 3, 4]);
    let mut sequence = vec![controller.stage().number()];
    for _ in 0..8 {
        complete_stage(&mut controller);
        assert!(controller.advance());
        sequence.push(controller.stage().number());
    }
    assert_eq!(sequence, vec![1, 2, 3, 4, 1, 2, 3, 4, 1]);
}

#[test]
fn button_label_for_every_reachable_state() {
    let mut controller = scripted(&[2, 4]);
    for _ in 0..8 {
        let expected = if controller.stage() == Stage::Restart {
            LABEL_RESTART
        } else {
            LABEL_NEXT
        };
        assert_eq!(controller.describe().button_label, expected);
        while !controller.is_complete() {
            controller.tap();
            assert_eq!(controller.describe().button_label, expected);
        }
        controller.advance();
    }
}

#[test]
fn advance_while_incomplete_is_noop() {
    let mut controller = scripted(&[4]);
    assert!(!controller.advance());
    assert_eq!(controller.stage(), Stage::Select);

    controller.tap();
    controller.advance();
    controller.tap();
    let before = *controller.state();
    assert!(!controller.advance());
    assert_eq!(*controller.state(), before);
}

#[test]
fn button_enabled_mirrors_completion() {
    let mut controller = scripted(&[2]);
    controller.enter_stage(Stage::Squeeze);
    controller.tap();
    assert_eq!(controller.describe().button_enabled, controller.is_complete());
    controller.tap();
    assert!(controller.describe().button_enabled);
}

#[test]
fn descriptor_keys_per_stage() {
    let mut controller = scripted(&[2]);
    let expected = [
        ("lemon_tree", "lemon_select", "lemon_tree_content_description"),
        ("lemon_squeeze", "lemon_squeeze_text", "lemon_content_description"),
        ("lemon_drink", "lemon_drink_text", "glass_of_lemonade_content_description"),
        ("lemon_restart", "lemon_empty_glass", "empty_glass_content_description"),
    ];
    for (image, text, alt) in expected {
        let descriptor = controller.describe();
        assert_eq!(descriptor.image_key.as_str(), image);
        assert_eq!(descriptor.text_key.as_str(), text);
        assert_eq!(descriptor.alt_text_key.as_str(), alt);
        complete_stage(&mut controller);
        controller.advance();
    }
}

#[test]
fn seeded_sessions_are_reproducible() {
    fn squeeze_counts(seed: u64) -> Vec<u32> {
        let mut controller = StageController::new(SeededRandom::new(seed));
        let mut counts = Vec::new();
        for _ in 0..20 {
            complete_stage(&mut controller);
            controller.advance();
            if controller.stage() == Stage::Squeeze {
                counts.push(controller.remaining_taps());
            }
        }
        counts
    }
    assert_eq!(squeeze_counts(99), squeeze_counts(99));
}

#[test]
fn custom_range_is_respected() {
    let range = SqueezeRange::new(6, 8).unwrap();
    let mut controller = StageController::with_range(ThreadRandom, range);
    for _ in 0..50 {
        controller.enter_stage(Stage::Squeeze);
        assert!(range.contains(controller.remaining_taps()));
    }
}

#[test]
fn snapshot_matches_state() {
    let mut controller = scripted(&[3]);
    controller.tap();
    controller.advance();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.stage, 2);
    assert_eq!(snapshot.remaining_taps, 3);
    assert!(!snapshot.complete);
    assert_eq!(snapshot.descriptor, controller.describe());
}

#[test]
fn boxed_random_source_works() {
    let rng: Box<dyn RandomRange> = Box::new(SeededRandom::new(1));
    let mut controller = StageController::new(rng);
    controller.enter_stage(Stage::Squeeze);
    assert!((2..=4).contains(&controller.remaining_taps()));
}
