//! Integration tests for the intro gate, scroll watcher and reveal timing.

use std::time::Duration;

use proptest::prelude::*;
use surreal_core::{
    DismissTrigger, IntroGate, IntroGateConfig, IntroGateState, RevealTiming, RevealTransition,
};

fn gate() -> IntroGate {
    IntroGate::new(IntroGateConfig::default())
}

#[test]
fn swipe_of_100_reveals() {
    let mut g = gate();
    g.on_gesture_start(500.0);
    g.on_gesture_end(400.0);
    assert_eq!(g.state(), IntroGateState::Revealed);
}

#[test]
fn swipe_of_40_keeps_showing() {
    let mut g = gate();
    g.on_gesture_start(500.0);
    g.on_gesture_end(460.0);
    assert_eq!(g.state(), IntroGateState::Showing);
}

#[test]
fn orphan_end_is_noop() {
    let mut g = gate();
    g.on_gesture_end(300.0);
    assert_eq!(g.state(), IntroGateState::Showing);
}

#[test]
fn latest_start_wins() {
    let mut g = gate();
    g.on_gesture_start(500.0);
    g.on_gesture_start(480.0);
    g.on_gesture_end(400.0);
    assert_eq!(g.state(), IntroGateState::Revealed);
    assert_eq!(g.trigger(), Some(DismissTrigger::Swipe));
}

#[test]
fn reveal_follows_gate() {
    let mut g = gate();
    g.dismiss();
    let mut t = RevealTransition::new(RevealTiming::default());
    t.tick(RevealTiming::default().total());
    assert!(g.state().is_revealed());
    assert!(t.is_complete());
    assert_eq!(t.intro_opacity(), 0.0);
    assert_eq!(t.content_opacity(), 1.0);
}

// ── Properties ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Click,
    Start(f32),
    End(f32),
    Cancel,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Click),
        (-1000.0f32..2000.0).prop_map(Op::Start),
        (-1000.0f32..2000.0).prop_map(Op::End),
        Just(Op::Cancel),
    ]
}

fn apply(g: &mut IntroGate, op: &Op) {
    match *op {
        Op::Click => {
            g.dismiss();
        }
        Op::Start(y) => g.on_gesture_start(y),
        Op::End(y) => {
            g.on_gesture_end(y);
        }
        Op::Cancel => g.on_gesture_cancel(),
    }
}

proptest! {
    #[test]
    fn revealed_is_terminal(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut g = gate();
        let mut seen_revealed = false;
        for op in &ops {
            apply(&mut g, op);
            if seen_revealed {
                prop_assert_eq!(g.state(), IntroGateState::Revealed);
            }
            seen_revealed |= g.state().is_revealed();
        }
    }

    #[test]
    fn downward_or_short_swipes_never_reveal(
        start in 0.0f32..2000.0,
        travel in -2000.0f32..=69.0,
    ) {
        let mut g = gate();
        g.on_gesture_start(start);
        g.on_gesture_end(start - travel);
        prop_assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn long_upward_swipes_reveal(start in 0.0f32..2000.0, travel in 71.0f32..2000.0) {
        let mut g = gate();
        g.on_gesture_start(start);
        g.on_gesture_end(start - travel);
        prop_assert_eq!(g.state(), IntroGateState::Revealed);
    }

    #[test]
    fn end_always_clears_tracker(start in any::<f32>(), end in any::<f32>()) {
        let mut g = gate();
        g.on_gesture_start(start);
        g.on_gesture_end(end);
        prop_assert_eq!(g.swipe_tracker().pending_start(), None);
    }

    #[test]
    fn reveal_values_stay_normalized(steps in prop::collection::vec(0u64..400, 0..40)) {
        let mut t = RevealTransition::new(RevealTiming::default());
        for ms in steps {
            t.tick(Duration::from_millis(ms));
            prop_assert!((0.0..=1.0).contains(&t.intro_opacity()));
            prop_assert!((0.0..=1.0).contains(&t.content_opacity()));
            prop_assert!((1.0..=1.1 + 1e-5).contains(&t.intro_scale()));
        }
    }
}
