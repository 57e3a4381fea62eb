//! Property tests for the gesture classifier over random press/release timelines.

use ledswitch::gesture::is_click;
use ledswitch::{Edge, Gesture, Millis, MultiTap, Timing};
use proptest::prelude::*;

/// One poll: time since the previous poll, and whether the button level flips during it.
#[derive(Debug, Clone, Copy)]
struct Step {
    delay: Millis,
    flip: bool,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        // Dense polling, as from a tight loop.
        (0u32..=20, any::<bool>()).prop_map(|(delay, flip)| Step { delay, flip }),
        // Occasional long gaps, crossing the tap and long press thresholds.
        (20u32..=12_000, any::<bool>()).prop_map(|(delay, flip)| Step { delay, flip }),
    ]
}

fn arb_timing() -> impl Strategy<Value = Timing> {
    (1u32..=1000, 1u32..=5000, 1u32..=12_000).prop_map(|(tap, long, very_long)| {
        Timing::new(tap, long, very_long)
    })
}

/// Replays the steps starting at `start`, turning level flips into alternating edges the way a
/// switch would report them. Calls `check` after every poll with the classifier as it was before
/// and after the poll.
fn replay(
    classifier: &mut MultiTap,
    start: Millis,
    steps: &[Step],
    mut check: impl FnMut(&MultiTap, &MultiTap, Option<Edge>, Gesture),
) {
    let mut now = start;
    let mut pressed = false;
    for step in steps {
        now = now.wrapping_add(step.delay);
        let edge = if step.flip {
            pressed = !pressed;
            Some(if pressed { Edge::Fell } else { Edge::Rose })
        } else {
            None
        };
        let before = classifier.clone();
        let result = classifier.poll(edge, now);
        check(&before, classifier, edge, result);
    }
}

proptest! {
    #[test]
    fn timestamps_never_both_set(
        steps in proptest::collection::vec(arb_step(), 1..200),
        start in any::<u32>(),
        timing in arb_timing(),
    ) {
        let mut classifier = MultiTap::with_timing(timing);
        replay(&mut classifier, start, &steps, |_, classifier, _, _| {
            assert!(classifier.last_fell().is_none() || classifier.last_rose().is_none());
            if classifier.is_idle() {
                assert_eq!(classifier.last_fell(), None);
                assert_eq!(classifier.last_rose(), None);
            }
        });
    }

    #[test]
    fn click_equivalent_to_press_started(
        steps in proptest::collection::vec(arb_step(), 1..200),
        start in any::<u32>(),
    ) {
        let mut classifier = MultiTap::new();
        replay(&mut classifier, start, &steps, |before, _, edge, result| {
            assert_eq!(result == Gesture::PressStarted, before.is_idle() && is_click(edge));
        });
    }

    #[test]
    fn final_results_close_the_window(
        steps in proptest::collection::vec(arb_step(), 1..200),
        start in any::<u32>(),
        timing in arb_timing(),
    ) {
        let mut classifier = MultiTap::with_timing(timing);
        replay(&mut classifier, start, &steps, |_, classifier, _, result| {
            match result {
                Gesture::Tap1 | Gesture::Tap2 | Gesture::Tap3 | Gesture::Long => {
                    assert!(classifier.is_idle())
                }
                Gesture::PressStarted | Gesture::LongStarted | Gesture::VeryLong => {
                    assert!(!classifier.is_idle())
                }
                _ => {}
            }
        });
    }

    #[test]
    fn polls_without_edges_keep_timestamps(
        steps in proptest::collection::vec(arb_step(), 1..200),
        start in any::<u32>(),
        timing in arb_timing(),
    ) {
        let mut classifier = MultiTap::with_timing(timing);
        replay(&mut classifier, start, &steps, |before, after, edge, result| {
            if edge.is_none() && result == Gesture::InProgress {
                assert_eq!(after.last_fell(), before.last_fell());
                assert_eq!(after.last_rose(), before.last_rose());
                assert_eq!(after.is_idle(), before.is_idle());
            }
        });
    }

    #[test]
    fn idle_without_edges(
        delays in proptest::collection::vec(any::<u32>(), 1..100),
        start in any::<u32>(),
    ) {
        let mut classifier = MultiTap::new();
        let mut now = start;
        for delay in delays {
            now = now.wrapping_add(delay);
            prop_assert_eq!(classifier.poll(None, now), Gesture::NotPressed);
            prop_assert!(classifier.is_idle());
        }
    }

    #[test]
    fn one_outcome_per_gesture(
        steps in proptest::collection::vec(arb_step(), 1..200),
        start in any::<u32>(),
    ) {
        // Every completed gesture yields exactly one tap or long/very long outcome.
        let mut classifier = MultiTap::new();
        let mut started = 0u32;
        let mut outcomes = 0u32;
        replay(&mut classifier, start, &steps, |_, _, _, result| {
            match result {
                Gesture::PressStarted => started += 1,
                Gesture::Tap1 | Gesture::Tap2 | Gesture::Tap3 | Gesture::Long
                | Gesture::VeryLong => outcomes += 1,
                _ => {}
            }
        });
        let open = if classifier.is_idle() { 0 } else { 1 };
        prop_assert!(outcomes <= started);
        prop_assert!(started - outcomes <= open);
    }
}
