//! Property tests for the index state machine and marker synchronization.

use std::time::Duration;

use carousel::markup::{Document, SharedDocument};
use carousel::{Collection, ImageProvider, Slider, SliderConfig};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Next(bool),
    Prev(bool),
    Jump(usize),
    Autoplay,
    Stop,
    Tick(u64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Next),
        any::<bool>().prop_map(Op::Prev),
        (0usize..16).prop_map(Op::Jump),
        Just(Op::Autoplay),
        Just(Op::Stop),
        (0u64..7000).prop_map(Op::Tick),
    ]
}

fn build(n: usize) -> (Slider<SharedDocument, SharedDocument>, SharedDocument) {
    let sources: Vec<String> = (0..n).map(|i| format!("{i}.png")).collect();
    let doc = SharedDocument::new(Document::carousel(SliderConfig::default(), &sources));
    (Slider::new(SliderConfig::default(), n, doc.clone(), doc.clone()), doc)
}

fn apply(slider: &mut Slider<SharedDocument, SharedDocument>, op: Op) {
    match op {
        Op::Next(stop) => slider.next(stop),
        Op::Prev(stop) => slider.prev(stop),
        Op::Jump(index) => {
            let _ = slider.jump(index);
        }
        Op::Autoplay => slider.autoplay(),
        Op::Stop => slider.stop_autoplay(),
        Op::Tick(ms) => {
            slider.tick(Duration::from_millis(ms));
        }
    }
}

proptest! {
    /// The index never leaves [0, N) and both markers follow it after every operation.
    #[test]
    fn markers_follow_the_index(n in 1usize..10, ops in prop::collection::vec(arb_op(), 0..60)) {
        let (mut slider, doc) = build(n);
        for op in ops {
            apply(&mut slider, op);
            let index = slider.current_index().unwrap();
            prop_assert!(index < n);
            let doc = doc.borrow();
            prop_assert_eq!(doc.active_indices(Collection::Slides), vec![index]);
            prop_assert_eq!(doc.active_indices(Collection::Bar), vec![index]);
            prop_assert!(doc.has_resolved_source(index));
        }
    }

    /// next then prev, and prev then next, are inverse.
    #[test]
    fn next_prev_are_inverse(n in 2usize..12, start in 0usize..12) {
        let start = start % n;
        let (mut slider, _doc) = build(n);
        slider.jump(start).unwrap();
        slider.next(false);
        slider.prev(false);
        prop_assert_eq!(slider.current_index(), Some(start));
        slider.prev(false);
        slider.next(false);
        prop_assert_eq!(slider.current_index(), Some(start));
    }

    /// N forward steps close the cycle.
    #[test]
    fn full_cycle_returns_to_start(n in 1usize..12, start in 0usize..12) {
        let start = start % n;
        let (mut slider, _doc) = build(n);
        slider.jump(start).unwrap();
        for _ in 0..n {
            slider.next(false);
        }
        prop_assert_eq!(slider.current_index(), Some(start));
    }

    /// Every slide is fetched at most once whatever the navigation.
    #[test]
    fn each_image_is_fetched_once(n in 1usize..8, ops in prop::collection::vec(arb_op(), 0..80)) {
        let (mut slider, doc) = build(n);
        for op in ops {
            apply(&mut slider, op);
        }
        let doc = doc.borrow();
        let mut fetched = doc.fetches().to_vec();
        let total = fetched.len();
        fetched.sort();
        fetched.dedup();
        prop_assert_eq!(fetched.len(), total);
        prop_assert!(total <= n);
    }

    /// Autoplay steps forward once per completed interval.
    #[test]
    fn autoplay_steps_once_per_interval(n in 1usize..10, intervals in 0u64..25) {
        let (mut slider, _doc) = build(n);
        slider.autoplay();
        let steps = slider.tick(Duration::from_millis(intervals * 2000 + 1999));
        prop_assert_eq!(steps as u64, intervals);
        prop_assert_eq!(slider.current_index(), Some(intervals as usize % n));
        prop_assert!(slider.is_autoplay_running());
    }
}
