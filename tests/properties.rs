use aerie_landing::behavior::count_up::value_at;
use aerie_landing::behavior::{CountUp, Rotation};
use proptest::prelude::*;

proptest! {
    #[test]
    fn advancing_len_times_returns_to_start(len in 1usize..200, start in 0usize..400) {
        let origin = Rotation::new(len).go_to(start);
        let mut r = origin;
        for _ in 0..len {
            r = r.advance();
            prop_assert!(r.index() < len);
        }
        prop_assert_eq!(r.index(), origin.index());
    }

    #[test]
    fn retreat_undoes_advance(len in 1usize..200, start in 0usize..400) {
        let r = Rotation::new(len).go_to(start);
        prop_assert_eq!(r.advance().retreat().index(), r.index());
        prop_assert_eq!(r.retreat().advance().index(), r.index());
    }

    #[test]
    fn count_up_is_monotonic_and_lands_on_target(
        target in 0u64..1_000_000,
        duration_ms in 0u32..3_000,
        t0 in 0.0f64..10_000.0,
        deltas in prop::collection::vec(0.0f64..120.0, 1..64)
    ) {
        let mut anim = CountUp::new(target, duration_ms);
        let mut now = t0;
        let mut last = 0;
        let mut frames = deltas.into_iter().cycle();

        // Zero-length deltas can repeat; the 120 ms fallback step bounds the loop.
        for i in 0..10_000 {
            let step = anim.step(now);
            prop_assert!(step.value >= last);
            prop_assert!(step.value <= target);
            last = step.value;
            if step.finished {
                break;
            }
            let delta = frames.next().unwrap_or(16.0);
            now += if i % 8 == 7 { 120.0 } else { delta };
        }

        prop_assert!(anim.is_finished());
        prop_assert_eq!(anim.value(), target);
    }

    #[test]
    fn full_progress_is_exactly_the_target(target in 0u64..u64::from(u32::MAX)) {
        prop_assert_eq!(value_at(target, 1.0), target);
        prop_assert_eq!(value_at(target, 0.0), 0);
    }
}
