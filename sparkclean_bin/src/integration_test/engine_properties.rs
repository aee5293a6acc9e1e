use proptest::prelude::*;
use service::staff::TimeWindow;
use service_impl::availability::{intervals_overlap, window_start_times};
use sparkclean_utils::time_from_minutes;

proptest! {
    #[test]
    fn window_starts_stay_on_the_grid(start in 0u16..1409, len in 1u16..420) {
        let end = (start + len).min(1439);
        prop_assume!(start < end);
        let window = TimeWindow {
            start: time_from_minutes(start).unwrap(),
            end: time_from_minutes(end).unwrap(),
        };

        let starts = window_start_times(&window, 30);
        prop_assert_eq!(starts[0], start);
        prop_assert!(starts.iter().all(|&s| s >= start && s < end));
        for pair in starts.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], 30);
        }
    }

    #[test]
    fn overlap_matches_interval_intersection(
        a_start in 0u32..1440,
        a_len in 1u32..300,
        b_start in 0u32..1440,
        b_len in 1u32..300,
    ) {
        let a_end = a_start + a_len;
        let b_end = b_start + b_len;
        let expected = a_start.max(b_start) < a_end.min(b_end);
        prop_assert_eq!(intervals_overlap(a_start, a_end, b_start, b_end), expected);
        // Symmetry.
        prop_assert_eq!(
            intervals_overlap(a_start, a_end, b_start, b_end),
            intervals_overlap(b_start, b_end, a_start, a_end)
        );
    }

    #[test]
    fn zero_length_intervals_never_overlap(a_start in 0u32..1440, b_start in 0u32..1440) {
        // Holds even when the empty interval lies strictly inside the other.
        prop_assert!(!intervals_overlap(a_start, a_start, b_start, b_start + 30));
        prop_assert!(!intervals_overlap(b_start, b_start + 30, a_start, a_start));
    }
}
