mod algorithms;
mod error;
pub mod steps;
pub mod trace;

pub use algorithms::quick_sort::{
    partition, quick_sort, quick_sort_range, quick_sort_worklist, quick_sort_worklist_range,
    try_partition, try_quick_sort_range,
};
pub use error::RangeError;

/// The sequence sorted by the demo binary.
pub const DEMO_SEQUENCE: [i64; 9] = [8, 2, 4, 7, 1, 3, 9, 6, 5];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Driver {
    Recursive,
    Worklist,
}

pub const ALL_DRIVERS: [Driver; 2] = [Driver::Recursive, Driver::Worklist];

pub fn all_drivers() -> &'static [Driver] {
    &ALL_DRIVERS
}

pub fn driver_name(driver: Driver) -> &'static str {
    match driver {
        Driver::Recursive => "recursive",
        Driver::Worklist => "worklist",
    }
}

pub fn sort_with_driver<S>(driver: Driver, data: &mut [i64], sink: &mut S)
where
    S: trace::TraceSink + ?Sized,
{
    match driver {
        Driver::Recursive => quick_sort(data, sink),
        Driver::Worklist => quick_sort_worklist(data, sink),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bench::{default_rng, random_sequence, shuffled};

    use super::*;
    use crate::algorithms::common::is_sorted_non_decreasing;
    use crate::trace::{EventLog, NullSink};

    fn assert_sorts_like_std(data: &[i64]) {
        for &driver in all_drivers() {
            let mut actual = data.to_vec();
            sort_with_driver(driver, &mut actual, &mut NullSink);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "driver={} input_len={}",
                driver_name(driver),
                data.len(),
            );
        }
    }

    #[test]
    fn driver_names_are_unique() {
        let mut seen = HashSet::new();
        for &driver in all_drivers() {
            assert!(seen.insert(driver_name(driver)));
        }
    }

    #[test]
    fn demo_sequence_sorts() {
        let mut data = DEMO_SEQUENCE;
        quick_sort(&mut data, &mut NullSink);
        assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, -2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = default_rng();
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511] {
            let data = random_sequence(&mut rng, size);
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn sorting_preserves_the_multiset() {
        let mut rng = default_rng();
        let data = random_sequence(&mut rng, 200);
        let mut sorted = data.clone();
        quick_sort(&mut sorted, &mut NullSink);

        assert!(is_sorted_non_decreasing(&sorted));
        let mut expected = data;
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn drivers_emit_identical_traces() {
        let mut rng = default_rng();
        for _ in 0..16 {
            let base = shuffled(&mut rng, &DEMO_SEQUENCE);

            let mut recursive = base.clone();
            let mut recursive_log = EventLog::default();
            sort_with_driver(Driver::Recursive, &mut recursive, &mut recursive_log);

            let mut worklist = base.clone();
            let mut worklist_log = EventLog::default();
            sort_with_driver(Driver::Worklist, &mut worklist, &mut worklist_log);

            assert_eq!(recursive, worklist);
            assert_eq!(recursive_log.events(), worklist_log.events());
        }
    }
}
