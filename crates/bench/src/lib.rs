use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;

/// Values of generated sequences lie in `0..VALUE_BOUND`.
pub const VALUE_BOUND: i64 = 100;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(0..VALUE_BOUND)).collect()
}

/// A reshuffled copy of `data` (Fisher-Yates).
pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, data: &[i64]) -> Vec<i64> {
    let mut out = data.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_sequence_is_bounded_and_seeded() {
        let a = random_sequence(&mut default_rng(), 256);
        let b = random_sequence(&mut default_rng(), 256);

        assert_eq!(a.len(), 256);
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| (0..VALUE_BOUND).contains(&x)));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let data = [8, 2, 4, 7, 1, 3, 9, 6, 5, 5];
        let mut out = shuffled(&mut default_rng(), &data);
        out.sort_unstable();

        let mut expected = data.to_vec();
        expected.sort_unstable();
        assert_eq!(out, expected);
    }
}
