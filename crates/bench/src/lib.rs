use std::collections::HashSet;
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
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

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

/// `len` pairwise distinct values drawn uniformly from the whole `u64` range.
pub fn distinct_uniform<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut seen = HashSet::with_capacity(len);
    let mut data = Vec::with_capacity(len);
    while data.len() < len {
        let value = rng.random::<u64>();
        if seen.insert(value) {
            data.push(value);
        }
    }
    data
}

/// A shuffled permutation of `0..len`.
pub fn shuffled_range<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..len as u64).collect();
    data.shuffle(rng);
    data
}

pub fn descending(len: usize) -> Vec<u64> {
    (0..len as u64).rev().collect()
}
