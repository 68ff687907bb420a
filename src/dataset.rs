use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::error::BenchError;

pub const DEFAULT_SIZE: usize = 20_000;
pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 100_000;

/// Seeded when `seed` is given, otherwise from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate `size` integers drawn uniformly from `min..=max`.
pub fn generate_data<R: Rng>(
    size: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>, BenchError> {
    if min > max {
        return Err(BenchError::InvalidRange { min, max });
    }
    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}
