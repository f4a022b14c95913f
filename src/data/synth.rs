use rand::Rng;

use crate::data::dataset::{Dataset, DatasetError, GroundTruth, Observation};
use crate::math::normal::standard_normal;

/// x values span this range, and y values are clamped into it so every point
/// lands inside the fixed plot window.
pub const DISPLAY_MIN: f64 = 0.0;
pub const DISPLAY_MAX: f64 = 10.0;

/// Default number of observations per dataset.
pub const DEFAULT_SAMPLE_COUNT: usize = 120;

/// Generates `n` observations from `truth` plus Gaussian noise.
///
/// x values are evenly spaced over [0, 10] inclusive; each y is
/// `slope·x + intercept + noise_std_dev·N(0,1)`, clamped to [0, 10].
/// Deterministic for a seeded `rng`. `n = 0` is rejected up front rather
/// than producing an empty dataset.
pub fn synthesize<R: Rng>(
    n: usize,
    truth: &GroundTruth,
    rng: &mut R,
) -> Result<Dataset, DatasetError> {
    if n == 0 {
        return Err(DatasetError::Empty);
    }

    let observations = (0..n)
        .map(|i| {
            // A single point sits at x = 0 (no spacing to divide by).
            let x = if n == 1 {
                DISPLAY_MIN
            } else {
                DISPLAY_MAX * i as f64 / (n - 1) as f64
            };
            let noise = truth.noise_std_dev * standard_normal(rng);
            let y = (truth.slope * x + truth.intercept + noise).clamp(DISPLAY_MIN, DISPLAY_MAX);
            Observation { x, y }
        })
        .collect();

    Dataset::new(observations)
}

/// The studio's one-call constructor: 120 points from the default ground
/// truth.
pub fn synthesize_default<R: Rng>(rng: &mut R) -> Dataset {
    synthesize(DEFAULT_SAMPLE_COUNT, &GroundTruth::default(), rng)
        .expect("default sample count is non-zero")
}
