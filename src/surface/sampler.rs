use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::loss::mse::mse;

/// Axis ranges, grid resolution, and display tuning for the loss surface.
///
/// The log floor `epsilon` and the `clip_quantile` are display defaults, not
/// invariants — adjust them if a different dataset makes the color map look
/// washed out.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceConfig {
    pub slope_min: f64,
    pub slope_max: f64,
    pub slope_samples: usize,
    pub intercept_min: f64,
    pub intercept_max: f64,
    pub intercept_samples: usize,
    /// Floor applied before log10 so a perfectly-fitting cell stays finite.
    pub epsilon: f64,
    /// The color-scale upper bound sits at this quantile of the transformed
    /// grid, concentrating color resolution near the minimum. MSE surfaces
    /// are highly skewed; spreading the scale over the full range leaves the
    /// interesting basin a single flat color.
    pub clip_quantile: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            slope_min: -3.0,
            slope_max: 3.0,
            slope_samples: 100,
            intercept_min: 0.0,
            intercept_max: 10.0,
            intercept_samples: 100,
            epsilon: 1e-8,
            clip_quantile: 0.9,
        }
    }
}

/// A renderable loss surface: log10-transformed MSE over a parameter grid,
/// plus the quantile-clipped color-scale bounds and a single tracked point.
/// Immutable after construction; computed once per dataset, never per frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossSurface {
    /// Slope (w) value for each grid column.
    pub slope_axis: Vec<f64>,
    /// Intercept (b) value for each grid row.
    pub intercept_axis: Vec<f64>,
    /// log10(max(ε, mse)) indexed as `z_log[intercept_row][slope_col]`.
    pub z_log: Vec<Vec<f64>>,
    /// Color-scale lower bound: the grid minimum.
    pub z_min: f64,
    /// Color-scale upper bound: the value at the clip-quantile rank.
    pub z_max: f64,
    /// Where the tracked marker starts — the engine's reset value.
    pub tracked: (f64, f64),
}

/// Evaluates MSE over the full parameter grid and applies the log transform
/// and quantile clipping described on `SurfaceConfig`.
///
/// O(slope_samples · intercept_samples · N); run it once per dataset.
pub fn sample_surface(data: &Dataset, config: &SurfaceConfig) -> LossSurface {
    let slope_axis = linspace(config.slope_min, config.slope_max, config.slope_samples);
    let intercept_axis = linspace(
        config.intercept_min,
        config.intercept_max,
        config.intercept_samples,
    );

    let z_log: Vec<Vec<f64>> = intercept_axis
        .iter()
        .map(|&b| {
            slope_axis
                .iter()
                .map(|&w| mse(w, b, data).max(config.epsilon).log10())
                .collect()
        })
        .collect();

    let mut flat: Vec<f64> = z_log.iter().flatten().copied().collect();
    flat.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let z_min = flat[0];
    let z_max = flat[quantile_rank(flat.len(), config.clip_quantile)];

    LossSurface {
        slope_axis,
        intercept_axis,
        z_log,
        z_min,
        z_max,
        tracked: (0.0, 0.0),
    }
}

/// `count` evenly spaced values over [min, max] inclusive. A single sample
/// sits at `min`.
fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count).map(|i| min + step * i as f64).collect()
}

/// Index of the q-quantile in a sorted slice of `len` elements
/// (nearest-rank on the 0..len-1 index range).
fn quantile_rank(len: usize, q: f64) -> usize {
    ((len - 1) as f64 * q).round() as usize
}
