use serde::{Deserialize, Serialize};
use std::fmt;

/// A single observed (x, y) pair. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
}

/// The fixed linear model used only to synthesize observations. It is not
/// retained after generation — the whole point of the demo is recovering
/// these numbers from the noisy data.
#[derive(Debug, Clone, Copy)]
pub struct GroundTruth {
    pub slope: f64,
    pub intercept: f64,
    pub noise_std_dev: f64,
}

impl Default for GroundTruth {
    fn default() -> Self {
        GroundTruth {
            slope: -0.8,
            intercept: 9.0,
            noise_std_dev: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetError {
    /// A dataset must contain at least one observation; the loss functions
    /// divide by N.
    Empty,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Empty => write!(f, "dataset must contain at least one observation"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// An ordered, non-empty sequence of observations. Validated at construction
/// so MSE and its gradients never see N = 0, and immutable afterwards — the
/// same dataset instance backs the engine's steps and the surface grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Result<Dataset, DatasetError> {
        if observations.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Dataset { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        false // non-emptiness is a construction invariant
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Smallest x in the dataset.
    pub fn x_min(&self) -> f64 {
        self.observations
            .iter()
            .map(|o| o.x)
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest x in the dataset.
    pub fn x_max(&self) -> f64 {
        self.observations
            .iter()
            .map(|o| o.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}
