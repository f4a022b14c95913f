pub mod dataset;
pub mod synth;

pub use dataset::{Dataset, DatasetError, GroundTruth, Observation};
pub use synth::synthesize;
