pub mod gd;

pub use gd::{clamp_learning_rate, parse_learning_rate, Engine, Phase};
