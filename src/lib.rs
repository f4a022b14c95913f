pub mod math;
pub mod data;
pub mod loss;
pub mod engine;
pub mod surface;
pub mod view;
pub mod run;

// Convenience re-exports
pub use data::dataset::{Dataset, DatasetError, GroundTruth, Observation};
pub use data::synth::synthesize;
pub use engine::gd::{clamp_learning_rate, parse_learning_rate, Engine, Phase};
pub use loss::mse::{grad_b, grad_w, mse};
pub use surface::sampler::{sample_surface, LossSurface, SurfaceConfig};
pub use view::sync::{LineSegment, NullSink, ProjectionSink, SurfacePoint, ViewSync};
pub use run::frame_stats::FrameStats;
pub use run::run_config::RunConfig;
pub use run::loop_fn::run_loop;
pub use run::session::Session;
