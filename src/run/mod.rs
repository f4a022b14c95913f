pub mod frame_stats;
pub mod run_config;
pub mod session;
pub mod loop_fn;

pub use frame_stats::FrameStats;
pub use run_config::RunConfig;
pub use session::Session;
pub use loop_fn::run_loop;
