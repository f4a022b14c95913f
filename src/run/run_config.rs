use std::sync::mpsc;
use std::sync::{atomic::AtomicBool, Arc};
use std::time::Duration;

use crate::run::frame_stats::FrameStats;

/// Configuration for a `run_loop` invocation.
///
/// # Fields
/// - `frame_interval` — pacing between scheduled frames; the loop sleeps
///                      this long after every iteration, stepping or not
/// - `max_frames`     — optional bound on *executed* steps; `None` runs
///                      until cancelled (descent has no convergence check)
/// - `progress_tx`    — optional bounded sender; one `FrameStats` per step.
///                      Frames are sent with `try_send`: a full channel
///                      drops the frame (animation frames are disposable),
///                      a dropped receiver ends the loop.
/// - `stop_flag`      — optional atomic flag; checked before anything else
///                      at the top of every iteration.
pub struct RunConfig {
    pub frame_interval: Duration,
    pub max_frames: Option<usize>,
    pub progress_tx: Option<mpsc::SyncSender<FrameStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl RunConfig {
    /// Display pacing: roughly 30 frames per second.
    pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(33);

    /// A minimal config with no channel and no stop flag.
    pub fn new() -> Self {
        RunConfig {
            frame_interval: Self::DEFAULT_FRAME_INTERVAL,
            max_frames: None,
            progress_tx: None,
            stop_flag: None,
        }
    }

    /// A config for headless runs: no pacing delay, bounded frame count.
    pub fn headless(max_frames: usize) -> Self {
        RunConfig {
            frame_interval: Duration::ZERO,
            max_frames: Some(max_frames),
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::new()
    }
}
