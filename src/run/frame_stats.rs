use serde::{Deserialize, Serialize};

use crate::engine::gd::Phase;
use crate::view::sync::{LineSegment, SurfacePoint};

/// Snapshot emitted after every executed frame of the run loop.
///
/// When a `progress_tx` channel is configured in `RunConfig`, one
/// `FrameStats` is sent per descent step. Receivers (e.g. the studio SSE
/// handler) use it to move the fit line and the surface marker in real time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameStats {
    /// 1-based step number since the last reset.
    pub step: usize,
    /// Current candidate slope.
    pub w: f64,
    /// Current candidate intercept.
    pub b: f64,
    /// MSE at (w, b) after this step.
    pub mse: f64,
    /// Engine phase when the frame was taken.
    pub phase: Phase,
    /// The fit-view line segment for this frame.
    pub line: LineSegment,
    /// The surface-view marker for this frame.
    pub point: SurfacePoint,
}
