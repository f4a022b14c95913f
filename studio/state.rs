use std::sync::{atomic::AtomicBool, mpsc, Arc, Mutex};

use descent_lab::{Dataset, FrameStats, LossSurface, Session, SurfaceConfig};

// ---------------------------------------------------------------------------
// Studio state
// ---------------------------------------------------------------------------

/// Everything the request handlers share.
///
/// The session is its own `Arc<Mutex<_>>` because the run-loop thread locks
/// it every frame; keeping it separate from the rest of the state means a
/// slow page render never stalls the animation.
pub struct StudioState {
    /// The fitting session driven by the run-loop thread.
    pub session: Arc<Mutex<Session>>,
    /// The observed scatter — immutable until the user asks for new data.
    pub dataset: Arc<Dataset>,
    /// The sampled loss surface for the current dataset.
    pub surface: Arc<LossSurface>,
    /// Grid resolution and display tuning used whenever the surface is
    /// resampled.
    pub surface_config: SurfaceConfig,
    /// Receiver side of the run loop's frame channel. Shared behind a mutex
    /// so the SSE handler can borrow it for the lifetime of a stream.
    pub frame_rx: Arc<Mutex<mpsc::Receiver<FrameStats>>>,
    /// Set to stop the run-loop thread on shutdown.
    pub stop_flag: Arc<AtomicBool>,
}

/// Shared state type — an `Arc<Mutex<StudioState>>` passed to every handler.
pub type SharedState = Arc<Mutex<StudioState>>;
