use std::sync::Arc;

use crate::data::dataset::Dataset;
use crate::engine::gd::{clamp_learning_rate, Engine, Phase, DEFAULT_LEARNING_RATE};
use crate::loss::mse::mse;
use crate::run::frame_stats::FrameStats;
use crate::surface::sampler::{sample_surface, LossSurface, SurfaceConfig};
use crate::view::sync::{ProjectionSink, ViewSync};

/// One fitting session: the engine plus everything a frame needs — the
/// dataset, the view synchronizer, and the live-tunable learning rate.
///
/// The engine inside is the single mutator of the candidate model, so a
/// session behind an `Arc<Mutex<_>>` is all the sharing the run loop and a
/// control surface ever need.
pub struct Session {
    engine: Engine,
    dataset: Arc<Dataset>,
    view: ViewSync,
    learning_rate: f64,
    steps_taken: usize,
}

impl Session {
    pub fn new(dataset: Arc<Dataset>) -> Session {
        let view = ViewSync::new(&dataset);
        Session {
            engine: Engine::new(),
            dataset,
            view,
            learning_rate: DEFAULT_LEARNING_RATE,
            steps_taken: 0,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Stores a new learning rate, clamped to the safe range. The next frame
    /// picks it up — no reset required.
    pub fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = clamp_learning_rate(lr);
    }

    pub fn start(&mut self) {
        self.engine.start();
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Resets the engine to Idle at (0, 0), zeroes the step counter, and
    /// republishes both projections so the renderers snap back immediately.
    pub fn reset(&mut self, sink: &mut dyn ProjectionSink) {
        self.engine.reset();
        self.steps_taken = 0;
        self.view.publish(0.0, 0.0, sink);
    }

    /// Swaps in a freshly synthesized dataset and resets the fit.
    /// Returns the resampled loss surface for the new data.
    pub fn replace_dataset(
        &mut self,
        dataset: Arc<Dataset>,
        surface_config: &SurfaceConfig,
        sink: &mut dyn ProjectionSink,
    ) -> LossSurface {
        self.view = ViewSync::new(&dataset);
        self.dataset = dataset;
        self.reset(sink);
        sample_surface(&self.dataset, surface_config)
    }

    /// Executes one scheduled frame.
    ///
    /// The phase check comes first: a session paused or reset between frames
    /// must not advance, so anything but `Running` is a skipped frame
    /// (`None`). A running frame steps the engine once at the current
    /// learning rate, publishes both projections, and reports the frame.
    pub fn frame(&mut self, sink: &mut dyn ProjectionSink) -> Option<FrameStats> {
        if self.engine.phase() != Phase::Running {
            return None;
        }

        self.engine.step(self.learning_rate, &self.dataset);
        self.steps_taken += 1;

        let (w, b) = (self.engine.w(), self.engine.b());
        self.view.publish(w, b, sink);

        Some(self.snapshot())
    }

    /// The current state as a `FrameStats`, without stepping. Used by the
    /// studio to seed a freshly connected client.
    pub fn snapshot(&self) -> FrameStats {
        let (w, b) = (self.engine.w(), self.engine.b());
        FrameStats {
            step: self.steps_taken,
            w,
            b,
            mse: mse(w, b, &self.dataset),
            phase: self.engine.phase(),
            line: self.view.line_segment(w, b),
            point: crate::view::sync::SurfacePoint { w, b },
        }
    }
}
