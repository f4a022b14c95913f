use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::loss::mse::{grad_b, grad_w};

/// Learning rates outside [MIN, MAX] are clamped, never rejected.
pub const LEARNING_RATE_MIN: f64 = 1e-4;
pub const LEARNING_RATE_MAX: f64 = 1.0;
/// Fallback when the control surface hands us something unparsable.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Lifecycle of the descent animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Initial state; parameters at the reset value (0, 0).
    Idle,
    /// Stepping once per scheduled frame.
    Running,
    /// Parameters retained, not advancing.
    Paused,
}

/// Owns the candidate model — the one piece of evolving state in the system.
///
/// The engine always holds a fully-defined (w, b) pair: both parameters
/// advance together inside a single `step`, so no observer ever sees a
/// half-updated model.
#[derive(Debug, Clone)]
pub struct Engine {
    w: f64,
    b: f64,
    phase: Phase,
}

impl Engine {
    /// Fresh engine: Idle at (0, 0).
    pub fn new() -> Engine {
        Engine {
            w: 0.0,
            b: 0.0,
            phase: Phase::Idle,
        }
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Idle/Paused → Running. A no-op while already Running.
    pub fn start(&mut self) {
        self.phase = Phase::Running;
    }

    /// Running → Paused. A no-op from Idle (there is nothing to pause).
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Any state → Idle, parameters forced back to (0, 0).
    pub fn reset(&mut self) {
        self.w = 0.0;
        self.b = 0.0;
        self.phase = Phase::Idle;
    }

    /// One full-batch gradient-descent step at the given learning rate.
    ///
    /// The rate is clamped to [1e-4, 1] first, so this never fails: a wild
    /// value from the control surface degrades to the nearest safe bound.
    /// Both gradients are evaluated at the current (w, b) before either
    /// parameter moves.
    pub fn step(&mut self, learning_rate: f64, data: &Dataset) {
        let lr = clamp_learning_rate(learning_rate);
        let gw = grad_w(self.w, self.b, data);
        let gb = grad_b(self.w, self.b, data);
        self.w -= lr * gw;
        self.b -= lr * gb;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

/// Clamps a learning rate into [1e-4, 1]; NaN falls back to the default.
pub fn clamp_learning_rate(lr: f64) -> f64 {
    if lr.is_nan() {
        return DEFAULT_LEARNING_RATE;
    }
    lr.clamp(LEARNING_RATE_MIN, LEARNING_RATE_MAX)
}

/// Parses a learning rate from free-form text input.
///
/// Unparsable input resolves to the 0.01 default; parsable but out-of-range
/// input lands on the nearest bound. Never an error either way.
pub fn parse_learning_rate(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) => clamp_learning_rate(v),
        Err(_) => DEFAULT_LEARNING_RATE,
    }
}
