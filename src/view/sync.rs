use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;

/// The candidate line evaluated at the dataset's x extremes — everything the
/// fit-view renderer needs to redraw the line without re-laying-out the
/// scatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// The candidate (w, b) as a coordinate on the loss surface — the surface
/// renderer restyles just this marker, never the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub w: f64,
    pub b: f64,
}

/// The seam between the numerical core and whatever draws it. Both payloads
/// are immutable snapshots; a sink must not assume any call frequency beyond
/// "after every step or reset".
pub trait ProjectionSink {
    fn update_line(&mut self, segment: LineSegment);
    fn update_point(&mut self, point: SurfacePoint);
}

/// Discards every projection. Lets the engine run headlessly when no
/// renderer is attached.
pub struct NullSink;

impl ProjectionSink for NullSink {
    fn update_line(&mut self, _segment: LineSegment) {}
    fn update_point(&mut self, _point: SurfacePoint) {}
}

/// Projects engine state into the two presentation payloads. Holds only the
/// dataset's x-range; it performs no computation beyond evaluating the line
/// equation at the two ends.
#[derive(Debug, Clone, Copy)]
pub struct ViewSync {
    x_min: f64,
    x_max: f64,
}

impl ViewSync {
    pub fn new(data: &Dataset) -> ViewSync {
        ViewSync {
            x_min: data.x_min(),
            x_max: data.x_max(),
        }
    }

    /// Builds the line segment for the current (w, b).
    pub fn line_segment(&self, w: f64, b: f64) -> LineSegment {
        LineSegment {
            x0: self.x_min,
            y0: w * self.x_min + b,
            x1: self.x_max,
            y1: w * self.x_max + b,
        }
    }

    /// Emits both projections for the current (w, b) into `sink`.
    /// Call after every step and after every reset.
    pub fn publish(&self, w: f64, b: f64, sink: &mut dyn ProjectionSink) {
        sink.update_line(self.line_segment(w, b));
        sink.update_point(SurfacePoint { w, b });
    }
}
