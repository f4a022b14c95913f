pub mod sync;

pub use sync::{LineSegment, NullSink, ProjectionSink, SurfacePoint, ViewSync};
