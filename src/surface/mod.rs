pub mod sampler;

pub use sampler::{sample_surface, LossSurface, SurfaceConfig};
