pub mod normal;

pub use normal::standard_normal;
