pub mod mse;

pub use mse::{grad_b, grad_w, mse};
