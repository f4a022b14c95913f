use crate::data::dataset::Dataset;

/// Scalar MSE of the candidate line (w, b): mean((w·x + b − y)²).
///
/// Total for all finite (w, b); `Dataset` guarantees N > 0 at construction.
pub fn mse(w: f64, b: f64, data: &Dataset) -> f64 {
    let n = data.len() as f64;
    data.iter()
        .map(|o| {
            let r = w * o.x + b - o.y;
            r * r
        })
        .sum::<f64>()
        / n
}

/// ∂MSE/∂w at (w, b): (2/N) Σ (w·x + b − y)·x.
pub fn grad_w(w: f64, b: f64, data: &Dataset) -> f64 {
    let n = data.len() as f64;
    2.0 * data.iter().map(|o| (w * o.x + b - o.y) * o.x).sum::<f64>() / n
}

/// ∂MSE/∂b at (w, b): (2/N) Σ (w·x + b − y).
pub fn grad_b(w: f64, b: f64, data: &Dataset) -> f64 {
    let n = data.len() as f64;
    2.0 * data.iter().map(|o| w * o.x + b - o.y).sum::<f64>() / n
}
