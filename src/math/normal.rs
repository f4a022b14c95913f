use rand::Rng;
use std::f64::consts::PI;

/// Samples a single value from N(0, 1) using the Box-Muller transform.
///
/// Draws two independent uniform samples, rejecting exact zeros so the
/// logarithm stays finite. Consumes the `rng` and nothing else, so a seeded
/// `StdRng` makes every downstream synthesis reproducible.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1 = nonzero_uniform(rng);
    let u2 = nonzero_uniform(rng);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Uniform draw on (0, 1). `gen::<f64>()` can return exactly 0.0; redraw
/// until it doesn't.
fn nonzero_uniform<R: Rng>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.gen();
        if u > 0.0 {
            return u;
        }
    }
}
