use rand::rngs::StdRng;
use rand::SeedableRng;

use descent_lab::{sample_surface, synthesize, GroundTruth, SurfaceConfig};

// Darker glyphs are lower loss; everything above the 90th-percentile clip
// renders as the brightest band, same as the studio's color scale.
const SHADES: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = synthesize(120, &GroundTruth::default(), &mut rng)
        .expect("sample count is non-zero");

    // A coarse grid reads better in a terminal than the studio's 100x100.
    let config = SurfaceConfig {
        slope_samples: 60,
        intercept_samples: 30,
        ..SurfaceConfig::default()
    };
    let surface = sample_surface(&dataset, &config);

    println!(
        "log10 MSE over w in [{}, {}], b in [{}, {}]  (clip at {:.2})",
        config.slope_min, config.slope_max, config.intercept_min, config.intercept_max,
        surface.z_max
    );
    println!();

    let span = surface.z_max - surface.z_min;
    // Print high intercepts first so the b axis points up.
    for (row, b) in surface.intercept_axis.iter().enumerate().rev() {
        let cells: String = surface.z_log[row]
            .iter()
            .map(|&z| {
                let t = ((z - surface.z_min) / span).clamp(0.0, 1.0);
                let idx = (t * (SHADES.len() - 1) as f64).round() as usize;
                SHADES[idx]
            })
            .collect();
        println!("b={:>5.2} |{}|", b, cells);
    }
    println!(
        "         w: {:.1} {} {:.1}",
        config.slope_min,
        " ".repeat(config.slope_samples.saturating_sub(10)),
        config.slope_max
    );
}
