use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use descent_lab::{
    mse, run_loop, synthesize, GroundTruth, NullSink, RunConfig, Session,
};

fn main() {
    let truth = GroundTruth {
        slope: -0.8,
        intercept: 9.0,
        noise_std_dev: 0.4,
    };
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = Arc::new(synthesize(120, &truth, &mut rng).expect("sample count is non-zero"));

    let session = Arc::new(Mutex::new(Session::new(dataset.clone())));
    {
        let mut s = session.lock().unwrap();
        s.set_learning_rate(0.02);
        s.start();
    }

    println!("fitting y = w*x + b to 120 noisy points (truth: w={}, b={})", truth.slope, truth.intercept);

    // Run in chunks so we can print the trajectory as it descends.
    for chunk in 1..=10 {
        run_loop(&session, &mut NullSink, &RunConfig::headless(100));
        let s = session.lock().unwrap();
        let snap = s.snapshot();
        println!(
            "step {:>4}: w = {:>7.4}  b = {:>7.4}  mse = {:.5}",
            chunk * 100,
            snap.w,
            snap.b,
            snap.mse
        );
    }

    let snap = session.lock().unwrap().snapshot();
    println!();
    println!(
        "final fit after 1000 steps: y = {:.3}*x + {:.3}  (mse {:.5})",
        snap.w,
        snap.b,
        mse(snap.w, snap.b, &dataset)
    );
}
