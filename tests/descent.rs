use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use descent_lab::{
    clamp_learning_rate, grad_b, grad_w, mse, parse_learning_rate, run_loop, synthesize,
    Dataset, DatasetError, Engine, GroundTruth, LineSegment, NullSink, Observation, Phase,
    ProjectionSink, RunConfig, Session, SurfacePoint,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Three points exactly on y = -0.8x + 10.
fn noiseless_line() -> Dataset {
    Dataset::new(vec![
        Observation { x: 0.0, y: 10.0 },
        Observation { x: 5.0, y: 6.0 },
        Observation { x: 10.0, y: 2.0 },
    ])
    .unwrap()
}

fn noisy_dataset(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    synthesize(120, &GroundTruth::default(), &mut rng).unwrap()
}

/// Captures every projection for inspection.
#[derive(Default)]
struct RecordingSink {
    lines: Vec<LineSegment>,
    points: Vec<SurfacePoint>,
}

impl ProjectionSink for RecordingSink {
    fn update_line(&mut self, segment: LineSegment) {
        self.lines.push(segment);
    }
    fn update_point(&mut self, point: SurfacePoint) {
        self.points.push(point);
    }
}

// ---------------------------------------------------------------------------
// Dataset construction and synthesis
// ---------------------------------------------------------------------------

#[test]
fn empty_dataset_is_rejected() {
    assert_eq!(Dataset::new(vec![]).unwrap_err(), DatasetError::Empty);
}

#[test]
fn zero_sample_count_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(synthesize(0, &GroundTruth::default(), &mut rng).is_err());
}

#[test]
fn synthesis_spaces_x_evenly_and_clamps_y() {
    let dataset = noisy_dataset(42);
    assert_eq!(dataset.len(), 120);
    assert_eq!(dataset.x_min(), 0.0);
    assert_eq!(dataset.x_max(), 10.0);

    let obs = dataset.observations();
    let spacing = 10.0 / 119.0;
    for (i, o) in obs.iter().enumerate() {
        assert!((o.x - spacing * i as f64).abs() < 1e-12);
        assert!((0.0..=10.0).contains(&o.y), "y clamped to display range");
    }
}

#[test]
fn single_point_sits_at_x_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    let dataset = synthesize(1, &GroundTruth::default(), &mut rng).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.observations()[0].x, 0.0);
}

#[test]
fn synthesis_is_deterministic_per_seed() {
    let a = noisy_dataset(11);
    let b = noisy_dataset(11);
    assert_eq!(a.observations(), b.observations());
}

// ---------------------------------------------------------------------------
// Loss function
// ---------------------------------------------------------------------------

#[test]
fn mse_is_non_negative_and_zero_only_on_the_line() {
    let data = noiseless_line();
    assert!(mse(-0.8, 10.0, &data).abs() < 1e-12);
    assert!(mse(-0.8, 10.1, &data) > 0.0);
    assert!(mse(0.0, 0.0, &data) > 0.0);

    let noisy = noisy_dataset(5);
    for &(w, b) in &[(0.0, 0.0), (-0.8, 9.0), (2.5, -4.0)] {
        assert!(mse(w, b, &noisy) >= 0.0);
    }
}

#[test]
fn gradients_match_central_differences() {
    let data = noisy_dataset(9);
    let h = 1e-5;

    for &(w, b) in &[(0.0, 0.0), (0.5, 1.2), (-1.3, 7.0)] {
        let num_w = (mse(w + h, b, &data) - mse(w - h, b, &data)) / (2.0 * h);
        let num_b = (mse(w, b + h, &data) - mse(w, b - h, &data)) / (2.0 * h);
        assert!(
            (num_w - grad_w(w, b, &data)).abs() < 1e-5,
            "grad_w mismatch at ({w}, {b})"
        );
        assert!(
            (num_b - grad_b(w, b, &data)).abs() < 1e-5,
            "grad_b mismatch at ({w}, {b})"
        );
    }
}

// ---------------------------------------------------------------------------
// Engine state machine
// ---------------------------------------------------------------------------

#[test]
fn engine_starts_idle_at_origin() {
    let engine = Engine::new();
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!((engine.w(), engine.b()), (0.0, 0.0));
}

#[test]
fn phase_transitions() {
    let mut engine = Engine::new();

    engine.pause(); // nothing running; no-op
    assert_eq!(engine.phase(), Phase::Idle);

    engine.start();
    assert_eq!(engine.phase(), Phase::Running);

    engine.pause();
    assert_eq!(engine.phase(), Phase::Paused);

    engine.start(); // resume
    assert_eq!(engine.phase(), Phase::Running);

    engine.reset();
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn reset_restores_origin_regardless_of_history() {
    let data = noiseless_line();
    let mut engine = Engine::new();
    engine.start();
    for _ in 0..137 {
        engine.step(0.01, &data);
    }
    assert_ne!((engine.w(), engine.b()), (0.0, 0.0));

    engine.reset();
    assert_eq!((engine.w(), engine.b()), (0.0, 0.0));
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn loss_is_monotone_non_increasing_on_noiseless_data() {
    // Zero noise and a small rate: every step must improve (or hold) the fit.
    let truth = GroundTruth {
        slope: -0.8,
        intercept: 9.0,
        noise_std_dev: 0.0,
    };
    let mut rng = StdRng::seed_from_u64(1);
    let data = synthesize(120, &truth, &mut rng).unwrap();

    let mut engine = Engine::new();
    engine.start();
    let mut previous = mse(engine.w(), engine.b(), &data);
    for _ in 0..500 {
        engine.step(0.01, &data);
        let current = mse(engine.w(), engine.b(), &data);
        assert!(current <= previous + 1e-12);
        previous = current;
    }
}

#[test]
fn descent_recovers_the_noiseless_line() {
    // The top curvature eigenvalue for this dataset is ~84.5, so the rate
    // must stay below ~0.024 for the iteration to contract at all.
    let data = noiseless_line();
    let mut engine = Engine::new();
    engine.start();
    for _ in 0..1000 {
        engine.step(0.02, &data);
    }
    assert!((engine.w() - (-0.8)).abs() < 0.05, "w = {}", engine.w());
    assert!((engine.b() - 10.0).abs() < 0.05, "b = {}", engine.b());
}

// ---------------------------------------------------------------------------
// Learning-rate handling
// ---------------------------------------------------------------------------

#[test]
fn learning_rate_clamps_to_bounds() {
    assert_eq!(clamp_learning_rate(0.5), 0.5);
    assert_eq!(clamp_learning_rate(0.0), 1e-4);
    assert_eq!(clamp_learning_rate(-3.0), 1e-4);
    assert_eq!(clamp_learning_rate(7.0), 1.0);
    assert_eq!(clamp_learning_rate(f64::NAN), 0.01);
}

#[test]
fn learning_rate_parses_with_fallback() {
    assert_eq!(parse_learning_rate("0.05"), 0.05);
    assert_eq!(parse_learning_rate("  0.2 "), 0.2);
    assert_eq!(parse_learning_rate("50"), 1.0);
    assert_eq!(parse_learning_rate("0"), 1e-4);
    assert_eq!(parse_learning_rate("not a number"), 0.01);
    assert_eq!(parse_learning_rate(""), 0.01);
}

#[test]
fn wild_rate_still_steps_safely() {
    let data = noiseless_line();
    let mut engine = Engine::new();
    engine.start();
    engine.step(1e9, &data); // clamped to 1.0
    assert!(engine.w().is_finite());
    assert!(engine.b().is_finite());
}

// ---------------------------------------------------------------------------
// View synchronizer
// ---------------------------------------------------------------------------

#[test]
fn projections_evaluate_the_line_at_the_x_extremes() {
    let data = noisy_dataset(21);
    let view = descent_lab::ViewSync::new(&data);
    let mut sink = RecordingSink::default();

    view.publish(-0.8, 9.0, &mut sink);

    assert_eq!(sink.lines.len(), 1);
    assert_eq!(sink.points.len(), 1);

    let line = sink.lines[0];
    assert_eq!(line.x0, 0.0);
    assert_eq!(line.x1, 10.0);
    assert!((line.y0 - 9.0).abs() < 1e-12);
    assert!((line.y1 - (-0.8 * 10.0 + 9.0)).abs() < 1e-12);

    assert_eq!(sink.points[0], SurfacePoint { w: -0.8, b: 9.0 });
}

// ---------------------------------------------------------------------------
// Session and run loop
// ---------------------------------------------------------------------------

#[test]
fn paused_session_does_not_advance() {
    let data = Arc::new(noiseless_line());
    let session = Arc::new(Mutex::new(Session::new(data)));

    {
        let mut s = session.lock().unwrap();
        s.start();
    }
    run_loop(&session, &mut NullSink, &RunConfig::headless(10));

    let (w, b) = {
        let mut s = session.lock().unwrap();
        s.pause();
        let snap = s.snapshot();
        (snap.w, snap.b)
    };

    // Ten more scheduled ticks while paused: zero executed steps.
    let executed = run_loop(&session, &mut NullSink, &RunConfig::headless(10));
    assert_eq!(executed, 0);

    let snap = session.lock().unwrap().snapshot();
    assert_eq!((snap.w, snap.b), (w, b));
}

#[test]
fn run_loop_respects_max_frames_and_counts_steps() {
    let data = Arc::new(noiseless_line());
    let session = Arc::new(Mutex::new(Session::new(data)));
    session.lock().unwrap().start();

    let executed = run_loop(&session, &mut NullSink, &RunConfig::headless(25));
    assert_eq!(executed, 25);
    assert_eq!(session.lock().unwrap().steps_taken(), 25);
}

#[test]
fn stop_flag_cancels_before_the_first_frame() {
    let data = Arc::new(noiseless_line());
    let session = Arc::new(Mutex::new(Session::new(data)));
    session.lock().unwrap().start();

    let flag = Arc::new(AtomicBool::new(true));
    let config = RunConfig {
        stop_flag: Some(flag.clone()),
        ..RunConfig::headless(100)
    };
    let executed = run_loop(&session, &mut NullSink, &config);
    assert_eq!(executed, 0);
    assert_eq!(session.lock().unwrap().steps_taken(), 0);
    flag.store(false, Ordering::Relaxed);
}

#[test]
fn run_loop_reports_frames_on_the_progress_channel() {
    let data = Arc::new(noiseless_line());
    let session = Arc::new(Mutex::new(Session::new(data)));
    session.lock().unwrap().start();

    let (tx, rx) = mpsc::sync_channel(64);
    let config = RunConfig {
        progress_tx: Some(tx),
        ..RunConfig::headless(5)
    };
    run_loop(&session, &mut NullSink, &config);

    let frames: Vec<_> = rx.try_iter().collect();
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0].step, 1);
    assert_eq!(frames[4].step, 5);
    for f in &frames {
        assert_eq!(f.phase, Phase::Running);
        assert!(f.mse >= 0.0);
        assert_eq!(f.point.w, f.w);
        assert_eq!(f.point.b, f.b);
    }
}

#[test]
fn session_reset_zeroes_steps_and_republishes() {
    let data = Arc::new(noiseless_line());
    let session = Arc::new(Mutex::new(Session::new(data)));
    session.lock().unwrap().start();
    run_loop(&session, &mut NullSink, &RunConfig::headless(50));

    let mut sink = RecordingSink::default();
    let mut s = session.lock().unwrap();
    s.reset(&mut sink);

    assert_eq!(s.steps_taken(), 0);
    assert_eq!(s.phase(), Phase::Idle);
    let snap = s.snapshot();
    assert_eq!((snap.w, snap.b), (0.0, 0.0));

    // Reset republishes the origin projections immediately.
    assert_eq!(sink.points.last(), Some(&SurfacePoint { w: 0.0, b: 0.0 }));
    let line = sink.lines.last().unwrap();
    assert_eq!((line.y0, line.y1), (0.0, 0.0));
}

#[test]
fn learning_rate_is_reread_every_frame() {
    let data = Arc::new(noiseless_line());
    let session = Arc::new(Mutex::new(Session::new(data.clone())));
    {
        let mut s = session.lock().unwrap();
        s.set_learning_rate(1e-4);
        s.start();
    }
    run_loop(&session, &mut NullSink, &RunConfig::headless(1));
    let slow = session.lock().unwrap().snapshot();

    // Crank the rate mid-run; the next frame must move much farther.
    session.lock().unwrap().set_learning_rate(0.02);
    run_loop(&session, &mut NullSink, &RunConfig::headless(1));
    let fast = session.lock().unwrap().snapshot();

    assert!((fast.w - slow.w).abs() > 10.0 * slow.w.abs());
}
