/// descent-lab Studio
///
/// A browser-based front end for the gradient-descent teaching tool.
/// Served by a synchronous tiny_http server; no JavaScript frameworks.
///
/// Run with:
///   cargo run --bin studio --release
/// Then open http://127.0.0.1:7878
///
/// Left panel: the noisy scatter with the live candidate line.
/// Right panel: the log-MSE loss surface with the descent marker.
/// Controls: learning rate, Start/Pause, Reset, New data.

mod handlers;
mod render;
mod routes;
mod state;
mod util;

use std::sync::{atomic::AtomicBool, mpsc, Arc, Mutex};
use std::thread;

use rand::thread_rng;
use tiny_http::Server;

use descent_lab::{run_loop, sample_surface, NullSink, RunConfig, Session, SurfaceConfig};
use descent_lab::data::synth::synthesize_default;

use state::StudioState;

fn main() {
    let addr = "127.0.0.1:7878";
    let server = Server::http(addr).expect("Failed to bind HTTP server");

    // One dataset and one surface per server start; /dataset/new replaces both.
    let dataset = Arc::new(synthesize_default(&mut thread_rng()));
    let surface_config = SurfaceConfig::default();
    let surface = Arc::new(sample_surface(&dataset, &surface_config));

    let session = Arc::new(Mutex::new(Session::new(dataset.clone())));

    // Bounded frame channel: the run loop drops frames when no SSE client
    // is draining, instead of buffering an unbounded backlog.
    let (frame_tx, frame_rx) = mpsc::sync_channel(256);
    let stop_flag = Arc::new(AtomicBool::new(false));

    // The run-loop thread lives for the whole server session, gated by the
    // engine phase; Start/Pause/Reset just flip that phase.
    {
        let session = session.clone();
        let stop_flag = stop_flag.clone();
        thread::spawn(move || {
            let config = RunConfig {
                progress_tx: Some(frame_tx),
                stop_flag: Some(stop_flag),
                ..RunConfig::new()
            };
            run_loop(&session, &mut NullSink, &config);
        });
    }

    let shared_state = Arc::new(Mutex::new(StudioState {
        session,
        dataset,
        surface,
        surface_config,
        frame_rx: Arc::new(Mutex::new(frame_rx)),
        stop_flag,
    }));

    println!("╔══════════════════════════════════════════════╗");
    println!("║          descent-lab Studio                  ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{}                 ║", addr);
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Watch gradient descent fit a line while     ║");
    println!("║  its path crosses the MSE loss surface.      ║");
    println!("╚══════════════════════════════════════════════╝");

    // Each request is dispatched on its own thread so the SSE handler
    // (which blocks for the lifetime of the stream) does not stall regular
    // page loads and form submissions.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
