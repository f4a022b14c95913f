use std::sync::atomic::Ordering;
use std::sync::{mpsc::TrySendError, Arc, Mutex};
use std::thread;

use crate::run::run_config::RunConfig;
use crate::run::session::Session;
use crate::view::sync::ProjectionSink;

/// Drives a session one frame per scheduled tick until cancelled.
///
/// Cooperative scheduling, single mutator: the loop is the only caller of
/// `Session::frame`, and each tick holds the session lock just long enough
/// for one step. Pausing or resetting from another thread therefore takes
/// effect before the next frame executes — the phase check inside `frame`
/// is the first thing a frame does.
///
/// # Termination
/// Returns the number of *executed* steps when:
/// - `config.stop_flag` is set (checked at the top of every tick), or
/// - `config.max_frames` ticks have been scheduled (a paused tick counts,
///   so a bounded loop always terminates), or
/// - the `progress_tx` receiver has been dropped.
///
/// With no bound, no flag, and no channel it runs forever, as descent has no
/// convergence check.
pub fn run_loop(
    session: &Arc<Mutex<Session>>,
    sink: &mut dyn ProjectionSink,
    config: &RunConfig,
) -> usize {
    let mut ticks = 0usize;
    let mut executed = 0usize;

    loop {
        // Cancellation is checked before anything else each tick.
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }
        if let Some(max) = config.max_frames {
            if ticks >= max {
                break;
            }
        }
        ticks += 1;

        let stats = {
            let mut session = match session.lock() {
                Ok(guard) => guard,
                Err(_) => break, // a panicked holder poisons the session
            };
            session.frame(sink)
        };

        if let Some(stats) = stats {
            executed += 1;

            if let Some(ref tx) = config.progress_tx {
                match tx.try_send(stats) {
                    Ok(()) => {}
                    // The consumer is behind; this frame is disposable.
                    Err(TrySendError::Full(_)) => {}
                    // The consumer is gone; stop driving frames.
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        }

        if !config.frame_interval.is_zero() {
            thread::sleep(config.frame_interval);
        }
    }

    executed
}
