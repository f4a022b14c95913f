use std::io::{Cursor, Read};
use std::sync::Arc;
use tiny_http::{Request, Response};

use rand::thread_rng;

use descent_lab::data::synth::synthesize_default;
use descent_lab::{parse_learning_rate, NullSink};

use crate::state::SharedState;
use crate::util::form::form_value;

/// `POST /controls/start` — Idle/Paused → Running.
pub fn handle_start(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    st.session.lock().unwrap().start();
    crate::routes::redirect("/")
}

/// `POST /controls/pause` — Running → Paused.
pub fn handle_pause(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    st.session.lock().unwrap().pause();
    crate::routes::redirect("/")
}

/// `POST /controls/reset` — any phase → Idle at (0, 0).
///
/// The session republishes its projections on reset; connected clients see
/// the snap-back on their next SSE snapshot or frame.
pub fn handle_reset(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    st.session.lock().unwrap().reset(&mut NullSink);
    crate::routes::redirect("/")
}

/// `POST /controls/rate` — form-encoded `rate=<value>`.
///
/// Anything unparsable falls back to the default rate and out-of-range
/// values land on the nearest bound; a bad rate is never an error page.
pub fn handle_rate(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);

    let lr = parse_learning_rate(&form_value(&body, "rate").unwrap_or_default());

    let st = state.lock().unwrap();
    st.session.lock().unwrap().set_learning_rate(lr);
    crate::routes::redirect("/")
}

/// `POST /dataset/new` — synthesize a fresh noisy dataset, resample the
/// surface, and reset the fit.
pub fn handle_new_dataset(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let dataset = Arc::new(synthesize_default(&mut thread_rng()));

    let mut st = state.lock().unwrap();
    let surface = {
        let mut session = st.session.lock().unwrap();
        session.replace_dataset(dataset.clone(), &st.surface_config, &mut NullSink)
    };
    st.dataset = dataset;
    st.surface = Arc::new(surface);

    crate::routes::redirect("/")
}
