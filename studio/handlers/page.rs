use std::io::Cursor;
use tiny_http::Response;

use descent_lab::Phase;

use crate::render::render_page;
use crate::state::SharedState;

/// `GET /` — the single studio page.
pub fn handle(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let (lr, running, step) = {
        let st = state.lock().unwrap();
        let session = st.session.lock().unwrap();
        (
            session.learning_rate(),
            session.phase() == Phase::Running,
            session.steps_taken(),
        )
    };

    crate::routes::html_response(render_page(lr, running, step))
}
