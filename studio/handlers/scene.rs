use std::io::Cursor;
use tiny_http::Response;

use crate::state::SharedState;

/// `GET /data` — the observed scatter as JSON. Static per dataset; the page
/// fetches it once and never redraws the points.
pub fn handle_data(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let json = {
        let st = state.lock().unwrap();
        serde_json::to_string(st.dataset.observations())
    };

    match json {
        Ok(body) => crate::routes::json_response(body),
        Err(_) => crate::routes::not_found(),
    }
}

/// `GET /snapshot` — the current engine state as one `FrameStats`, without
/// stepping. Fetched by the page after Reset / New data so the line and
/// marker snap back even though no animation frames are flowing.
pub fn handle_snapshot(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let json = {
        let st = state.lock().unwrap();
        let snapshot = st.session.lock().unwrap().snapshot();
        serde_json::to_string(&snapshot)
    };

    match json {
        Ok(body) => crate::routes::json_response(body),
        Err(_) => crate::routes::not_found(),
    }
}

/// `GET /surface` — the sampled loss surface as JSON: both axes, the log
/// grid, and the quantile-clipped color bounds. Also static per dataset.
pub fn handle_surface(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let json = {
        let st = state.lock().unwrap();
        serde_json::to_string(st.surface.as_ref())
    };

    match json {
        Ok(body) => crate::routes::json_response(body),
        Err(_) => crate::routes::not_found(),
    }
}
