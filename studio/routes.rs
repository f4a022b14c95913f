use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::handlers;
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"application/json").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn redirect(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(303),
        vec![
            Header::from_bytes(b"Location", location.as_bytes()).unwrap(),
            Header::from_bytes(b"Content-Length", b"0").unwrap(),
        ],
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![Header::from_bytes(b"Content-Type", b"text/plain").unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// All handlers except SSE receive a `&mut Request` so that the dispatcher
/// retains ownership and can call `request.respond(response)` at the end.
/// The SSE handler takes ownership to perform long-lived streaming.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let path = {
        let url = request.url();
        match url.find('?') {
            Some(pos) => url[..pos].to_owned(),
            None => url.to_owned(),
        }
    };

    // SSE never returns through the normal respond path.
    if method == Method::Get && path == "/events" {
        handlers::frames::handle(request, state);
        return;
    }

    let response = match (method, path.as_str()) {
        (Method::Get, "/") => handlers::page::handle(state),
        (Method::Get, "/data") => handlers::scene::handle_data(state),
        (Method::Get, "/surface") => handlers::scene::handle_surface(state),
        (Method::Get, "/snapshot") => handlers::scene::handle_snapshot(state),
        (Method::Post, "/controls/start") => handlers::controls::handle_start(state),
        (Method::Post, "/controls/pause") => handlers::controls::handle_pause(state),
        (Method::Post, "/controls/reset") => handlers::controls::handle_reset(state),
        (Method::Post, "/controls/rate") => handlers::controls::handle_rate(&mut request, state),
        (Method::Post, "/dataset/new") => handlers::controls::handle_new_dataset(state),
        _ => not_found(),
    };

    let _ = request.respond(response);
}
