use std::io::Write;
use std::time::Duration;
use tiny_http::Request;

use crate::state::SharedState;

/// `GET /events` — Server-Sent Events stream of animation frames.
///
/// Consumes `request` (so we can call `into_writer`) and drives a long-lived
/// loop that:
/// 1. Sends one `snapshot` event immediately so a freshly connected client
///    draws the current line and marker without waiting for a step.
/// 2. Tries to receive a `FrameStats` from the run-loop channel with a
///    500 ms timeout; on success writes an `event: frame` message.
/// 3. On timeout (engine idle or paused) writes a keep-alive `: ping`.
/// 4. On channel disconnect (server shutting down) writes a `done` event
///    and closes.
///
/// Client reconnection is handled natively by `EventSource`.
pub fn handle(request: Request, state: SharedState) {
    // tiny_http's `into_writer()` gives us the raw TCP stream so we can
    // write the HTTP response and then stream SSE frames directly.
    let mut writer = request.into_writer();

    let header = "HTTP/1.1 200 OK\r\n\
                  Content-Type: text/event-stream\r\n\
                  Cache-Control: no-cache\r\n\
                  Connection: keep-alive\r\n\
                  X-Accel-Buffering: no\r\n\
                  \r\n";
    if write_all(&mut writer, header.as_bytes()).is_err() {
        return;
    }

    // Clone the receiver Arc and snapshot out of state so the lock is not
    // held for the lifetime of the stream.
    let (frame_rx, snapshot) = {
        let st = state.lock().unwrap();
        let snapshot = st.session.lock().unwrap().snapshot();
        (st.frame_rx.clone(), snapshot)
    };

    if let Ok(json) = serde_json::to_string(&snapshot) {
        let msg = format!("event: snapshot\ndata: {}\n\n", json);
        if write_all(&mut writer, msg.as_bytes()).is_err() {
            return;
        }
    }

    // Main receive loop.
    loop {
        let result = {
            let rx = frame_rx.lock().unwrap();
            rx.recv_timeout(Duration::from_millis(500))
        };

        match result {
            Ok(stats) => match serde_json::to_string(&stats) {
                Ok(json) => {
                    let msg = format!("event: frame\ndata: {}\n\n", json);
                    if write_all(&mut writer, msg.as_bytes()).is_err() {
                        return;
                    }
                }
                Err(_) => continue,
            },
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Idle or paused — keep the connection alive.
                if write_all(&mut writer, b": ping\n\n").is_err() {
                    return;
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                // The run loop dropped its sender; the server is going away.
                let _ = write_all(&mut writer, b"event: done\ndata: {}\n\n");
                return;
            }
        }
    }
}

/// Writes all bytes to the writer, returning `Err` on any I/O failure.
fn write_all<W: Write>(w: &mut W, data: &[u8]) -> std::io::Result<()> {
    w.write_all(data)?;
    w.flush()
}
