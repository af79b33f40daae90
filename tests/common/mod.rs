//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use parking_lot::Mutex;
use sentiscope::config::ServiceConfig;
use sentiscope::session::{RequestDispatcher, RequestId};
use sentiscope::trigger::TriggerMode;
use sentiscope::ui::app::App;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn service_config(base_url: &str, endpoint_path: &str) -> ServiceConfig {
    ServiceConfig {
        api_base_url: base_url.to_string(),
        endpoint_path: endpoint_path.to_string(),
        timeout_ms: 2_000,
        connect_timeout_ms: 1_000,
    }
}

// -- App helpers --------------------------------------------------------------

pub type Dispatched = Arc<Mutex<Vec<(RequestId, String)>>>;

/// Dispatcher that records requests instead of sending them.
pub struct RecordingDispatcher(Dispatched);

impl RequestDispatcher for RecordingDispatcher {
    fn dispatch(&self, request_id: RequestId, text: String) {
        self.0.lock().push((request_id, text));
    }
}

/// Build an `App` whose requests land in the returned buffer.
pub fn make_app(mode: TriggerMode) -> (App, Dispatched) {
    let dispatched: Dispatched = Arc::new(Mutex::new(Vec::new()));
    let app = App::new(
        mode,
        "http://localhost:8000/predict",
        Box::new(RecordingDispatcher(Arc::clone(&dispatched))),
    );
    (app, dispatched)
}

pub fn debounced(ms: u64) -> TriggerMode {
    TriggerMode::Debounced {
        window: Duration::from_millis(ms),
    }
}

/// Type `text` one char at a time at instant `now`.
pub fn type_text(app: &mut App, text: &str, now: std::time::Instant) {
    for ch in text.chars() {
        app.insert_char(ch, now);
    }
}
