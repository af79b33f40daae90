//! Request lifecycle plumbing between the UI loop and the network.
//!
//! The UI loop owns a [`RequestSequencer`] and hands numbered requests to a
//! [`RequestDispatcher`]. The dispatcher runs the call elsewhere and reports
//! back through the UI event channel, where the sequencer decides whether
//! the outcome is still wanted.

mod sequencer;

pub use sequencer::{RequestId, RequestSequencer};

use std::sync::mpsc;

use crate::client::SentimentClient;
use crate::ui::events::AppEvent;

/// Runs a numbered classification request without blocking the caller.
pub trait RequestDispatcher: Send {
    fn dispatch(&self, request_id: RequestId, text: String);
}

/// Dispatcher that runs [`SentimentClient::classify`] on a tokio runtime.
pub struct ClientDispatcher {
    client: SentimentClient,
    runtime: tokio::runtime::Handle,
    events: mpsc::Sender<AppEvent>,
}

impl ClientDispatcher {
    pub fn new(
        client: SentimentClient,
        runtime: tokio::runtime::Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            client,
            runtime,
            events,
        }
    }
}

impl RequestDispatcher for ClientDispatcher {
    fn dispatch(&self, request_id: RequestId, text: String) {
        let client = self.client.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = client.classify(&text).await;
            if let Err(err) = &outcome {
                tracing::warn!(request = %request_id, error = %err, "Classification failed");
            }
            // UI may already be gone during shutdown.
            let _ = events.send(AppEvent::Classified {
                request_id,
                outcome,
            });
        });
    }
}
