//! Marker trait for intents.

/// Something that happened: an edit, a tick, a response from the service.
pub trait Intent: Send + 'static {}
