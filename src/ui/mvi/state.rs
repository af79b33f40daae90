//! Marker trait for UI state.

/// A complete, comparable snapshot of what a view needs to draw.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
