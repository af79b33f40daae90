pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod input_text;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sentiment;
pub mod terminal_guard;
pub mod theme;
