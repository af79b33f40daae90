//! Live sentiment analysis console.
//!
//! Text typed into the terminal is classified by an external HTTP service;
//! the interesting part is the request lifecycle: when edits trigger calls
//! ([`trigger`]), which responses are still wanted ([`session`]), and what
//! the screen shows meanwhile ([`ui::sentiment`]).

pub mod args;
pub mod client;
pub mod config;
pub mod logging;
pub mod session;
pub mod trigger;
pub mod ui;
