//! Event handling module for keyboard and mouse input.
//!
//! Handlers translate terminal events into Actions; `App::dispatch` applies
//! them.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
