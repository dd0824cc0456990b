//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are turned into `Action`s here and applied by
//! `App::dispatch`.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
