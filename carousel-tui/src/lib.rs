//! Carousel TUI — terminal front end for the slider controller.
//!
//! Renders the slide strip, left/right controls, and dot indicators, and
//! translates terminal key and mouse events into the core input events.

pub mod app;
pub mod deck_loader;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
