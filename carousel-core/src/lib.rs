//! Carousel core — slider state machine, input mapping, stage contract.
//!
//! This crate is presentation-independent:
//! - `carousel` — wraparound index state machine with validated jumps
//! - `input` — the closed input-event set and the input-to-transition table
//! - `stage` — the presentation contract and the controller that drives it
//! - `deck` — slide content model with a built-in sample deck

pub mod carousel;
pub mod deck;
pub mod input;
pub mod stage;

pub use carousel::{Carousel, CarouselError, JumpError};
pub use deck::{Deck, Slide};
pub use input::{ActivationTarget, InputEvent, Transition};
pub use stage::{Controller, Stage};
