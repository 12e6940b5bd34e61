//! Interaction state machines for the girare page widgets.
//!
//! This crate holds the platform-independent half of the widgets:
//! - [`Carousel`]: slide-deck navigation, drag gestures, autoplay liveness
//! - [`Counter`]: the click-counter cards
//!
//! Nothing here touches the DOM or schedules timers. Operations that need
//! a timer side effect return a [`TimerCmd`] for the embedding layer to
//! execute, which keeps every state transition natively testable.

mod carousel;
mod counter;

pub use carousel::{Carousel, CarouselConfig, DragState, TimerCmd};
pub use counter::{Counter, SavePayload};
