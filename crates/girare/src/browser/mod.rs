//! Browser runtime for the girare page widgets.
//!
//! This module bridges the interaction state machines in `girare-core` to
//! the document: it finds widget containers by their class markers, wires
//! event listeners, and writes state back into classes and inline styles.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod carousel;
#[cfg(target_arch = "wasm32")]
pub mod counter;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
pub mod page;

// Cross-platform modules
pub mod markers;

#[cfg(target_arch = "wasm32")]
pub use carousel::{BrowserCarousel, MountError, SlideChange};
#[cfg(target_arch = "wasm32")]
pub use counter::{BrowserCounter, CardError};
#[cfg(target_arch = "wasm32")]
pub use page::Page;
