//! Girare: WASM-first interaction layer for server-rendered pages.
//!
//! The state machines live in `girare-core`, know nothing about the DOM,
//! and test natively. This crate mounts them onto the page's markup and
//! keeps the two in sync: listeners feed events into the machines, and
//! every outcome is rendered back as class markers, the track transform,
//! and timer changes.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { Page } from './girare.js';
//!
//! async function main() {
//!     await init();
//!     const page = new Page();
//!     page.on_slide_change((json) => console.log(JSON.parse(json)));
//! }
//! ```

// wasm-bindgen surfaces take JS callbacks by value and name concrete types.
#![allow(clippy::use_self, clippy::needless_pass_by_value)]

pub mod browser;

pub use girare_core::{Carousel, CarouselConfig, Counter, DragState, SavePayload, TimerCmd};

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserCarousel, BrowserCounter, Page};
