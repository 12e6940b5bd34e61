//! DOM class-marker contract shared with the served markup.
//!
//! The server renders the widget skeletons; these class names are how the
//! bindings find their parts and how external stylesheets react to state.
//! Keeping them in one place keeps the Rust side and the templates honest.

/// Carousel container.
pub const SLIDER: &str = "slider";
/// Strip containing all slides, translated horizontally.
pub const TRACK: &str = "slider__track";
/// One slide inside the track.
pub const SLIDE: &str = "slider__slide";
/// One navigation dot.
pub const DOT: &str = "slider__dot";
/// Previous-slide arrow button.
pub const ARROW_PREV: &str = "slider__arrow--prev";
/// Next-slide arrow button.
pub const ARROW_NEXT: &str = "slider__arrow--next";

/// Toggled on the active slide and dot.
pub const ACTIVE: &str = "active";
/// Toggled on the track while a drag is in progress.
pub const DRAGGING: &str = "dragging";
/// Toggled on the container while hover-paused.
pub const PAUSED: &str = "paused";
/// Latched on the container once the user navigates explicitly.
pub const INTERACTED: &str = "interacted";

/// Counter card container.
pub const CARD: &str = "card";
/// Element displaying the count.
pub const COUNT: &str = "count";
/// Increment button.
pub const INCREASE: &str = "increase";
/// Decrement button.
pub const DECREASE: &str = "decrease";
/// Optional save button.
pub const SAVE: &str = "save-btn";

/// Build a CSS class selector for a marker.
pub fn selector(class: &str) -> String {
    format!(".{class}")
}

/// Format a horizontal track translation for an inline style.
pub fn translate_x(percent: f32) -> String {
    format!("translateX({percent}%)")
}
