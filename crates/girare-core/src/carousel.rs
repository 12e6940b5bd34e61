#![allow(clippy::unwrap_used)]
//! Carousel slide-deck state machine.
//!
//! Tracks the active slide, an in-progress drag gesture, and autoplay
//! liveness for a single carousel instance. The state machine performs no
//! side effects itself: every operation that can affect the autoplay
//! interval returns a [`TimerCmd`] directive, and the embedding layer owns
//! the actual timer handle.

use serde::{Deserialize, Serialize};

/// Configuration for a carousel instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Whether the deck advances automatically.
    pub autoplay: bool,
    /// Delay between automatic advances (in milliseconds).
    pub autoplay_interval_ms: u64,
    /// Whether hovering the carousel suspends autoplay.
    pub pause_on_hover: bool,
    /// Minimum horizontal drag distance to commit a slide change (in pixels).
    pub drag_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: 5000,
            pause_on_hover: true,
            drag_threshold: 50.0,
        }
    }
}

/// Drag gesture tracking for the track.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A pointer or touch is down and moving horizontally.
    Dragging {
        /// Horizontal position where the gesture began.
        start_x: f32,
        /// Most recent horizontal position.
        current_x: f32,
    },
}

/// Directive for the autoplay interval, executed by the embedding layer.
///
/// `Restart` always means cancel-then-schedule, so a carousel can never
/// accumulate more than one live timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "timer directives must be applied to the autoplay interval"]
pub enum TimerCmd {
    /// Leave the interval untouched.
    None,
    /// Cancel any scheduled interval, then schedule a fresh one.
    Restart,
    /// Cancel the scheduled interval.
    Stop,
}

/// State machine for one slide deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carousel {
    /// Configuration.
    config: CarouselConfig,
    /// Number of slides, fixed at construction.
    slide_count: usize,
    /// Index of the active slide.
    current_index: usize,
    /// Drag gesture in progress, if any.
    #[serde(skip)]
    drag: DragState,
    /// Mirror of the embedding layer's interval handle liveness.
    #[serde(skip)]
    timer_live: bool,
    /// Set while the user hovers the carousel (with `pause_on_hover`).
    paused: bool,
    /// Latched once the user navigates or drags explicitly.
    interacted: bool,
}

impl Carousel {
    /// Create a carousel with the default configuration.
    pub fn new(slide_count: usize) -> Self {
        Self::with_config(slide_count, CarouselConfig::default())
    }

    /// Create a carousel with a custom configuration.
    pub const fn with_config(slide_count: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            slide_count,
            current_index: 0,
            drag: DragState::Idle,
            timer_live: false,
            paused: false,
            interacted: false,
        }
    }

    /// Get the carousel configuration.
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Get the number of slides.
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Get the index of the active slide.
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a drag gesture is in progress.
    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Whether the user is hovering the carousel (autoplay suspended).
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the user has explicitly navigated or dragged.
    pub const fn has_interacted(&self) -> bool {
        self.interacted
    }

    /// Whether an autoplay interval is scheduled.
    pub const fn autoplay_running(&self) -> bool {
        self.timer_live
    }

    /// Whether `index` is the active slide.
    pub const fn is_active(&self, index: usize) -> bool {
        index == self.current_index && index < self.slide_count
    }

    /// Horizontal track translation as a percentage of the container width.
    ///
    /// At rest this is `-(current_index * 100)`. During a drag the live
    /// pointer delta is added, scaled by `container_width`; a non-positive
    /// width contributes nothing so the track never jumps on degenerate
    /// layouts.
    pub fn track_offset_percent(&self, container_width: f32) -> f32 {
        let base = -(self.current_index as f32) * 100.0;
        match self.drag {
            DragState::Dragging { start_x, current_x } if container_width > 0.0 => {
                base + ((current_x - start_x) / container_width) * 100.0
            }
            _ => base,
        }
    }

    /// Advance to the next slide, wrapping past the end.
    pub fn next(&mut self) -> TimerCmd {
        if self.slide_count > 0 {
            self.current_index = (self.current_index + 1) % self.slide_count;
        }
        self.reset_autoplay()
    }

    /// Go back to the previous slide, wrapping past the start.
    pub fn prev(&mut self) -> TimerCmd {
        if self.slide_count > 0 {
            self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
        }
        self.reset_autoplay()
    }

    /// Jump directly to a slide. Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> TimerCmd {
        if index >= self.slide_count {
            return TimerCmd::None;
        }
        self.current_index = index;
        self.interacted = true;
        self.reset_autoplay()
    }

    /// Begin a drag gesture at horizontal position `x`.
    ///
    /// Suspends autoplay for the duration of the gesture without touching
    /// the user-pause flag.
    pub fn drag_start(&mut self, x: f32) -> TimerCmd {
        self.drag = DragState::Dragging {
            start_x: x,
            current_x: x,
        };
        self.interacted = true;
        self.stop_autoplay()
    }

    /// Update the drag position. Returns `false` when no drag is in
    /// progress (stray move events are ignored).
    pub fn drag_move(&mut self, x: f32) -> bool {
        match &mut self.drag {
            DragState::Dragging { current_x, .. } => {
                *current_x = x;
                true
            }
            DragState::Idle => false,
        }
    }

    /// Finish (or cancel) a drag gesture.
    ///
    /// Commits a slide change when the total distance exceeds the
    /// threshold: a rightward drag reveals the previous slide, a leftward
    /// drag the next. A distance of exactly the threshold snaps back.
    /// Ignored when no drag is in progress.
    pub fn drag_end(&mut self) -> TimerCmd {
        let (start_x, current_x) = match self.drag {
            DragState::Dragging { start_x, current_x } => (start_x, current_x),
            DragState::Idle => return TimerCmd::None,
        };
        self.drag = DragState::Idle;

        let diff = current_x - start_x;
        if diff.abs() > self.config.drag_threshold {
            if diff > 0.0 {
                self.step_prev();
            } else {
                self.step_next();
            }
        }
        self.reset_autoplay()
    }

    /// Suspend autoplay while the user hovers the carousel.
    pub fn pause(&mut self) -> TimerCmd {
        self.paused = true;
        self.stop_autoplay()
    }

    /// Clear the hover pause. Restarts autoplay only when it is enabled.
    pub fn resume(&mut self) -> TimerCmd {
        self.paused = false;
        self.reset_autoplay()
    }

    /// Schedule autoplay unconditionally (cancel-then-schedule).
    pub fn start_autoplay(&mut self) -> TimerCmd {
        self.timer_live = true;
        TimerCmd::Restart
    }

    /// Cancel autoplay if scheduled. Idempotent.
    pub fn stop_autoplay(&mut self) -> TimerCmd {
        if self.timer_live {
            self.timer_live = false;
            TimerCmd::Stop
        } else {
            TimerCmd::None
        }
    }

    /// Stop-then-start: schedule a fresh interval when autoplay should be
    /// running (enabled, not user-paused, not mid-drag), otherwise make
    /// sure none is scheduled.
    pub fn reset_autoplay(&mut self) -> TimerCmd {
        if self.config.autoplay && !self.paused && !self.is_dragging() {
            self.start_autoplay()
        } else {
            self.stop_autoplay()
        }
    }

    fn step_next(&mut self) {
        if self.slide_count > 0 {
            self.current_index = (self.current_index + 1) % self.slide_count;
        }
    }

    fn step_prev(&mut self) {
        if self.slide_count > 0 {
            self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
        }
    }
}
