//! Carousel DOM binding.
//!
//! [`BrowserCarousel`] attaches a [`Carousel`] state machine to a `.slider`
//! container: it wires pointer, touch, keyboard, and hover listeners, renders
//! state back into classes and the track transform, and drives the autoplay
//! interval from the timer directives the state machine returns.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use girare_core::{Carousel, CarouselConfig, TimerCmd};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

use super::events::{listen, listen_with_passive};
use super::{dom, markers};

/// Why a carousel could not be attached to a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The container is not an HTML element.
    NotHtml,
    /// The container has no track descendant.
    MissingTrack,
    /// The track contains no slides.
    NoSlides,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotHtml => write!(f, "container is not an HTML element"),
            Self::MissingTrack => write!(f, "no slide track found in container"),
            Self::NoSlides => write!(f, "slide track is empty"),
        }
    }
}

impl std::error::Error for MountError {}

/// Payload delivered to change subscribers, serialized as JSON.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlideChange {
    /// Index of the slide that is now active.
    pub index: usize,
}

/// A live `setInterval` registration. Dropping the handle clears the
/// interval and releases the tick closure.
struct IntervalHandle {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// DOM parts resolved once at mount time.
struct CarouselParts {
    root: HtmlElement,
    track: HtmlElement,
    slides: Vec<Element>,
    dots: Vec<Element>,
}

/// Shared handles cloned into every listener closure.
#[derive(Clone)]
struct CarouselCtx {
    state: Rc<RefCell<Carousel>>,
    parts: Rc<CarouselParts>,
    interval: Rc<RefCell<Option<IntervalHandle>>>,
    change_callbacks: Rc<RefCell<Vec<js_sys::Function>>>,
}

/// A carousel bound to a container in the live document.
///
/// Listeners and the autoplay interval stay registered for as long as this
/// value is alive. Dropping it cancels the interval.
pub struct BrowserCarousel {
    ctx: CarouselCtx,
    /// Listener closures kept alive for the lifetime of the binding.
    _closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

impl BrowserCarousel {
    /// Attach to a `.slider` container.
    ///
    /// The container must hold a `.slider__track` with at least one
    /// `.slider__slide`. Dots and arrows are optional; whichever are present
    /// get wired, the rest are skipped.
    pub fn mount(container: &Element, config: CarouselConfig) -> Result<Self, MountError> {
        let root = dom::as_html(container).ok_or(MountError::NotHtml)?;
        let track = dom::query(container, &markers::selector(markers::TRACK))
            .and_then(|el| dom::as_html(&el))
            .ok_or(MountError::MissingTrack)?;
        let slides = dom::query_all(&track, &markers::selector(markers::SLIDE));
        if slides.is_empty() {
            return Err(MountError::NoSlides);
        }
        let dots = dom::query_all(container, &markers::selector(markers::DOT));

        let ctx = CarouselCtx {
            state: Rc::new(RefCell::new(Carousel::with_config(slides.len(), config))),
            parts: Rc::new(CarouselParts {
                root,
                track,
                slides,
                dots,
            }),
            interval: Rc::new(RefCell::new(None)),
            change_callbacks: Rc::new(RefCell::new(Vec::new())),
        };

        let mut closures = Vec::new();
        bind_drag(&ctx, &mut closures);
        bind_controls(&ctx, &mut closures);
        bind_hover(&ctx, &mut closures);
        bind_keyboard(&ctx, &mut closures);

        // Containers are not focusable by default, so arrow keys would
        // never reach the keydown listener without this.
        ctx.parts.root.set_attribute("tabindex", "0").ok();

        render(&ctx);
        let cmd = ctx.state.borrow_mut().reset_autoplay();
        apply_timer(&ctx, cmd);

        Ok(Self {
            ctx,
            _closures: closures,
        })
    }

    /// Index of the active slide.
    pub fn current_index(&self) -> usize {
        self.ctx.state.borrow().current_index()
    }

    /// Number of slides under the track.
    pub fn slide_count(&self) -> usize {
        self.ctx.state.borrow().slide_count()
    }

    /// Whether the autoplay interval is currently scheduled.
    pub fn autoplay_running(&self) -> bool {
        self.ctx.state.borrow().autoplay_running()
    }

    /// Advance to the next slide.
    pub fn next(&self) {
        run(&self.ctx, Carousel::next);
    }

    /// Step back to the previous slide.
    pub fn prev(&self) {
        run(&self.ctx, Carousel::prev);
    }

    /// Jump straight to a slide. Out-of-range indices are ignored.
    pub fn go_to(&self, index: usize) {
        run(&self.ctx, |state| state.go_to(index));
    }

    /// Subscribe to slide changes. The callback receives a JSON string
    /// shaped like [`SlideChange`].
    pub fn on_change(&self, callback: js_sys::Function) {
        self.ctx.change_callbacks.borrow_mut().push(callback);
    }
}

impl Drop for BrowserCarousel {
    fn drop(&mut self) {
        self.ctx.interval.borrow_mut().take();
    }
}

/// Run one state operation, then reconcile the DOM, the interval, and any
/// change subscribers with the outcome.
fn run(ctx: &CarouselCtx, op: impl FnOnce(&mut Carousel) -> TimerCmd) {
    let before = ctx.state.borrow().current_index();
    let cmd = op(&mut ctx.state.borrow_mut());
    render(ctx);
    apply_timer(ctx, cmd);
    let after = ctx.state.borrow().current_index();
    if after != before {
        notify_change(ctx, after);
    }
}

/// Write the current state into the DOM. Idempotent.
fn render(ctx: &CarouselCtx) {
    let state = ctx.state.borrow();
    let parts = &ctx.parts;

    let width = parts.root.offset_width();
    let offset = state.track_offset_percent(width as f32);
    parts
        .track
        .style()
        .set_property("transform", &markers::translate_x(offset))
        .ok();

    for (i, slide) in parts.slides.iter().enumerate() {
        slide
            .class_list()
            .toggle_with_force(markers::ACTIVE, state.is_active(i))
            .ok();
    }
    for (i, dot) in parts.dots.iter().enumerate() {
        dot.class_list()
            .toggle_with_force(markers::ACTIVE, state.is_active(i))
            .ok();
    }

    parts
        .track
        .class_list()
        .toggle_with_force(markers::DRAGGING, state.is_dragging())
        .ok();
    parts
        .root
        .class_list()
        .toggle_with_force(markers::PAUSED, state.is_paused())
        .ok();
    if state.has_interacted() {
        parts.root.class_list().add_1(markers::INTERACTED).ok();
    }
}

/// Apply a timer directive to the interval slot.
fn apply_timer(ctx: &CarouselCtx, cmd: TimerCmd) {
    match cmd {
        TimerCmd::None => {}
        TimerCmd::Stop => {
            ctx.interval.borrow_mut().take();
        }
        TimerCmd::Restart => {
            // Cancel before scheduling so at most one interval is ever live.
            ctx.interval.borrow_mut().take();
            let handle = schedule_tick(ctx);
            *ctx.interval.borrow_mut() = handle;
        }
    }
}

/// Schedule the autoplay tick at the configured interval.
fn schedule_tick(ctx: &CarouselCtx) -> Option<IntervalHandle> {
    let window = web_sys::window()?;
    let tick_ctx = ctx.clone();
    let tick = Closure::<dyn FnMut()>::new(move || {
        let before = tick_ctx.state.borrow().current_index();
        // The interval keeps firing on its own period, so the restart
        // directive `next` returns is already satisfied.
        let _ = tick_ctx.state.borrow_mut().next();
        render(&tick_ctx);
        let after = tick_ctx.state.borrow().current_index();
        if after != before {
            notify_change(&tick_ctx, after);
        }
    });
    let interval_ms = ctx.state.borrow().config().autoplay_interval_ms as i32;
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval_ms,
        )
        .ok()?;
    Some(IntervalHandle { id, _tick: tick })
}

/// Fan a slide change out to all registered callbacks.
fn notify_change(ctx: &CarouselCtx, index: usize) {
    // A callback may register further callbacks while we iterate.
    let callbacks = ctx.change_callbacks.borrow().clone();
    if callbacks.is_empty() {
        return;
    }
    let payload = serde_json::to_string(&SlideChange { index }).unwrap_or_default();
    for callback in &callbacks {
        let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&payload));
    }
}

fn bind_drag(ctx: &CarouselCtx, closures: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>) {
    let track = &ctx.parts.track;

    let cx = ctx.clone();
    listen_with_passive(
        track,
        "touchstart",
        true,
        move |e| {
            if let Some(x) = touch_x(&e) {
                run(&cx, |state| state.drag_start(x));
            }
        },
        closures,
    );

    // touchmove must stay cancelable so a horizontal drag can suppress
    // vertical page scrolling.
    let cx = ctx.clone();
    listen_with_passive(
        track,
        "touchmove",
        false,
        move |e| {
            if !cx.state.borrow().is_dragging() {
                return;
            }
            e.prevent_default();
            if let Some(x) = touch_x(&e) {
                drag_to(&cx, x);
            }
        },
        closures,
    );

    let cx = ctx.clone();
    listen(track, "touchend", move |_e| run(&cx, Carousel::drag_end), closures);

    let cx = ctx.clone();
    listen(track, "touchcancel", move |_e| run(&cx, Carousel::drag_end), closures);

    let cx = ctx.clone();
    listen(
        track,
        "mousedown",
        move |e| {
            if let Some(x) = mouse_x(&e) {
                run(&cx, |state| state.drag_start(x));
            }
        },
        closures,
    );

    let cx = ctx.clone();
    listen(
        track,
        "mousemove",
        move |e| {
            if !cx.state.borrow().is_dragging() {
                return;
            }
            e.prevent_default();
            if let Some(x) = mouse_x(&e) {
                drag_to(&cx, x);
            }
        },
        closures,
    );

    let cx = ctx.clone();
    listen(track, "mouseup", move |_e| run(&cx, Carousel::drag_end), closures);

    // Leaving the track mid-drag counts as releasing it.
    let cx = ctx.clone();
    listen(track, "mouseleave", move |_e| run(&cx, Carousel::drag_end), closures);
}

fn bind_controls(ctx: &CarouselCtx, closures: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>) {
    let root = &ctx.parts.root;

    if let Some(arrow) = dom::query(root, &markers::selector(markers::ARROW_PREV)) {
        let cx = ctx.clone();
        listen(&arrow, "click", move |_e| run(&cx, Carousel::prev), closures);
    }
    if let Some(arrow) = dom::query(root, &markers::selector(markers::ARROW_NEXT)) {
        let cx = ctx.clone();
        listen(&arrow, "click", move |_e| run(&cx, Carousel::next), closures);
    }

    for (i, dot) in ctx.parts.dots.iter().enumerate() {
        let cx = ctx.clone();
        listen(dot, "click", move |_e| run(&cx, |state| state.go_to(i)), closures);
    }
}

fn bind_hover(ctx: &CarouselCtx, closures: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>) {
    if !ctx.state.borrow().config().pause_on_hover {
        return;
    }
    let root = &ctx.parts.root;

    let cx = ctx.clone();
    listen(root, "mouseenter", move |_e| run(&cx, Carousel::pause), closures);

    let cx = ctx.clone();
    listen(root, "mouseleave", move |_e| run(&cx, Carousel::resume), closures);
}

fn bind_keyboard(ctx: &CarouselCtx, closures: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>) {
    let cx = ctx.clone();
    listen(
        &ctx.parts.root,
        "keydown",
        move |e| {
            if let Some(key_event) = e.dyn_ref::<KeyboardEvent>() {
                match key_event.key().as_str() {
                    "ArrowLeft" => run(&cx, Carousel::prev),
                    "ArrowRight" => run(&cx, Carousel::next),
                    _ => {}
                }
            }
        },
        closures,
    );
}

/// Apply a drag position update, re-rendering only if it changed anything.
fn drag_to(ctx: &CarouselCtx, x: f32) {
    let moved = ctx.state.borrow_mut().drag_move(x);
    if moved {
        render(ctx);
    }
}

/// Horizontal position of the first touch, if the event carries one.
fn touch_x(event: &web_sys::Event) -> Option<f32> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let touch = touch_event.touches().get(0)?;
    Some(touch.client_x() as f32)
}

/// Horizontal page position of a mouse event.
fn mouse_x(event: &web_sys::Event) -> Option<f32> {
    let mouse_event = event.dyn_ref::<MouseEvent>()?;
    Some(mouse_event.page_x() as f32)
}

// ============================================================================
// Browser tests
// ============================================================================
