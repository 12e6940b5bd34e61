//! Listener registration plumbing shared by the bindings.
//!
//! Handlers are wrapped in [`Closure`]s that the caller must keep alive;
//! registration failures are swallowed because a target that rejects a
//! listener simply leaves that interaction unwired.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

/// Register `handler` for `kind` events on `target`, parking the closure in
/// `closures`.
pub(crate) fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
    closures: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>,
) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        .ok();
    closures.push(callback);
}

/// Like [`listen`], but with an explicit `passive` flag for listeners that
/// need to stay able (or unable) to cancel scrolling.
pub(crate) fn listen_with_passive(
    target: &web_sys::EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(web_sys::Event) + 'static,
    closures: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>,
) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok();
    closures.push(callback);
}
