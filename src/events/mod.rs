mod pointer;
mod resize;

pub use pointer::{wire_pointer_leave, wire_pointer_move};
pub use resize::wire_resize;

use starscape_core::Subscription;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Register `handler` for `event` on `target`. The returned handle removes the
/// listener and frees the closure when released.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Subscription
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] could not listen for {}: {:?}", event, e);
        return Subscription::noop(event);
    }
    let target = target.clone();
    Subscription::new(event, move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}
