use crate::canvas::CanvasSurface;
use anyhow::anyhow;
use instant::Instant;
use starscape_core::{Scene, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `scene` from requestAnimationFrame. The scene's own ticker decides
/// which callbacks actually draw. Releasing the handle cancels the pending
/// callback and frees the closure.
pub fn start_loop(scene: Rc<RefCell<Scene<CanvasSurface>>>) -> anyhow::Result<Subscription> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let started = Instant::now();
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        scene
            .borrow_mut()
            .frame(started.elapsed().as_secs_f64());
        if let Some(cb) = tick_clone.borrow().as_ref() {
            match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => pending_tick.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }) as Box<dyn FnMut()>));

    let first = match tick.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("requestAnimationFrame failed: {:?}", e))?,
        None => return Ok(Subscription::noop("frame")),
    };
    pending.set(Some(first));

    Ok(Subscription::new("frame", move || {
        if let Some(id) = pending.take() {
            _ = window.cancel_animation_frame(id);
        }
        // breaks the closure <-> slot cycle
        match tick.try_borrow_mut() {
            Ok(mut slot) => drop(slot.take()),
            Err(_) => log::warn!("[frame] loop released from inside a frame"),
        }
    }))
}
