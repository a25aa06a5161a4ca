use super::listen;
use crate::canvas::CanvasSurface;
use crate::constants::{EVENT_POINTER_LEAVE, EVENT_POINTER_MOVE};
use crate::input;
use starscape_core::{Scene, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_pointer_move(
    document: &web::Document,
    scene: Rc<RefCell<Scene<CanvasSurface>>>,
) -> Subscription {
    listen(document, EVENT_POINTER_MOVE, move |ev: web::PointerEvent| {
        let mut scene = scene.borrow_mut();
        let pos = input::pointer_canvas_px(&ev, scene.surface().canvas());
        if pos.is_finite() {
            scene.pointer_move(pos);
        }
    })
}

pub fn wire_pointer_leave(
    document: &web::Document,
    scene: Rc<RefCell<Scene<CanvasSurface>>>,
) -> Subscription {
    listen(document, EVENT_POINTER_LEAVE, move |_ev: web::PointerEvent| {
        scene.borrow_mut().pointer_leave();
    })
}
