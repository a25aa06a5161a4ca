use super::listen;
use crate::canvas::CanvasSurface;
use crate::constants::EVENT_RESIZE;
use crate::dom;
use starscape_core::{Scene, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(window: &web::Window, scene: Rc<RefCell<Scene<CanvasSurface>>>) -> Subscription {
    let window_for_size = window.clone();
    listen(window, EVENT_RESIZE, move |_ev: web::Event| {
        let viewport = dom::viewport_size(&window_for_size);
        log::debug!("[events] resize {}x{}", viewport.width, viewport.height);
        scene.borrow_mut().load(viewport);
    })
}
