#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starscape_core::{Scene, StarfieldConfig, Subscriptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod options;
mod style;

pub use options::StarscapeOptions;

thread_local! {
    // instance auto-mounted on the default canvas; lives for the page
    static AUTO_MOUNTED: RefCell<Option<Starscape>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starscape-web starting");

    let has_default_canvas = web::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(constants::DEFAULT_CANVAS_ID))
        .is_some();
    if has_default_canvas {
        match mount(constants::DEFAULT_CANVAS_ID, StarfieldConfig::default()) {
            Ok(s) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(s)),
            Err(e) => log::error!("auto-mount error: {:?}", e),
        }
    }
    Ok(())
}

/// A starfield attached to one canvas. Call `destroy` (or `free`) to detach
/// every listener and stop the frame loop.
#[wasm_bindgen]
pub struct Starscape {
    scene: Rc<RefCell<Scene<CanvasSurface>>>,
    subscriptions: Subscriptions,
}

#[wasm_bindgen]
impl Starscape {
    pub fn mount(canvas_id: &str, options: Option<StarscapeOptions>) -> Result<Starscape, JsValue> {
        let config = options.unwrap_or_default().into_config();
        mount(canvas_id, config).map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&format!("{:#}", e))
        })
    }

    /// Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if !self.subscriptions.is_empty() {
            log::info!("[starscape] destroy");
        }
        self.subscriptions.release_all();
    }

    #[wasm_bindgen(getter = starCount)]
    pub fn star_count(&self) -> usize {
        self.scene.borrow().field().particles().len()
    }

    #[wasm_bindgen(getter = isActive)]
    pub fn is_active(&self) -> bool {
        self.subscriptions.active() > 0
    }
}

/// Remove the instance started on the default canvas, if any.
#[wasm_bindgen(js_name = destroyDefault)]
pub fn destroy_default() {
    AUTO_MOUNTED.with(|slot| {
        if let Some(mut s) = slot.borrow_mut().take() {
            s.destroy();
        }
    });
}

fn mount(canvas_id: &str, config: StarfieldConfig) -> anyhow::Result<Starscape> {
    let window = web::window().context("no window")?;
    let document = window.document().context("no document")?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let surface = CanvasSurface::new(canvas)?;

    let viewport = dom::viewport_size(&window);
    let scene = Scene::new(config, viewport, surface, StdRng::from_entropy())
        .context("invalid starfield options")?;
    let scene = Rc::new(RefCell::new(scene));

    let mut subscriptions = Subscriptions::new();
    subscriptions.push(events::wire_resize(&window, scene.clone()));
    subscriptions.push(events::wire_pointer_move(&document, scene.clone()));
    subscriptions.push(events::wire_pointer_leave(&document, scene.clone()));
    subscriptions.push(frame::start_loop(scene.clone())?);

    log::info!(
        "[starscape] mounted on #{} ({}x{})",
        canvas_id,
        viewport.width,
        viewport.height
    );
    Ok(Starscape {
        scene,
        subscriptions,
    })
}
