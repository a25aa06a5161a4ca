//! Owned render context: one starfield, one surface, one frame ticker.
//!
//! The host forwards its events here (`load` on startup and resize,
//! `pointer_move`, `pointer_leave`, `frame` from its animation callback). All
//! mutation happens between those calls, so no locking is involved.

use crate::config::{ConfigError, StarfieldConfig};
use crate::field::{StarField, Viewport};
use crate::surface::{render_frame, Surface};
use crate::ticker::FrameTicker;
use glam::Vec2;
use rand::rngs::StdRng;

pub struct Scene<S: Surface> {
    field: StarField,
    surface: S,
    ticker: FrameTicker,
    frames: u64,
}

impl<S: Surface> Scene<S> {
    pub fn new(
        config: StarfieldConfig,
        viewport: Viewport,
        surface: S,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let ticker = FrameTicker::new(config.fps);
        let field = StarField::new(config, viewport, rng)?;
        let mut scene = Self {
            field,
            surface,
            ticker,
            frames: 0,
        };
        scene.resize_surface(viewport);
        log::info!(
            "[scene] loaded {} stars at {} fps",
            scene.field.particles().len(),
            scene.ticker.fps()
        );
        Ok(scene)
    }

    /// Size the surface to `viewport` and rebuild every star.
    pub fn load(&mut self, viewport: Viewport) {
        self.resize_surface(viewport);
        self.field.resize(viewport);
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        self.field.update_pointer(pointer);
    }

    pub fn pointer_leave(&mut self) {
        self.field.reset();
    }

    /// Host animation callback. Steps tweens and redraws when the ticker says
    /// a frame is due; returns whether it drew.
    pub fn frame(&mut self, now_sec: f64) -> bool {
        let Some(dt) = self.ticker.tick(now_sec) else {
            return false;
        };
        self.field.advance(dt);
        render_frame(&self.field, &mut self.surface);
        self.frames += 1;
        true
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    fn resize_surface(&mut self, viewport: Viewport) {
        let w = viewport.width.max(0.0) as u32;
        let h = viewport.height.max(0.0) as u32;
        self.surface.resize(w, h);
    }
}
