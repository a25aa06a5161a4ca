use crate::field::StarField;
use glam::Vec2;

/// 2D drawing target the starfield renders into.
pub trait Surface {
    /// Match the backing store to the viewport, in pixels.
    fn resize(&mut self, width: u32, height: u32);
    /// Clear the whole surface to transparent.
    fn clear(&mut self);
    /// Fill a white circle at `alpha` opacity.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);
}

/// Clear `surface` and draw every star once.
pub fn render_frame<S: Surface + ?Sized>(field: &StarField, surface: &mut S) {
    surface.clear();
    for p in field.particles() {
        surface.fill_circle(p.position, p.radius(), p.alpha);
    }
}
