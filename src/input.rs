use glam::Vec2;
use web_sys as web;

/// Map a client-space point onto a canvas whose CSS box starts at `origin`
/// with size `css_size` and whose backing store is `backing` pixels. A
/// collapsed box leaves the point relative to `origin` unscaled.
#[inline]
pub fn client_to_backing(client: Vec2, origin: Vec2, css_size: Vec2, backing: Vec2) -> Vec2 {
    let local = client - origin;
    if css_size.x > 0.0 && css_size.y > 0.0 {
        local / css_size * backing
    } else {
        local
    }
}

/// Pointer position in canvas backing-store pixels.
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_backing(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
