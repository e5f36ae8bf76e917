use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position inside the canvas in CSS pixels. Click and drag
/// thresholds, drag sensitivity and the scene viewport all live in this
/// space; device pixel ratio only matters to the renderer.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    css_offset(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

#[inline]
pub fn css_offset(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// Canvas layout size in CSS pixels, never zero.
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(
        canvas.client_width().max(1) as f32,
        canvas.client_height().max(1) as f32,
    )
}

/// Convert a wheel delta to pixels: mode 0 is pixels, 1 lines, 2 pages.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        1 => d * line_px,
        2 => d * page_px,
        _ => d,
    }
}
