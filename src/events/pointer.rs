use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport coordinate of a mouse move.
#[inline]
pub fn mouse_point(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

/// Viewport coordinate of the first active touch, if any.
#[inline]
pub fn touch_point(ev: &web::Event) -> Option<Vec2> {
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}
