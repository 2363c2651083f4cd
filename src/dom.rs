use story_core::Viewport;
use web_sys as web;

/// Current layout viewport in CSS pixels.
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

/// Size the canvas backing store to the viewport and return that viewport.
/// The layers draw in CSS pixels, one canvas pixel per CSS pixel.
pub fn sync_canvas_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> Viewport {
    let vp = viewport(window);
    canvas.set_width((vp.width as u32).max(1));
    canvas.set_height((vp.height as u32).max(1));
    vp
}
