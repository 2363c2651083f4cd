#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod clock;
mod constants;
mod dom;
mod events;
mod frame;
mod layers;
mod sounds;

pub use sounds::UiSounds;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("story-web starting");
    Ok(())
}

/// Ambient background particles on a full-viewport canvas.
///
/// Construct on mount, call `deactivate` (or `free`) on unmount. When the
/// canvas has no 2D context the layer stays inert.
#[wasm_bindgen]
pub struct ParticleLayer {
    active: Option<layers::ambient::ActiveField>,
}

#[wasm_bindgen]
impl ParticleLayer {
    #[wasm_bindgen(constructor)]
    pub fn activate(canvas: web::HtmlCanvasElement) -> ParticleLayer {
        let active = match layers::ambient::activate(&canvas) {
            Ok(a) => Some(a),
            Err(e) => {
                log::warn!("[ambient] inactive: {:#}", e);
                None
            }
        };
        ParticleLayer { active }
    }

    pub fn deactivate(&mut self) {
        if self.active.take().is_some() {
            log::info!("[ambient] deactivated");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.active.is_some()
    }

    #[wasm_bindgen(js_name = liveCount)]
    pub fn live_count(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.len())
    }
}

/// Pointer-following sparkle trail on a full-viewport canvas.
#[wasm_bindgen]
pub struct SparkleLayer {
    active: Option<layers::sparkle::ActiveTrail>,
}

#[wasm_bindgen]
impl SparkleLayer {
    #[wasm_bindgen(constructor)]
    pub fn activate(canvas: web::HtmlCanvasElement) -> SparkleLayer {
        let active = match layers::sparkle::activate(&canvas) {
            Ok(a) => Some(a),
            Err(e) => {
                log::warn!("[sparkle] inactive: {:#}", e);
                None
            }
        };
        SparkleLayer { active }
    }

    pub fn deactivate(&mut self) {
        if self.active.take().is_some() {
            log::info!("[sparkle] deactivated");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.active.is_some()
    }

    #[wasm_bindgen(js_name = liveCount)]
    pub fn live_count(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.len())
    }
}
