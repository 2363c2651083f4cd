use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` chain that calls `on_frame` once per display
/// refresh until cancelled.
///
/// The tick closure holds a clone of its own slot so it can re-register
/// itself; `cancel` empties the slot, which frees the closure and
/// everything it captured.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_next = tick.clone();
        let pending_next = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_next.set(None);
            on_frame();
            if let (Some(w), Some(cb)) = (web::window(), tick_next.borrow().as_ref()) {
                pending_next.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut()>));

        let first = match tick.borrow().as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("requestAnimationFrame: {:?}", e)),
            None => Err(anyhow!("frame callback missing")),
        };
        let id = match first {
            Ok(id) => id,
            Err(e) => {
                // The closure owns `tick_next`; dropping it breaks the cycle.
                tick.borrow_mut().take();
                return Err(e);
            }
        };
        pending.set(Some(id));
        Ok(Self { tick, pending })
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
