use crate::canvas::CanvasPainter;
use crate::clock::FrameClock;
use crate::constants::RESIZE_EVENT;
use crate::dom;
use crate::events::{self, EventListener};
use crate::frame::FrameLoop;
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use story_core::{AmbientField, FieldConfig};
use web_sys as web;

struct FieldState {
    field: AmbientField,
    painter: CanvasPainter,
    clock: FrameClock,
}

impl FieldState {
    fn frame(&mut self) {
        let dt = self.clock.tick();
        self.field.step(dt);
        self.field.render(&mut self.painter);
    }
}

/// A running ambient field bound to a canvas. Dropping it stops the frame
/// loop, removes the resize listener and frees the pool.
pub struct ActiveField {
    state: Rc<RefCell<FieldState>>,
    _frames: FrameLoop,
    _resize: EventListener,
}

impl ActiveField {
    pub fn len(&self) -> usize {
        self.state.borrow().field.len()
    }
}

pub fn activate(canvas: &web::HtmlCanvasElement) -> anyhow::Result<ActiveField> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let painter = CanvasPainter::new(canvas)?;
    let viewport = dom::sync_canvas_to_viewport(&window, canvas);
    let field = AmbientField::new(viewport, FieldConfig::default(), StdRng::from_entropy());
    log::info!(
        "[ambient] {} particles on {:.0}x{:.0}",
        field.len(),
        viewport.width,
        viewport.height
    );
    let state = Rc::new(RefCell::new(FieldState {
        field,
        painter,
        clock: FrameClock::new(),
    }));

    let resize = {
        let state = state.clone();
        let canvas = canvas.clone();
        events::listen(&window, RESIZE_EVENT, move |_| {
            if let Some(w) = web::window() {
                let vp = dom::sync_canvas_to_viewport(&w, &canvas);
                state.borrow_mut().field.resize(vp);
            }
        })?
    };

    let frames = {
        let state = state.clone();
        FrameLoop::start(move || state.borrow_mut().frame())?
    };

    Ok(ActiveField {
        state,
        _frames: frames,
        _resize: resize,
    })
}
