use crate::canvas::CanvasPainter;
use crate::clock::FrameClock;
use crate::constants::{MOUSE_MOVE_EVENT, RESIZE_EVENT, TOUCH_MOVE_EVENT};
use crate::dom;
use crate::events::{self, pointer, EventListener};
use crate::frame::FrameLoop;
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use story_core::{SparkleTrail, TrailConfig};
use web_sys as web;

struct TrailState {
    trail: SparkleTrail,
    painter: CanvasPainter,
    clock: FrameClock,
}

impl TrailState {
    fn frame(&mut self) {
        let dt = self.clock.tick();
        self.trail.step(dt);
        self.trail.render(&mut self.painter);
    }
}

/// A running sparkle trail bound to a canvas and to window pointer input.
pub struct ActiveTrail {
    state: Rc<RefCell<TrailState>>,
    _frames: FrameLoop,
    _listeners: Vec<EventListener>,
}

impl ActiveTrail {
    pub fn len(&self) -> usize {
        self.state.borrow().trail.len()
    }
}

pub fn activate(canvas: &web::HtmlCanvasElement) -> anyhow::Result<ActiveTrail> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let painter = CanvasPainter::new(canvas)?;
    let viewport = dom::sync_canvas_to_viewport(&window, canvas);
    let trail = SparkleTrail::new(viewport, TrailConfig::default(), StdRng::from_entropy());
    let state = Rc::new(RefCell::new(TrailState {
        trail,
        painter,
        clock: FrameClock::new(),
    }));

    let mut listeners = Vec::with_capacity(3);
    {
        let state = state.clone();
        listeners.push(events::listen(&window, MOUSE_MOVE_EVENT, move |ev| {
            if let Some(at) = pointer::mouse_point(&ev) {
                state.borrow_mut().trail.spawn_at(at);
            }
        })?);
    }
    {
        let state = state.clone();
        listeners.push(events::listen_passive(&window, TOUCH_MOVE_EVENT, move |ev| {
            if let Some(at) = pointer::touch_point(&ev) {
                state.borrow_mut().trail.spawn_at(at);
            }
        })?);
    }
    {
        let state = state.clone();
        let canvas = canvas.clone();
        listeners.push(events::listen(&window, RESIZE_EVENT, move |_| {
            if let Some(w) = web::window() {
                let vp = dom::sync_canvas_to_viewport(&w, &canvas);
                state.borrow_mut().trail.resize(vp);
            }
        })?);
    }

    let frames = {
        let state = state.clone();
        FrameLoop::start(move || state.borrow_mut().frame())?
    };
    log::info!("[sparkle] listening for pointer input");

    Ok(ActiveTrail {
        state,
        _frames: frames,
        _listeners: listeners,
    })
}
