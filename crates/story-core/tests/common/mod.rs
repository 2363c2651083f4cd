// Shared test doubles: a painter that records calls and an in-memory audio
// backend that records scheduled tones.

#![allow(dead_code)]

use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use story_core::{
    AudioBackend, AudioConfig, AudioError, AudioHandle, CubicSegment, Fill, Painter, Rgb,
    ScheduledTone,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(Vec2),
    Rect { origin: Vec2, size: Vec2, fill: Fill },
    Ellipse { center: Vec2, radii: Vec2, fill: Fill },
    Polygon { points: Vec<Vec2>, fill: Fill },
    Bezier { start: Vec2, segments: Vec<CubicSegment>, fill: Fill },
    Glow { center: Vec2, radius: f32, color: Rgb, alpha: f32 },
}

#[derive(Default)]
pub struct RecordingPainter {
    pub calls: Vec<Call>,
}

impl Painter for RecordingPainter {
    fn clear(&mut self, size: Vec2) {
        self.calls.push(Call::Clear(size));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, fill: Fill) {
        self.calls.push(Call::Rect { origin, size, fill });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, _rotation: f32, fill: Fill) {
        self.calls.push(Call::Ellipse {
            center,
            radii,
            fill,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], fill: Fill) {
        self.calls.push(Call::Polygon {
            points: points.to_vec(),
            fill,
        });
    }

    fn fill_bezier(&mut self, start: Vec2, segments: &[CubicSegment], fill: Fill) {
        self.calls.push(Call::Bezier {
            start,
            segments: segments.to_vec(),
            fill,
        });
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.calls.push(Call::Glow {
            center,
            radius,
            color,
            alpha,
        });
    }
}

/// Observable state shared between a test and the mock backend it creates.
#[derive(Default)]
pub struct Recorder {
    pub created: Cell<u32>,
    pub resumes: Cell<u32>,
    pub closed: Cell<bool>,
    pub suspended: Cell<bool>,
    pub now: Cell<f64>,
    pub fail_plays: Cell<u32>,
    pub played: RefCell<Vec<ScheduledTone>>,
}

pub struct MockBackend {
    recorder: Rc<Recorder>,
}

impl AudioBackend for MockBackend {
    fn current_time(&self) -> f64 {
        self.recorder.now.get()
    }

    fn is_suspended(&self) -> bool {
        self.recorder.suspended.get()
    }

    fn resume(&self) {
        self.recorder.resumes.set(self.recorder.resumes.get() + 1);
    }

    fn play(&self, tone: &ScheduledTone) -> Result<(), AudioError> {
        if self.recorder.fail_plays.get() > 0 {
            self.recorder.fail_plays.set(self.recorder.fail_plays.get() - 1);
            return Err(AudioError::node("OscillatorNode", "mock failure"));
        }
        self.recorder.played.borrow_mut().push(*tone);
        Ok(())
    }

    fn close(&mut self) {
        self.recorder.closed.set(true);
    }
}

pub fn mock_handle(recorder: &Rc<Recorder>) -> AudioHandle<MockBackend> {
    let recorder = recorder.clone();
    AudioHandle::new(
        AudioConfig::default(),
        Box::new(move |_: &AudioConfig| -> Result<MockBackend, AudioError> {
            recorder.created.set(recorder.created.get() + 1);
            Ok(MockBackend {
                recorder: recorder.clone(),
            })
        }),
    )
}

/// Handle whose factory always reports a missing audio context.
pub fn unsupported_handle(attempts: &Rc<Cell<u32>>) -> AudioHandle<MockBackend> {
    let attempts = attempts.clone();
    AudioHandle::new(
        AudioConfig::default(),
        Box::new(move |_: &AudioConfig| -> Result<MockBackend, AudioError> {
            attempts.set(attempts.get() + 1);
            Err(AudioError::Unsupported)
        }),
    )
}
