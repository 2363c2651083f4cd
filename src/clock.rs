use super::constants::{FIRST_FRAME_STEP, MAX_FRAME_STEP, REFERENCE_FPS};
use instant::Instant;

/// Convert wall-clock seconds to simulation frames, clamped to
/// `[0, MAX_FRAME_STEP]`.
#[inline]
pub fn frames_from_secs(secs: f64) -> f32 {
    if !secs.is_finite() {
        return FIRST_FRAME_STEP;
    }
    ((secs * REFERENCE_FPS) as f32).clamp(0.0, MAX_FRAME_STEP)
}

/// Measures the step between successive display refreshes.
#[derive(Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames elapsed since the previous call; the first call yields one frame.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => frames_from_secs((now - prev).as_secs_f64()),
            None => FIRST_FRAME_STEP,
        };
        self.last = Some(now);
        dt
    }
}
