/// Front-end timing and DOM wiring constants.
///
/// Simulation tuning lives in `story_core::constants`; this module only
/// covers how the browser drives it.
// Frame timing: the simulation advances in 60 Hz reference frames
pub const REFERENCE_FPS: f64 = 60.0;
pub const MAX_FRAME_STEP: f32 = 4.0; // cap after a stalled or backgrounded tab
pub const FIRST_FRAME_STEP: f32 = 1.0;

// Event names
pub const RESIZE_EVENT: &str = "resize";
pub const MOUSE_MOVE_EVENT: &str = "mousemove";
pub const TOUCH_MOVE_EVENT: &str = "touchmove";

// Any of these counts as the first user gesture for audio unlock
pub const UNLOCK_EVENTS: [&str; 3] = ["pointerdown", "keydown", "touchstart"];
