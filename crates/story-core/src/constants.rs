use crate::paint::Rgb;

// Tuning constants for the particle layers and the cue synthesizer.
// Per-frame quantities are expressed per reference frame (one 60 Hz refresh).

// Ambient field pool sizing
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // viewports narrower than this get the small pool
pub const AMBIENT_COUNT_MOBILE: usize = 15;
pub const AMBIENT_COUNT_DESKTOP: usize = 30;

// Ambient particle motion
pub const AMBIENT_DRIFT_X_MAX: f32 = 0.25; // |vx| bound
pub const AMBIENT_RISE_MIN: f32 = 0.1;
pub const AMBIENT_RISE_SPAN: f32 = 0.3;
pub const AMBIENT_LIFE_DECAY: f32 = 0.002;
pub const AMBIENT_EXIT_MARGIN_PX: f32 = 20.0; // respawn once this far above the top edge

// Ambient particle look
pub const AMBIENT_SIZE_MIN: f32 = 2.0;
pub const AMBIENT_SIZE_SPAN: f32 = 3.0;
pub const AMBIENT_OPACITY_SCALE: f32 = 0.7;
pub const TRAIL_FADE_ALPHA: f32 = 0.1;
pub const BACKGROUND_RGB: Rgb = Rgb(11, 1, 10);
pub const PETAL_RGB: Rgb = Rgb(0xf4, 0xd6, 0xd6);
pub const STAR_RGB: Rgb = Rgb(0xff, 0xd7, 0x00);
pub const HEART_RGB: Rgb = Rgb(0xd4, 0xa5, 0x74);

// Shape proportions
pub const PETAL_ASPECT: f32 = 1.5; // major radius / minor radius
pub const STAR_POINTS: usize = 5;
pub const STAR_INNER_RATIO: f32 = 0.4;

// Sparkle trail
pub const SPARKLE_BATCH: usize = 2; // sparkles per input sample
pub const SPARKLE_JITTER_PX: f32 = 10.0; // full width of the spawn jitter box
pub const SPARKLE_SPEED_SPAN: f32 = 2.0; // full width of the velocity cone per axis
pub const SPARKLE_LIFT: f32 = 1.0; // upward bias on spawn
pub const SPARKLE_GRAVITY: f32 = 0.1;
pub const SPARKLE_LIFE_STEP: f32 = 0.02;
pub const SPARKLE_GLOW_RADIUS: f32 = 3.0;
pub const SPARKLE_CORE_PX: f32 = 2.0;
pub const SPARKLE_RGB: Rgb = Rgb(0xff, 0xd7, 0x00);
pub const SPARKLE_CORE_RGB: Rgb = Rgb(0xff, 0xff, 0xff);

// Audio
pub const MASTER_GAIN: f32 = 0.35;
pub const DEFAULT_TONE_GAIN: f32 = 0.2;
pub const GAIN_FLOOR: f32 = 0.0001; // exponential ramps cannot reach 0
pub const DEFAULT_ATTACK_SEC: f64 = 0.02;
pub const UNLOCK_ATTACK_SEC: f64 = 0.008;
