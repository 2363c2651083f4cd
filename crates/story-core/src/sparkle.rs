use crate::constants::*;
use crate::paint::{Fill, Painter, Viewport};
use crate::particle::Sparkle;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Spawn and physics parameters for the pointer sparkle trail.
///
/// `max_live` is `None` by default: the live set is bounded only by decay,
/// so a burst of input temporarily enlarges it. When set, the oldest
/// sparkles are evicted to keep the count at the cap.
#[derive(Clone, Debug)]
pub struct TrailConfig {
    pub batch: usize,
    pub jitter_px: f32,
    pub speed_span: f32,
    pub lift: f32,
    pub gravity: f32,
    pub life_step: f32,
    pub max_live: Option<usize>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            batch: SPARKLE_BATCH,
            jitter_px: SPARKLE_JITTER_PX,
            speed_span: SPARKLE_SPEED_SPAN,
            lift: SPARKLE_LIFT,
            gravity: SPARKLE_GRAVITY,
            life_step: SPARKLE_LIFE_STEP,
            max_live: None,
        }
    }
}

/// Live list of short-lived sparkles following pointer input.
pub struct SparkleTrail {
    sparkles: Vec<Sparkle>,
    viewport: Viewport,
    config: TrailConfig,
    rng: StdRng,
}

impl SparkleTrail {
    pub fn new(viewport: Viewport, config: TrailConfig, rng: StdRng) -> Self {
        Self {
            sparkles: Vec::new(),
            viewport,
            config,
            rng,
        }
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Emit one batch of sparkles around an input coordinate.
    pub fn spawn_at(&mut self, point: Vec2) {
        let cfg = &self.config;
        for _ in 0..cfg.batch {
            let rng = &mut self.rng;
            let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * cfg.jitter_px;
            let velocity = Vec2::new(
                (rng.gen::<f32>() - 0.5) * cfg.speed_span,
                (rng.gen::<f32>() - 0.5) * cfg.speed_span - cfg.lift,
            );
            self.sparkles.push(Sparkle {
                position: point + jitter,
                velocity,
                life: 1.0,
            });
        }
        if let Some(max) = cfg.max_live {
            if self.sparkles.len() > max {
                let excess = self.sparkles.len() - max;
                self.sparkles.drain(..excess);
            }
        }
    }

    /// Integrate every sparkle by `dt` reference frames and drop the expired.
    pub fn step(&mut self, dt: f32) {
        let gravity = self.config.gravity;
        let life_step = self.config.life_step;
        self.sparkles.retain_mut(|s| {
            s.position += s.velocity * dt;
            s.velocity.y += gravity * dt;
            s.life -= life_step * dt;
            s.life > 0.0
        });
    }

    /// Clear the surface and draw each sparkle as a glow with a bright core.
    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.viewport.size());
        let core = Vec2::splat(SPARKLE_CORE_PX);
        for s in &self.sparkles {
            let alpha = s.opacity();
            painter.fill_glow(s.position, SPARKLE_GLOW_RADIUS, SPARKLE_RGB, alpha);
            painter.fill_rect(s.position - core * 0.5, core, Fill::new(SPARKLE_CORE_RGB, alpha));
        }
    }
}
