use crate::constants::*;
use crate::paint::{Fill, Painter, Viewport};
use crate::particle::{Particle, ParticleKind};
use crate::shapes;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::PI;

/// Sizing and decay parameters for the ambient field.
///
/// - `mobile_breakpoint_px`: viewports narrower than this use `mobile_count`
/// - `life_decay`: life lost per reference frame
/// - `exit_margin_px`: distance above the top edge at which a particle is recycled
/// - `fade_alpha`: opacity of the background overlay painted each frame
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub mobile_breakpoint_px: f32,
    pub mobile_count: usize,
    pub desktop_count: usize,
    pub life_decay: f32,
    pub exit_margin_px: f32,
    pub fade_alpha: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            mobile_count: AMBIENT_COUNT_MOBILE,
            desktop_count: AMBIENT_COUNT_DESKTOP,
            life_decay: AMBIENT_LIFE_DECAY,
            exit_margin_px: AMBIENT_EXIT_MARGIN_PX,
            fade_alpha: TRAIL_FADE_ALPHA,
        }
    }
}

impl FieldConfig {
    /// Pool size for a viewport; evaluated once at activation.
    pub fn pool_size(&self, viewport: Viewport) -> usize {
        if viewport.width < self.mobile_breakpoint_px {
            self.mobile_count
        } else {
            self.desktop_count
        }
    }
}

/// Fixed-size pool of slowly rising decorative particles.
///
/// The pool is allocated once in `new` and never grows or shrinks. Expired
/// particles are overwritten in their own slot by a fresh spawn, so the
/// field runs indefinitely without allocating.
///
/// Typical usage per display refresh:
/// - `step(dt)` with `dt` in reference frames
/// - `render(&mut painter)`
pub struct AmbientField {
    particles: Box<[Particle]>,
    viewport: Viewport,
    config: FieldConfig,
    rng: StdRng,
    respawns: u64,
}

impl AmbientField {
    pub fn new(viewport: Viewport, config: FieldConfig, mut rng: StdRng) -> Self {
        let count = config.pool_size(viewport);
        let particles = (0..count)
            .map(|_| spawn_particle(&mut rng, viewport))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        log::debug!(
            "[ambient] pool of {} for {:.0}x{:.0}",
            count,
            viewport.width,
            viewport.height
        );
        Self {
            particles,
            viewport,
            config,
            rng,
            respawns: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of slot recycles since construction.
    pub fn respawns(&self) -> u64 {
        self.respawns
    }

    /// Adopt new surface dimensions. Live particles keep their state; only
    /// later spawns use the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance every particle by `dt` reference frames, recycling expired slots.
    pub fn step(&mut self, dt: f32) {
        let top = -self.config.exit_margin_px;
        for slot in self.particles.iter_mut() {
            slot.position += slot.velocity * dt;
            slot.life -= self.config.life_decay * dt;
            if slot.life <= 0.0 || slot.position.y < top {
                *slot = spawn_particle(&mut self.rng, self.viewport);
                self.respawns += 1;
            }
        }
    }

    /// Paint the fading overlay, then every particle at its derived opacity.
    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.fill_rect(
            Vec2::ZERO,
            self.viewport.size(),
            Fill::new(BACKGROUND_RGB, self.config.fade_alpha),
        );
        for p in self.particles.iter() {
            let alpha = p.opacity();
            match p.kind {
                ParticleKind::Petal => painter.fill_ellipse(
                    p.position,
                    shapes::petal_radii(p.size),
                    p.rotation,
                    Fill::new(PETAL_RGB, alpha),
                ),
                ParticleKind::Star => painter.fill_polygon(
                    &shapes::star_points(p.position, p.size),
                    Fill::new(STAR_RGB, alpha),
                ),
                ParticleKind::Heart => {
                    let path = shapes::heart(p.position, p.size);
                    painter.fill_bezier(path.start, &path.segments, Fill::new(HEART_RGB, alpha));
                }
            }
        }
    }
}

/// Fresh particle anywhere inside the viewport, at full life.
pub fn spawn_particle<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Particle {
    let kind = ParticleKind::random(rng);
    let position = Vec2::new(
        rng.gen::<f32>() * viewport.width,
        rng.gen::<f32>() * viewport.height,
    );
    let velocity = Vec2::new(
        (rng.gen::<f32>() - 0.5) * 2.0 * AMBIENT_DRIFT_X_MAX,
        -(rng.gen::<f32>() * AMBIENT_RISE_SPAN + AMBIENT_RISE_MIN),
    );
    Particle {
        position,
        velocity,
        life: 1.0,
        kind,
        size: rng.gen::<f32>() * AMBIENT_SIZE_SPAN + AMBIENT_SIZE_MIN,
        rotation: rng.gen::<f32>() * PI,
    }
}
