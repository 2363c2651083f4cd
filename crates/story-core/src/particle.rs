use crate::constants::AMBIENT_OPACITY_SCALE;
use glam::Vec2;
use rand::Rng;

/// Visual kind of an ambient particle; fixed between respawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Petal,
    Star,
    Heart,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Petal,
        ParticleKind::Star,
        ParticleKind::Heart,
    ];

    /// Uniform pick among the three kinds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Long-lived decorative particle in the ambient field.
///
/// Fields:
/// - `position`: canvas pixel coordinates
/// - `velocity`: pixels per reference frame (negative y rises)
/// - `life`: 1 at spawn, decays toward 0; the slot is recycled at or below 0
/// - `kind`, `size`, `rotation`: fixed at spawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub kind: ParticleKind,
    pub size: f32,
    pub rotation: f32,
}

impl Particle {
    /// Draw opacity, always derived from `life`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.max(0.0) * AMBIENT_OPACITY_SCALE
    }
}

/// Short-lived particle spawned from pointer or touch input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
}

impl Sparkle {
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.max(0.0)
    }
}
