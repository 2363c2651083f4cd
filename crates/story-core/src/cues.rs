use crate::audio::Tone;
use crate::audio::Waveform::{Sawtooth, Sine, Square, Triangle};
use crate::constants::UNLOCK_ATTACK_SEC;

/// Named UI sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Pointer entered an interactive element.
    Hover,
    /// Affirmative choice.
    Affirmative,
    /// Negative choice.
    Negative,
    /// Entering the finale screen.
    Finale,
    /// Near-silent blip that satisfies autoplay gesture policies.
    Unlock,
}

const HOVER: [Tone; 1] = [Tone::new(720.0, 0.12).waveform(Triangle).gain(0.16)];

// C5 E5 G5
const AFFIRMATIVE: [Tone; 3] = [
    Tone::new(523.25, 0.14).waveform(Triangle).gain(0.2),
    Tone::new(659.25, 0.16).delay(0.1).waveform(Triangle).gain(0.2),
    Tone::new(783.99, 0.24).delay(0.2).waveform(Sine).gain(0.24),
];

// F4 C4
const NEGATIVE: [Tone; 2] = [
    Tone::new(349.23, 0.14).waveform(Square).gain(0.18),
    Tone::new(261.63, 0.2).delay(0.1).waveform(Sawtooth).gain(0.18),
];

// G4 C5 E5 G5
const FINALE: [Tone; 4] = [
    Tone::new(392.0, 0.2).waveform(Triangle).gain(0.2),
    Tone::new(523.25, 0.22).delay(0.12).waveform(Triangle).gain(0.22),
    Tone::new(659.25, 0.24).delay(0.24).waveform(Triangle).gain(0.24),
    Tone::new(783.99, 0.36).delay(0.38).waveform(Sine).gain(0.28),
];

const UNLOCK: [Tone; 1] = [Tone::new(620.0, 0.05)
    .waveform(Triangle)
    .gain(0.02)
    .attack(UNLOCK_ATTACK_SEC)];

impl Cue {
    pub const ALL: [Cue; 5] = [
        Cue::Hover,
        Cue::Affirmative,
        Cue::Negative,
        Cue::Finale,
        Cue::Unlock,
    ];

    /// Ordered tone list submitted verbatim to the engine.
    pub fn tones(self) -> &'static [Tone] {
        match self {
            Cue::Hover => &HOVER,
            Cue::Affirmative => &AFFIRMATIVE,
            Cue::Negative => &NEGATIVE,
            Cue::Finale => &FINALE,
            Cue::Unlock => &UNLOCK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Cue::Hover => "hover",
            Cue::Affirmative => "yes",
            Cue::Negative => "no",
            Cue::Finale => "finale",
            Cue::Unlock => "unlock",
        }
    }

    /// Look up a cue by the name the view layer uses.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hover" => Some(Cue::Hover),
            "yes" | "affirmative" => Some(Cue::Affirmative),
            "no" | "negative" => Some(Cue::Negative),
            "finale" => Some(Cue::Finale),
            "unlock" => Some(Cue::Unlock),
            _ => None,
        }
    }
}
