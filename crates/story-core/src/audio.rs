use crate::constants::{DEFAULT_ATTACK_SEC, DEFAULT_TONE_GAIN, GAIN_FLOOR, MASTER_GAIN};
use crate::cues::Cue;
use crate::error::AudioError;
use std::cell::RefCell;
use std::rc::Rc;

/// Oscillator shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// Immutable description of one synthesized note.
///
/// Fields:
/// - `frequency`: pitch in Hertz
/// - `duration`: seconds from start to silence
/// - `delay`: seconds after the scheduling call's reference time
/// - `waveform`: oscillator shape
/// - `gain`: envelope peak; `None` uses `AudioConfig::default_gain`
/// - `attack`: seconds to ramp from the floor to the peak
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: f64,
    pub delay: f64,
    pub waveform: Waveform,
    pub gain: Option<f32>,
    pub attack: f64,
}

impl Tone {
    pub const fn new(frequency: f32, duration: f64) -> Self {
        Self {
            frequency,
            duration,
            delay: 0.0,
            waveform: Waveform::Sine,
            gain: None,
            attack: DEFAULT_ATTACK_SEC,
        }
    }

    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    pub const fn gain(mut self, gain: f32) -> Self {
        self.gain = Some(gain);
        self
    }

    pub const fn attack(mut self, attack: f64) -> Self {
        self.attack = attack;
        self
    }
}

/// Output-level parameters for the engine.
#[derive(Clone, Debug)]
pub struct AudioConfig {
    pub master_gain: f32,
    pub default_gain: f32,
    pub gain_floor: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_gain: MASTER_GAIN,
            default_gain: DEFAULT_TONE_GAIN,
            gain_floor: GAIN_FLOOR,
        }
    }
}

/// Gain-over-time of one tone: exponential rise from `floor` to `peak`
/// between `start` and `attack_end`, then exponential fall back to `floor`
/// at `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub floor: f32,
    pub peak: f32,
    pub start: f64,
    pub attack_end: f64,
    pub end: f64,
}

impl Envelope {
    /// Value of the gain parameter at absolute time `t`, following the
    /// Web Audio exponential ramp law `v0 * (v1 / v0) ^ progress`.
    pub fn gain_at(&self, t: f64) -> f32 {
        if t <= self.start || t >= self.end {
            self.floor
        } else if t < self.attack_end {
            let progress = (t - self.start) / (self.attack_end - self.start);
            exp_ramp(self.floor, self.peak, progress)
        } else {
            let progress = (t - self.attack_end) / (self.end - self.attack_end);
            exp_ramp(self.peak, self.floor, progress)
        }
    }
}

#[inline]
fn exp_ramp(from: f32, to: f32, progress: f64) -> f32 {
    let ratio = (to / from) as f64;
    (from as f64 * ratio.powf(progress.clamp(0.0, 1.0))) as f32
}

/// A tone committed to absolute output times. Not cancelable; it ends by
/// itself at `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledTone {
    pub frequency: f32,
    pub waveform: Waveform,
    pub start: f64,
    pub end: f64,
    pub envelope: Envelope,
}

/// Resolve tone descriptors against one shared reference time.
///
/// Pure: the same `now`, tones and config always give the same schedule.
pub fn schedule(now: f64, tones: &[Tone], config: &AudioConfig) -> Vec<ScheduledTone> {
    tones
        .iter()
        .map(|tone| {
            debug_assert!(tone.frequency.is_finite(), "non-finite tone frequency");
            let start = now + tone.delay;
            let end = start + tone.duration;
            let floor = config.gain_floor;
            let peak = tone.gain.unwrap_or(config.default_gain).max(floor);
            ScheduledTone {
                frequency: tone.frequency,
                waveform: tone.waveform,
                start,
                end,
                envelope: Envelope {
                    floor,
                    peak,
                    start,
                    attack_end: (start + tone.attack).min(end),
                    end,
                },
            }
        })
        .collect()
}

/// Output graph the engine drives: one context plus one master gain.
///
/// `play` wires oscillator -> envelope gain -> master for a single tone and
/// schedules it; it must not block.
pub trait AudioBackend {
    /// Context clock in seconds.
    fn current_time(&self) -> f64;
    fn is_suspended(&self) -> bool;
    /// Best-effort resume; the outcome is not reported.
    fn resume(&self);
    fn play(&self, tone: &ScheduledTone) -> Result<(), AudioError>;
    /// Release the context and its nodes.
    fn close(&mut self);
}

/// Builds the backend on first use. Returns `AudioError::Unsupported` when
/// the environment has no audio output at all.
pub type BackendFactory<B> = Box<dyn FnMut(&AudioConfig) -> Result<B, AudioError>>;

enum Slot<B> {
    Idle,
    Ready(B),
    Unsupported,
    Closed,
}

/// Lazily constructed audio output shared by every cue.
pub struct AudioEngine<B: AudioBackend> {
    slot: Slot<B>,
    factory: BackendFactory<B>,
    config: AudioConfig,
}

impl<B: AudioBackend> AudioEngine<B> {
    pub fn new(config: AudioConfig, factory: BackendFactory<B>) -> Self {
        Self {
            slot: Slot::Idle,
            factory,
            config,
        }
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.slot, Slot::Ready(_))
    }

    /// Return the backend, creating it on the first call.
    ///
    /// `None` means audio is unavailable (unsupported environment, or the
    /// engine was closed). A suspended backend gets a resume attempt on every
    /// acquisition; it may stay silent until a later user gesture.
    pub fn ensure(&mut self) -> Option<&B> {
        if let Slot::Idle = self.slot {
            match (self.factory)(&self.config) {
                Ok(backend) => {
                    log::info!("[audio] output created");
                    self.slot = Slot::Ready(backend);
                }
                Err(AudioError::Unsupported) => {
                    log::warn!("[audio] unavailable; cues will be silent");
                    self.slot = Slot::Unsupported;
                }
                Err(e) => {
                    log::warn!("[audio] init failed, will retry: {}", e);
                }
            }
        }
        match &self.slot {
            Slot::Ready(backend) => {
                if backend.is_suspended() {
                    backend.resume();
                }
                Some(backend)
            }
            _ => None,
        }
    }

    /// Schedule `tones` against one shared reference time and return what was
    /// committed. Empty when audio is unavailable.
    pub fn schedule_tones(&mut self, tones: &[Tone]) -> Vec<ScheduledTone> {
        let config = self.config.clone();
        let Some(backend) = self.ensure() else {
            return Vec::new();
        };
        let plan = schedule(backend.current_time(), tones, &config);
        plan.into_iter()
            .filter(|tone| match backend.play(tone) {
                Ok(()) => true,
                Err(e) => {
                    log::debug!("[audio] dropped {:.2} Hz tone: {}", tone.frequency, e);
                    false
                }
            })
            .collect()
    }

    /// Release the output. Later calls stay silent.
    pub fn close(&mut self) {
        if let Slot::Ready(backend) = &mut self.slot {
            backend.close();
            log::info!("[audio] output closed");
        }
        self.slot = Slot::Closed;
    }
}

/// Reference-counted handle to one `AudioEngine`; clones share the output.
pub struct AudioHandle<B: AudioBackend> {
    engine: Rc<RefCell<AudioEngine<B>>>,
}

impl<B: AudioBackend> Clone for AudioHandle<B> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<B: AudioBackend> AudioHandle<B> {
    pub fn new(config: AudioConfig, factory: BackendFactory<B>) -> Self {
        Self {
            engine: Rc::new(RefCell::new(AudioEngine::new(config, factory))),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.engine.borrow().is_ready()
    }

    pub fn schedule_tones(&self, tones: &[Tone]) -> Vec<ScheduledTone> {
        self.engine.borrow_mut().schedule_tones(tones)
    }

    /// Fire a named cue. Never blocks and never fails.
    pub fn play(&self, cue: Cue) -> Vec<ScheduledTone> {
        self.schedule_tones(cue.tones())
    }

    pub fn close(&self) {
        self.engine.borrow_mut().close();
    }
}
