// Integration tests for tone scheduling and the lazily created audio engine.

mod common;

use common::{mock_handle, unsupported_handle, Recorder};
use std::cell::Cell;
use std::rc::Rc;
use story_core::constants::{DEFAULT_ATTACK_SEC, DEFAULT_TONE_GAIN, GAIN_FLOOR};
use story_core::{schedule, AudioConfig, Cue, Tone, Waveform};

#[test]
fn second_tone_starts_exactly_delay_after_first() {
    let tones = [Tone::new(523.25, 0.1), Tone::new(659.25, 0.1).delay(0.1)];
    let plan = schedule(3.25, &tones, &AudioConfig::default());
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[1].start, plan[0].start + 0.1);
    assert_eq!(plan[0].start, 3.25);
    assert_eq!(plan[0].end, 3.25 + 0.1);
}

#[test]
fn schedule_is_a_pure_function_of_its_inputs() {
    let config = AudioConfig::default();
    for cue in Cue::ALL {
        let a = schedule(12.5, cue.tones(), &config);
        let b = schedule(12.5, cue.tones(), &config);
        assert_eq!(a, b);
        for (tone, planned) in cue.tones().iter().zip(&a) {
            assert_eq!(planned.start, 12.5 + tone.delay);
            assert_eq!(planned.end, 12.5 + tone.delay + tone.duration);
        }
    }
}

#[test]
fn tone_defaults_are_sine_at_default_gain() {
    let plan = schedule(0.0, &[Tone::new(440.0, 0.5)], &AudioConfig::default());
    let t = plan[0];
    assert_eq!(t.waveform, Waveform::Sine);
    assert_eq!(t.envelope.peak, DEFAULT_TONE_GAIN);
    assert_eq!(t.envelope.attack_end, DEFAULT_ATTACK_SEC);
}

#[test]
fn envelope_starts_and_ends_at_floor_and_never_exceeds_peak() {
    let config = AudioConfig::default();
    for cue in Cue::ALL {
        for t in schedule(1.0, cue.tones(), &config) {
            let env = t.envelope;
            assert!(env.floor > 0.0);
            assert_eq!(env.floor, GAIN_FLOOR);
            assert_eq!(env.gain_at(t.start), env.floor);
            assert_eq!(env.gain_at(t.end), env.floor);
            for i in 0..=400 {
                let at = t.start + (t.end - t.start) * i as f64 / 400.0;
                let g = env.gain_at(at);
                assert!(g > 0.0, "{:?} gain hit zero at {at}", cue);
                assert!(g <= env.peak + 1e-6, "{:?} overshoot {g} > {}", cue, env.peak);
                assert!(g >= env.floor - 1e-9);
            }
        }
    }
}

#[test]
fn envelope_reaches_peak_at_end_of_attack() {
    let plan = schedule(
        0.0,
        &[Tone::new(440.0, 0.3).gain(0.25)],
        &AudioConfig::default(),
    );
    let env = plan[0].envelope;
    assert!((env.gain_at(env.attack_end) - 0.25).abs() < 1e-6);
    // Rising during the attack, falling afterwards
    assert!(env.gain_at(0.005) < env.gain_at(0.015));
    assert!(env.gain_at(0.1) > env.gain_at(0.2));
}

#[test]
fn attack_is_clamped_inside_short_tones() {
    let plan = schedule(
        0.0,
        &[Tone::new(440.0, 0.01).attack(0.05)],
        &AudioConfig::default(),
    );
    assert_eq!(plan[0].envelope.attack_end, plan[0].end);
}

#[test]
fn engine_is_created_lazily_and_only_once() {
    common::init_logging();
    let recorder = Rc::new(Recorder::default());
    let audio = mock_handle(&recorder);
    assert_eq!(recorder.created.get(), 0);
    assert!(!audio.is_ready());

    audio.play(Cue::Hover);
    audio.play(Cue::Hover);
    audio.clone().play(Cue::Affirmative);
    assert_eq!(recorder.created.get(), 1);
    assert!(audio.is_ready());
    assert_eq!(recorder.played.borrow().len(), 1 + 1 + 3);
}

#[test]
fn tones_use_backend_clock_as_shared_reference() {
    let recorder = Rc::new(Recorder::default());
    recorder.now.set(8.0);
    let audio = mock_handle(&recorder);
    let committed = audio.play(Cue::Finale);
    let played = recorder.played.borrow();
    assert_eq!(&committed[..], &played[..]);
    for (tone, planned) in Cue::Finale.tones().iter().zip(played.iter()) {
        assert_eq!(planned.start, 8.0 + tone.delay);
    }
}

#[test]
fn overlapping_calls_are_independent() {
    let recorder = Rc::new(Recorder::default());
    let audio = mock_handle(&recorder);
    audio.play(Cue::Hover);
    recorder.now.set(0.05);
    audio.play(Cue::Hover);
    let played = recorder.played.borrow();
    assert_eq!(played.len(), 2);
    // Second blip starts before the first ends
    assert!(played[1].start < played[0].end);
}

#[test]
fn suspended_context_gets_resume_attempt_on_every_acquisition() {
    let recorder = Rc::new(Recorder::default());
    recorder.suspended.set(true);
    let audio = mock_handle(&recorder);
    audio.play(Cue::Unlock);
    audio.play(Cue::Hover);
    assert_eq!(recorder.resumes.get(), 2);
    // Still scheduled; may be silent until a gesture resumes the context
    assert_eq!(recorder.played.borrow().len(), 2);

    recorder.suspended.set(false);
    audio.play(Cue::Hover);
    assert_eq!(recorder.resumes.get(), 2);
}

#[test]
fn unsupported_environment_is_a_silent_no_op() {
    common::init_logging();
    let attempts = Rc::new(Cell::new(0));
    let audio = unsupported_handle(&attempts);
    for cue in Cue::ALL {
        assert!(audio.play(cue).is_empty());
    }
    assert!(audio.schedule_tones(&[Tone::new(440.0, 0.1)]).is_empty());
    assert!(!audio.is_ready());
    // Missing constructor is remembered after the first recorder
    assert_eq!(attempts.get(), 1);
}

#[test]
fn failed_tone_is_dropped_without_affecting_the_rest() {
    let recorder = Rc::new(Recorder::default());
    recorder.fail_plays.set(1);
    let audio = mock_handle(&recorder);
    let committed = audio.play(Cue::Affirmative);
    assert_eq!(committed.len(), 2);
    assert_eq!(committed[0].frequency, 659.25);
}

#[test]
fn close_releases_output_and_silences_later_cues() {
    let recorder = Rc::new(Recorder::default());
    let audio = mock_handle(&recorder);
    audio.play(Cue::Hover);
    audio.close();
    assert!(recorder.closed.get());
    assert!(audio.play(Cue::Finale).is_empty());
    assert_eq!(recorder.created.get(), 1);
}

#[test]
fn close_before_first_use_never_creates_output() {
    let recorder = Rc::new(Recorder::default());
    let audio = mock_handle(&recorder);
    audio.close();
    assert!(audio.play(Cue::Hover).is_empty());
    assert_eq!(recorder.created.get(), 0);
    assert!(!recorder.closed.get());
}
