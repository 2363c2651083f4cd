use crate::audio::WebAudio;
use crate::constants::UNLOCK_EVENTS;
use crate::events::{self, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use story_core::{AudioConfig, AudioHandle, Cue};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// UI sound cues for the view layer.
///
/// The audio context is created on the first cue, not here, so constructing
/// this before any user gesture is safe. Every method is a silent no-op when
/// the browser has no Web Audio support.
#[wasm_bindgen]
pub struct UiSounds {
    audio: AudioHandle<WebAudio>,
    unlock_listeners: Rc<RefCell<Vec<EventListener>>>,
}

#[wasm_bindgen]
impl UiSounds {
    #[wasm_bindgen(constructor)]
    pub fn new() -> UiSounds {
        UiSounds {
            audio: AudioHandle::new(AudioConfig::default(), Box::new(WebAudio::create)),
            unlock_listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn unlock(&self) {
        self.audio.play(Cue::Unlock);
    }

    pub fn hover(&self) {
        self.audio.play(Cue::Hover);
    }

    pub fn yes(&self) {
        self.audio.play(Cue::Affirmative);
    }

    pub fn no(&self) {
        self.audio.play(Cue::Negative);
    }

    pub fn finale(&self) {
        self.audio.play(Cue::Finale);
    }

    /// Play a cue by name; returns false for unknown names.
    pub fn play(&self, name: &str) -> bool {
        match Cue::from_name(name) {
            Some(cue) => {
                self.audio.play(cue);
                true
            }
            None => {
                log::debug!("[audio] unknown cue {:?}", name);
                false
            }
        }
    }

    /// Play the unlock cue on the first pointer, key or touch anywhere on the
    /// page, then stop listening.
    #[wasm_bindgen(js_name = armUnlock)]
    pub fn arm_unlock(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let mut armed = self.unlock_listeners.borrow_mut();
        if !armed.is_empty() {
            return;
        }
        for kind in UNLOCK_EVENTS {
            let audio = self.audio.clone();
            let listeners = self.unlock_listeners.clone();
            let listener = events::listen(&window, kind, move |_| {
                let fired = std::mem::take(&mut *listeners.borrow_mut());
                if fired.is_empty() {
                    return;
                }
                audio.play(Cue::Unlock);
                // This handler is one of `fired`; release them once it returns.
                spawn_local(async move { drop(fired) });
            });
            match listener {
                Ok(l) => armed.push(l),
                Err(e) => log::debug!("[audio] unlock listener: {:#}", e),
            }
        }
    }

    /// Release the audio context. Later cues are silent.
    pub fn close(&self) {
        self.unlock_listeners.borrow_mut().clear();
        self.audio.close();
    }
}

impl Default for UiSounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UiSounds {
    fn drop(&mut self) {
        if let Ok(mut armed) = self.unlock_listeners.try_borrow_mut() {
            armed.clear();
        }
    }
}
