use story_core::{AudioBackend, AudioConfig, AudioError, ScheduledTone, Waveform};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Web Audio output: one `AudioContext` and one master `GainNode` feeding
/// its destination. Every tone gets its own oscillator and envelope gain.
pub struct WebAudio {
    ctx: web::AudioContext,
    master: web::GainNode,
    closed: bool,
}

fn create_gain(
    ctx: &web::AudioContext,
    value: f32,
    label: &'static str,
) -> Result<web::GainNode, AudioError> {
    let g = web::GainNode::new(ctx).map_err(|e| AudioError::node(label, format!("{:?}", e)))?;
    g.gain().set_value(value);
    Ok(g)
}

/// `new AudioContext()`, falling back to the prefixed `webkitAudioContext`.
fn construct_context() -> Result<web::AudioContext, AudioError> {
    if let Ok(ctx) = web::AudioContext::new() {
        return Ok(ctx);
    }
    let window = web::window().ok_or(AudioError::Unsupported)?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("webkitAudioContext"))
        .ok()
        .and_then(|c| c.dyn_into::<js_sys::Function>().ok())
        .ok_or(AudioError::Unsupported)?;
    js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
        .map(|ctx| ctx.unchecked_into::<web::AudioContext>())
        .map_err(|_| AudioError::Unsupported)
}

#[inline]
fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Sawtooth => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

/// Await a promise in the background and log, never surface, a rejection.
fn settle(promise: js_sys::Promise, what: &'static str) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("[audio] {} rejected: {:?}", what, e);
        }
    });
}

fn master_bus(ctx: &web::AudioContext, value: f32) -> Result<web::GainNode, AudioError> {
    let master = create_gain(ctx, value, "master GainNode")?;
    master
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| AudioError::node("master routing", format!("{:?}", e)))?;
    Ok(master)
}

fn close_context(ctx: &web::AudioContext) {
    match ctx.close() {
        Ok(p) => settle(p, "close"),
        Err(e) => log::debug!("[audio] close threw: {:?}", e),
    }
}

/// A context whose setup failed is closed before the error is returned.
/// Otherwise every retry would leave another running context behind.
fn close_on_error<T>(
    ctx: &web::AudioContext,
    built: Result<T, AudioError>,
) -> Result<T, AudioError> {
    if built.is_err() {
        close_context(ctx);
    }
    built
}

impl WebAudio {
    pub fn create(config: &AudioConfig) -> Result<Self, AudioError> {
        let ctx = construct_context()?;
        let master = close_on_error(&ctx, master_bus(&ctx, config.master_gain))?;
        Ok(Self {
            ctx,
            master,
            closed: false,
        })
    }
}

impl AudioBackend for WebAudio {
    fn current_time(&self) -> f64 {
        self.ctx.current_time()
    }

    fn is_suspended(&self) -> bool {
        self.ctx.state() == web::AudioContextState::Suspended
    }

    fn resume(&self) {
        match self.ctx.resume() {
            Ok(p) => settle(p, "resume"),
            Err(e) => log::debug!("[audio] resume threw: {:?}", e),
        }
    }

    fn play(&self, tone: &ScheduledTone) -> Result<(), AudioError> {
        if self.closed {
            return Err(AudioError::Closed);
        }
        let js = |node: &'static str| move |e: JsValue| AudioError::node(node, format!("{:?}", e));
        let env = &tone.envelope;

        let osc = web::OscillatorNode::new(&self.ctx).map_err(js("OscillatorNode"))?;
        osc.set_type(oscillator_type(tone.waveform));
        osc.frequency()
            .set_value_at_time(tone.frequency, tone.start)
            .map_err(js("frequency"))?;

        let gain = web::GainNode::new(&self.ctx).map_err(js("GainNode"))?;
        let param = gain.gain();
        param
            .set_value_at_time(env.floor, env.start)
            .map_err(js("envelope"))?;
        param
            .exponential_ramp_to_value_at_time(env.peak, env.attack_end)
            .map_err(js("envelope"))?;
        param
            .exponential_ramp_to_value_at_time(env.floor, env.end)
            .map_err(js("envelope"))?;

        osc.connect_with_audio_node(&gain).map_err(js("routing"))?;
        gain.connect_with_audio_node(&self.master).map_err(js("routing"))?;
        osc.start_with_when(tone.start).map_err(js("start"))?;
        osc.stop_with_when(tone.end).map_err(js("stop"))?;
        Ok(())
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        _ = self.master.disconnect();
        close_context(&self.ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep_ms(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            if let Some(w) = web::window() {
                _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        _ = JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn failed_setup_closes_the_context() {
        let ctx = web::AudioContext::new().unwrap();
        let built: Result<(), AudioError> =
            close_on_error(&ctx, Err(AudioError::node("master GainNode", "refused")));
        assert!(matches!(built, Err(AudioError::Node { .. })));
        sleep_ms(50).await;
        assert_eq!(ctx.state(), web::AudioContextState::Closed);
    }

    #[wasm_bindgen_test]
    async fn successful_setup_keeps_the_context() {
        let ctx = web::AudioContext::new().unwrap();
        let built = close_on_error(&ctx, Ok(7));
        assert_eq!(built.unwrap(), 7);
        sleep_ms(50).await;
        assert_ne!(ctx.state(), web::AudioContextState::Closed);
        close_context(&ctx);
    }

    #[wasm_bindgen_test]
    fn create_and_close() {
        let mut audio = WebAudio::create(&AudioConfig::default()).unwrap();
        audio.close();
        audio.close();
        let tones = [story_core::Tone::new(440.0, 0.1)];
        let scheduled = story_core::schedule(0.0, &tones, &AudioConfig::default());
        assert!(matches!(audio.play(&scheduled[0]), Err(AudioError::Closed)));
    }
}
