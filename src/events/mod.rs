pub mod pointer;

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it removes the listener and frees the
/// closure.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<EventListener> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("add {} listener: {:?}", kind, e))?;
    Ok(EventListener {
        target: target.clone(),
        kind,
        closure,
    })
}

/// Like `listen`, registered as passive so scrolling is never blocked.
pub fn listen_passive(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<EventListener> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow!("add passive {} listener: {:?}", kind, e))?;
    Ok(EventListener {
        target: target.clone(),
        kind,
        closure,
    })
}
