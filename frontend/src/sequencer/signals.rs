use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, EventTarget};
use yew::Callback;

use super::machine::Signal;

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

/// Window and document listeners feeding the sequencer. Every listener is
/// removed when this is dropped.
pub struct BrowserSignals {
    listeners: Vec<Listener>,
}

impl BrowserSignals {
    pub fn attach(on_signal: Callback<Signal>) -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        let mut signals = Self {
            listeners: Vec::new(),
        };

        {
            let on_signal = on_signal.clone();
            let document = document.clone();
            signals.listen(document.clone().into(), "visibilitychange", move || {
                on_signal.emit(Signal::VisibilityChanged {
                    hidden: document.hidden(),
                });
            });
        }

        let window_target: EventTarget = window.into();
        for (event, signal) in [
            ("blur", Signal::WindowBlur),
            ("focus", Signal::WindowFocus),
            ("pointerdown", Signal::UserGesture),
            ("keydown", Signal::UserGesture),
        ] {
            let on_signal = on_signal.clone();
            signals.listen(window_target.clone(), event, move || on_signal.emit(signal));
        }

        log::debug!("Attached {} browser listeners", signals.listeners.len());
        Some(signals)
    }

    fn listen(&mut self, target: EventTarget, event: &'static str, handler: impl FnMut() + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => self.listeners.push(Listener {
                target,
                event,
                closure,
            }),
            Err(e) => log::warn!("Could not listen for {}: {:?}", event, e),
        }
    }
}

impl Drop for BrowserSignals {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(e) = listener
                .target
                .remove_event_listener_with_callback(listener.event, listener.closure.as_ref().unchecked_ref())
            {
                log::debug!("Could not remove {} listener: {:?}", listener.event, e);
            }
        }
    }
}
