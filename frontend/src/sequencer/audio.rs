use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::NodeRef;

/// The background track. Playback is best effort: a rejected `play()` leaves
/// the track paused and is never reported as an error.
pub trait AudioSink {
    fn play(&mut self);
    fn pause(&mut self);
    fn set_muted(&mut self, muted: bool);
    fn is_paused(&self) -> bool;
}

/// The page's `<audio>` element, looked up through its node ref on every call
/// since it only exists once the component has rendered.
pub struct BrowserAudio {
    node: NodeRef,
    volume: f64,
}

impl BrowserAudio {
    pub fn new(node: NodeRef, volume: f64) -> Self {
        Self { node, volume }
    }

    fn element(&self) -> Option<HtmlAudioElement> {
        self.node.cast::<HtmlAudioElement>()
    }
}

impl AudioSink for BrowserAudio {
    fn play(&mut self) {
        let Some(audio) = self.element() else {
            log::debug!("No audio element to play");
            return;
        };
        audio.set_loop(true);
        audio.set_volume(self.volume);

        match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("Audio playback rejected: {:?}", e);
                }
            }),
            Err(e) => log::debug!("Audio playback failed to start: {:?}", e),
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = self.element() {
            if let Err(e) = audio.pause() {
                log::debug!("Audio pause failed: {:?}", e);
            }
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if let Some(audio) = self.element() {
            audio.set_muted(muted);
        }
    }

    fn is_paused(&self) -> bool {
        self.element().map_or(true, |audio| audio.paused())
    }
}
