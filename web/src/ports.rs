use gloo::timers::callback::Timeout;
use numemo_core::{AudioSink, Clock, Millis, RoundId, Scheduler, SoundCue};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use web_time::Instant;
use yew::html::Scope;

use crate::game::{GameView, Msg};

const SOUND_DIR: &str = "sounds/";

/// Monotonic milliseconds since the clock was created.
#[derive(Copy, Clone, Debug)]
pub struct WebClock {
    origin: Instant,
}

impl WebClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WebClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WebClock {
    fn now_ms(&self) -> Millis {
        self.origin
            .elapsed()
            .as_millis()
            .try_into()
            .unwrap_or(Millis::MAX)
    }
}

/// Runs the reveal timeout on the browser event loop and reports back to the component.
pub(crate) struct TimeoutScheduler {
    link: Scope<GameView>,
}

impl TimeoutScheduler {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self { link }
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, round: RoundId, delay_ms: Millis) -> Timeout {
        let link = self.link.clone();
        let millis = u32::try_from(delay_ms).unwrap_or(u32::MAX);
        Timeout::new(millis, move || link.send_message(Msg::RevealElapsed(round)))
    }

    fn cancel(&mut self, handle: Timeout) {
        // a dropped Timeout is cleared
        drop(handle);
    }
}

/// Plays cues through `<audio>` elements, created on first use and rewound on every play.
#[derive(Debug)]
pub struct WebAudio {
    muted: bool,
    clips: Vec<(SoundCue, HtmlAudioElement)>,
}

impl WebAudio {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            clips: Vec::with_capacity(SoundCue::ALL.len()),
        }
    }

    fn clip(&mut self, cue: SoundCue) -> Result<&HtmlAudioElement, JsValue> {
        if let Some(index) = self.clips.iter().position(|(clip_cue, _)| *clip_cue == cue) {
            return Ok(&self.clips[index].1);
        }

        let src = format!("{}{}", SOUND_DIR, cue.file_name());
        log::debug!("loading sound: {}", src);
        let audio = HtmlAudioElement::new_with_src(&src)?;
        self.clips.push((cue, audio));
        Ok(&self.clips[self.clips.len() - 1].1)
    }
}

impl AudioSink for WebAudio {
    type Error = JsValue;

    fn play(&mut self, cue: SoundCue) -> Result<(), JsValue> {
        if self.muted {
            log::trace!("muted: {:?}", cue);
            return Ok(());
        }

        let clip = self.clip(cue)?;
        clip.set_current_time(0.0);
        let promise = clip.play()?;

        // autoplay policies reject asynchronously
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::error!("Error playing sound {:?}: {:?}", cue, err);
            }
        });
        Ok(())
    }
}
