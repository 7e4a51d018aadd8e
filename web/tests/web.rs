#![cfg(target_arch = "wasm32")]

use numemo_core::{AudioSink, Clock, SoundCue};
use numemo_web::{WebAudio, WebClock};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn clock_never_goes_backwards() {
    let clock = WebClock::new();
    let first = clock.now_ms();
    let second = clock.now_ms();

    assert!(second >= first);
}

#[wasm_bindgen_test]
fn muted_audio_accepts_every_cue() {
    let mut audio = WebAudio::new(true);

    for cue in SoundCue::ALL {
        assert!(audio.play(cue).is_ok());
    }
}
