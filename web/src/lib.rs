use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod ports;
mod utils;

pub use ports::{WebAudio, WebClock};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("options: {:?}", args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_options_are_parsed() {
        let args = Args::try_parse_from("#-vv&--seed=42&--reveal-ms=1200&--mute".split(['#', '&'])).unwrap();

        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert_eq!(args.game.seed, Some(42));
        assert_eq!(args.game.reveal_ms, 1200);
        assert!(args.game.mute);
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();

        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.reveal_ms, numemo_core::SHOW_TIME_MS);
        assert!(!args.game.mute);
    }
}
