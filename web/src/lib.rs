use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;

/// Options read from the URL hash, e.g. `#--seed=42&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct LaunchArgs {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl LaunchArgs {
    /// The hash's leading `#` stands in for the program name, `&` separates flags.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let hash = window().location().hash().unwrap_or_default();
    let (args, parse_error) = match LaunchArgs::from_hash(&hash) {
        Ok(args) => (args, None),
        Err(err) => (
            LaunchArgs {
                verbose: Default::default(),
                game: game::GameProps { seed: None },
            },
            Some(err),
        ),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring launch options {:?}: {}", hash, err);
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
