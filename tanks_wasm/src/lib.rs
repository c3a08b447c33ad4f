use interface::{load_config, setup_canvas, setup_window_listeners};
use logging::setup_logging;
use scheduler::IntervalScheduler;
use std::{cell::RefCell, rc::Rc};
use surface::CanvasSurface;
use tanks_core::{game::Game, setup::build_game};
use tracing::{error, info};
use utils::Canvas;
use wasm_bindgen::prelude::*;

pub mod interface;
mod logging;
mod scheduler;
mod surface;
mod utils;

thread_local! {
    /// Global State for the Game
    ///
    /// Do not panic while using this data, otherwise you may
    /// encounter a permanent locking of the Data
    pub static GAME: RefCell<Option<Game>> = RefCell::new(None);
}

/// Initialization process for the window
///
/// sets up logging and the canvas, builds the match and starts ticking it
#[wasm_bindgen(start)]
pub fn start() {
    setup_logging();

    let config = load_config();
    let canvas_element = setup_canvas(&config.playfield);
    let surface = Rc::new(RefCell::new(CanvasSurface::new(
        canvas_element.get_2d_context(),
    )));

    match build_game(surface, Box::new(IntervalScheduler::new(tick)), config) {
        Ok((game, _)) => {
            info!("game started");
            GAME.with(|state| *state.borrow_mut() = Some(game));
        }
        Err(err) => error!(%err, "failed to set up the game"),
    }

    setup_window_listeners();
}

fn tick() {
    GAME.with(|state| {
        if let Some(game) = state.borrow_mut().as_mut() {
            game.tick();
        }
    });
}
