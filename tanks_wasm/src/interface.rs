use crate::{
    utils::{fetch_or_create_canvas, js_window, read_config_script, Canvas},
    GAME,
};
use tanks_core::{
    config::{GameConfig, Playfield},
    input::KeyEvent,
};
use tracing::warn;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlCanvasElement, KeyboardEvent};

/// Canvas Setup
pub fn setup_canvas(playfield: &Playfield) -> HtmlCanvasElement {
    let canvas_element = fetch_or_create_canvas();
    canvas_element.set_playfield(playfield);
    canvas_element
}

/// Config embedded in the page, or the defaults when there is none
pub fn load_config() -> GameConfig {
    match read_config_script().map(|json| GameConfig::from_json(&json)) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            warn!(%err, "ignoring page config");
            GameConfig::default()
        }
        None => GameConfig::default(),
    }
}

fn dispatch(event: KeyEvent) {
    GAME.with(|game| {
        if let Some(game) = game.borrow_mut().as_mut() {
            game.dispatch(&event);
        }
    });
}

/// Window Listeners Setup
pub fn setup_window_listeners() {
    // Key Pressing Callback
    let keydown_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        dispatch(KeyEvent::down(&event.key()));
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("keydown", keydown_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    keydown_callback.forget();

    // Key Releasing Callback
    let keyup_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        dispatch(KeyEvent::up(&event.key()));
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("keyup", keyup_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    keyup_callback.forget();
}
