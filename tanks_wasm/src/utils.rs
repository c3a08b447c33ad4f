use tanks_core::config::Playfield;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Id of the optional `<script type="application/json">` holding a GameConfig
pub const CONFIG_ELEMENT_ID: &str = "game-config";

pub fn js_window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn document() -> web_sys::Document {
    js_window()
        .document()
        .expect("should have a document on window")
}

pub fn body() -> web_sys::HtmlElement {
    document().body().expect("document should have a body")
}

pub fn fetch_or_create_canvas() -> HtmlCanvasElement {
    body()
        .query_selector("canvas")
        .expect("query tries to fetch element")
        .unwrap_or_else(|| {
            let canvas = document()
                .create_element("canvas")
                .expect("document should create canvas");

            body()
                .append_child(&canvas)
                .expect("added canvas to the DOM");

            canvas
        })
        .dyn_into::<HtmlCanvasElement>()
        .expect("element is canvas element")
}

/// Raw JSON of the page's game config, if the page carries one
pub fn read_config_script() -> Option<String> {
    document()
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

pub trait Canvas {
    /// Sizes the Element to the playfield
    fn set_playfield(&self, playfield: &Playfield);
    fn get_2d_context(&self) -> CanvasRenderingContext2d;
}

impl Canvas for HtmlCanvasElement {
    fn set_playfield(&self, playfield: &Playfield) {
        self.set_width(playfield.width as u32);
        self.set_height(playfield.height as u32);
    }

    fn get_2d_context(&self) -> CanvasRenderingContext2d {
        self.get_context("2d")
            .expect("canvas has 2d context")
            .expect("valid context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("root canvas")
    }
}
