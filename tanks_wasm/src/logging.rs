//! Routes panics and `tracing` events to the browser console

use std::{
    io::{self, Write},
    panic,
};

use tracing::Level;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Collects one formatted event and logs it when the formatter drops it
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            log(String::from_utf8_lossy(&self.buffer).trim_end());
        }
    }
}

pub fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));

    // the wasm target has no clock for timestamps
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleWriter::default)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
