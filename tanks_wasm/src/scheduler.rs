//! `setInterval` backed timer for the game loop

use std::{collections::HashMap, time::Duration};

use tanks_core::game::{Scheduler, TickHandle};
use wasm_bindgen::{prelude::*, JsCast};

use crate::utils::js_window;

pub struct IntervalScheduler {
    on_tick: fn(),
    /// Callbacks of running intervals, dropped once their interval is cleared
    intervals: HashMap<i32, Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new(on_tick: fn()) -> Self {
        Self {
            on_tick,
            intervals: HashMap::new(),
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TickHandle {
        let on_tick = self.on_tick;
        let closure = Closure::wrap(Box::new(move || on_tick()) as Box<dyn FnMut()>);

        let id = js_window()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                i32::try_from(period.as_millis()).unwrap_or(i32::MAX),
            )
            .expect("should register `setInterval` OK");

        self.intervals.insert(id, closure);
        TickHandle(id)
    }

    fn cancel(&mut self, handle: TickHandle) {
        js_window().clear_interval_with_handle(handle.0);
        self.intervals.remove(&handle.0);
    }
}
