#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc, time::Duration};

use tanks_core::{
    config::GameConfig,
    game::{Game, Scheduler, TickHandle},
    render::Surface,
    setup::{build_game, Scenes},
};

/// Surface keeping the colours it was cleared with and how many shapes it drew
#[derive(Default)]
pub struct CanvasLog {
    pub clears: Vec<String>,
    pub fills: usize,
    pub strokes: usize,
    fill_style: String,
}

impl Surface for CanvasLog {
    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
    }
    fn set_stroke_style(&mut self, _: &str) {}
    fn set_line_width(&mut self, _: f64) {}
    fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
        self.clears.push(self.fill_style.clone());
    }
    fn begin_path(&mut self) {}
    fn close_path(&mut self) {}
    fn arc(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: bool) {}
    fn move_to(&mut self, _: f64, _: f64) {}
    fn line_to(&mut self, _: f64, _: f64) {}
    fn fill(&mut self) {
        self.fills += 1;
    }
    fn stroke(&mut self) {
        self.strokes += 1;
    }
    fn image_size(&mut self, _: &str) -> Option<(f64, f64)> {
        None
    }
    fn draw_image(&mut self, _: &str, _: f64, _: f64) {}
}

#[derive(Default)]
pub struct TimerLog {
    pub started: Vec<(TickHandle, Duration)>,
    pub cancelled: Vec<TickHandle>,
}

impl TimerLog {
    pub fn running(&self) -> Vec<TickHandle> {
        self.started
            .iter()
            .map(|(handle, _)| *handle)
            .filter(|handle| !self.cancelled.contains(handle))
            .collect()
    }
}

/// Scheduler that never fires on its own, tests call `Game::tick` instead
pub struct ManualScheduler(pub Rc<RefCell<TimerLog>>);

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TickHandle {
        let mut log = self.0.borrow_mut();
        let handle = TickHandle(log.started.len() as i32 + 1);
        log.started.push((handle, period));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.0.borrow_mut().cancelled.push(handle);
    }
}

pub struct Harness {
    pub game: Game,
    pub scenes: Scenes,
    pub canvas: Rc<RefCell<CanvasLog>>,
    pub timers: Rc<RefCell<TimerLog>>,
}

pub fn harness() -> Harness {
    harness_with(GameConfig::default())
}

pub fn harness_with(config: GameConfig) -> Harness {
    let canvas = Rc::new(RefCell::new(CanvasLog::default()));
    let timers = Rc::new(RefCell::new(TimerLog::default()));
    let (game, scenes) = build_game(
        canvas.clone(),
        Box::new(ManualScheduler(timers.clone())),
        config,
    )
    .expect("default setup builds");

    Harness {
        game,
        scenes,
        canvas,
        timers,
    }
}
