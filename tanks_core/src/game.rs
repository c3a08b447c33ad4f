//! The Game owns the canvas, the Scenes, the tick timer and the key handlers

use std::time::Duration;

use tracing::debug;

use crate::{
    config::GameConfig,
    error::GameError,
    ingame::IngameScene,
    input::{KeyEvent, KeyEventKind, KeyHandler, KeyHandlerTable},
    render::SharedSurface,
    scene::{SceneId, SceneKind},
};

/// Identifies a repeating task started by a [`Scheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(pub i32);

/// Host timer driving [`Game::tick`]
///
/// Implementations call `tick` on the Game every `period` until the
/// returned handle is cancelled.
pub trait Scheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

struct ActiveScene {
    id: SceneId,
    handle: Option<TickHandle>,
}

pub struct Game {
    canvas: SharedSurface,
    scenes: Vec<SceneKind>,
    active: Option<ActiveScene>,
    scheduler: Box<dyn Scheduler>,
    key_down_handlers: KeyHandlerTable,
    key_up_handlers: KeyHandlerTable,
    config: GameConfig,
}

impl Game {
    pub fn new(canvas: SharedSurface, scheduler: Box<dyn Scheduler>, config: GameConfig) -> Self {
        Self {
            canvas,
            scenes: Vec::new(),
            active: None,
            scheduler,
            key_down_handlers: KeyHandlerTable::default(),
            key_up_handlers: KeyHandlerTable::default(),
            config,
        }
    }
}

/// Scene management
impl Game {
    pub fn add_scene(&mut self, scene: impl Into<SceneKind>) -> SceneId {
        self.scenes.push(scene.into());
        SceneId(self.scenes.len() - 1)
    }

    pub fn scene(&self, id: SceneId) -> Option<&SceneKind> {
        self.scenes.get(id.0)
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Option<&mut SceneKind> {
        self.scenes.get_mut(id.0)
    }

    pub fn ingame(&self, id: SceneId) -> Option<&IngameScene> {
        self.scene(id)?.as_ingame()
    }

    pub fn ingame_mut(&mut self, id: SceneId) -> Option<&mut IngameScene> {
        self.scene_mut(id)?.as_ingame_mut()
    }

    pub fn active_scene_id(&self) -> Option<SceneId> {
        self.active.as_ref().map(|active| active.id)
    }

    pub fn active_scene_mut(&mut self) -> Option<&mut SceneKind> {
        let id = self.active_scene_id()?;
        self.scene_mut(id)
    }

    /// Tears down the running Scene and hands the canvas and the timer to `id`
    pub fn activate_scene(&mut self, id: SceneId) -> Result<(), GameError> {
        if id.0 >= self.scenes.len() {
            return Err(GameError::UnknownScene(id));
        }

        if let Some(previous) = self.active.take() {
            if let Some(handle) = previous.handle {
                self.scheduler.cancel(handle);
            }
            let scene = self.scenes[previous.id.0].scene_mut();
            if scene.is_active() {
                scene.delete();
            }
        }

        let scene = &mut self.scenes[id.0];
        debug!(scene = %scene.scene().name, "switching scene");
        scene.scene_mut().set_canvas(self.canvas.clone());
        scene.create();
        scene.scene_mut().activate();

        self.active = Some(ActiveScene { id, handle: None });
        self.start();
        Ok(())
    }

    /// Starts ticking the active Scene, replacing any timer it already had
    pub fn start(&mut self) {
        let period = Duration::from_millis(self.config.tick_interval_ms);
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if let Some(handle) = active.handle.take() {
            self.scheduler.cancel(handle);
        }
        active.handle = Some(self.scheduler.schedule_repeating(period));
    }

    /// One update then draw of the active Scene
    pub fn tick(&mut self) {
        if let Some(scene) = self.active_scene_mut() {
            scene.update();
            scene.draw();
        }
    }
}

/// Keyboard routing
impl Game {
    pub fn add_key_down_handler(&mut self, key: &str, handler: KeyHandler) {
        self.key_down_handlers.add(key, handler);
    }

    pub fn remove_key_down_handler(&mut self, key: &str, handler: Option<&KeyHandler>) {
        self.key_down_handlers.remove(key, handler);
    }

    pub fn add_key_up_handler(&mut self, key: &str, handler: KeyHandler) {
        self.key_up_handlers.add(key, handler);
    }

    pub fn remove_key_up_handler(&mut self, key: &str, handler: Option<&KeyHandler>) {
        self.key_up_handlers.remove(key, handler);
    }

    pub fn key_down_handler_count(&self, key: &str) -> usize {
        self.key_down_handlers.count(key)
    }

    pub fn key_up_handler_count(&self, key: &str) -> usize {
        self.key_up_handlers.count(key)
    }

    pub fn key_down(&mut self, event: &KeyEvent) {
        for handler in self.key_down_handlers.handlers_for(&event.key) {
            handler(event, self);
        }
    }

    pub fn key_up(&mut self, event: &KeyEvent) {
        for handler in self.key_up_handlers.handlers_for(&event.key) {
            handler(event, self);
        }
    }

    pub fn dispatch(&mut self, event: &KeyEvent) {
        match event.kind {
            KeyEventKind::Down => self.key_down(event),
            KeyEventKind::Up => self.key_up(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        config::Playfield, input::key_handler, render::recording::RecordingSurface,
        scene::Scene,
    };

    #[derive(Default)]
    struct Timers {
        next: i32,
        running: Vec<TickHandle>,
    }

    struct TestScheduler(Rc<RefCell<Timers>>);

    impl Scheduler for TestScheduler {
        fn schedule_repeating(&mut self, period: Duration) -> TickHandle {
            assert_eq!(period, Duration::from_millis(20));
            let mut timers = self.0.borrow_mut();
            timers.next += 1;
            let handle = TickHandle(timers.next);
            timers.running.push(handle);
            handle
        }

        fn cancel(&mut self, handle: TickHandle) {
            self.0.borrow_mut().running.retain(|running| *running != handle);
        }
    }

    fn game() -> (Game, Rc<RefCell<Timers>>) {
        let timers = Rc::new(RefCell::new(Timers::default()));
        let game = Game::new(
            Rc::new(RefCell::new(RecordingSurface::default())),
            Box::new(TestScheduler(timers.clone())),
            GameConfig::default(),
        );
        (game, timers)
    }

    #[test]
    fn activating_a_scene_starts_one_timer() {
        let (mut game, timers) = game();
        let menu = game.add_scene(Scene::new("menu", Playfield::default()));

        game.activate_scene(menu).unwrap();

        assert_eq!(timers.borrow().running, vec![TickHandle(1)]);
        let scene = game.scene(menu).unwrap().scene();
        assert!(scene.is_active());
        assert!(scene.has_canvas());
    }

    #[test]
    fn switching_scenes_stops_the_previous_timer() {
        let (mut game, timers) = game();
        let first = game.add_scene(Scene::new("first", Playfield::default()));
        let second = game.add_scene(Scene::new("second", Playfield::default()));

        game.activate_scene(first).unwrap();
        game.activate_scene(second).unwrap();

        assert_eq!(timers.borrow().running, vec![TickHandle(2)]);
        assert!(!game.scene(first).unwrap().scene().is_active());
        assert!(!game.scene(first).unwrap().scene().has_canvas());
        assert_eq!(game.active_scene_id(), Some(second));
    }

    #[test]
    fn restarting_replaces_the_timer() {
        let (mut game, timers) = game();
        let menu = game.add_scene(Scene::new("menu", Playfield::default()));
        game.activate_scene(menu).unwrap();

        game.start();
        game.activate_scene(menu).unwrap();

        assert_eq!(timers.borrow().running.len(), 1);
        assert!(game.scene(menu).unwrap().scene().is_active());
    }

    #[test]
    fn unknown_scene_is_rejected() {
        let (mut game, timers) = game();
        let err = game.activate_scene(SceneId(3)).unwrap_err();
        assert!(matches!(err, GameError::UnknownScene(SceneId(3))));
        assert!(timers.borrow().running.is_empty());
    }

    #[test]
    fn tick_without_scene_does_nothing() {
        let (mut game, _) = game();
        game.tick();
        assert!(game.active_scene_id().is_none());
    }

    #[test]
    fn handlers_receive_event_and_game() {
        let (mut game, _) = game();
        let menu = game.add_scene(Scene::new("menu", Playfield::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = seen.clone();
        game.add_key_down_handler(
            "Enter",
            key_handler(move |event, game| {
                log.borrow_mut().push(event.key.clone());
                game.activate_scene(menu).unwrap();
            }),
        );

        game.dispatch(&KeyEvent::up("Enter"));
        game.dispatch(&KeyEvent::down("Escape"));
        assert!(seen.borrow().is_empty());

        game.dispatch(&KeyEvent::down("Enter"));
        assert_eq!(*seen.borrow(), vec!["Enter".to_string()]);
        assert_eq!(game.active_scene_id(), Some(menu));
    }

    #[test]
    fn key_up_handlers_are_separate() {
        let (mut game, _) = game();
        let count = Rc::new(RefCell::new(0));

        let counter = count.clone();
        let handler = key_handler(move |_, _| *counter.borrow_mut() += 1);
        game.add_key_up_handler("a", handler.clone());
        game.add_key_up_handler("a", handler.clone());

        game.key_down(&KeyEvent::down("a"));
        game.key_up(&KeyEvent::up("a"));
        assert_eq!(*count.borrow(), 1);

        game.remove_key_up_handler("a", Some(&handler));
        game.key_up(&KeyEvent::up("a"));
        assert_eq!(*count.borrow(), 1);
        assert_eq!(game.key_up_handler_count("a"), 0);
    }
}
