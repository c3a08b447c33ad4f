//! Scenes own Actors and drive their update/draw cycle while active

use tracing::debug;

use crate::{
    common::{
        actor::{Actor, ActorId},
        constants::DEFAULT_BACKGROUND,
    },
    config::Playfield,
    ingame::IngameScene,
    render::SharedSurface,
};

/// Handle to a Scene owned by the Game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub usize);

pub struct Scene {
    pub name: String,
    actors: Vec<Actor>,
    active: bool,
    paused: bool,
    canvas: Option<SharedSurface>,
    background_color: String,
    playfield: Playfield,
}

impl Scene {
    pub fn new(name: &str, playfield: Playfield) -> Self {
        Self {
            name: name.to_string(),
            actors: Vec::new(),
            active: false,
            paused: false,
            canvas: None,
            background_color: String::from(DEFAULT_BACKGROUND),
            playfield,
        }
    }

    pub fn set_canvas(&mut self, canvas: SharedSurface) {
        self.canvas = Some(canvas);
    }

    pub fn has_canvas(&self) -> bool {
        self.canvas.is_some()
    }

    pub fn set_background_color(&mut self, color: &str) {
        self.background_color = color.to_string();
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    /// Hands ownership of the Actor to the Scene
    pub fn add_actor(&mut self, actor: impl Into<Actor>) -> ActorId {
        self.actors.push(actor.into());
        ActorId(self.actors.len() - 1)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.0)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.0)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Called once when the Scene becomes active, before [`Scene::activate`]
    pub fn create(&mut self) {}

    pub fn activate(&mut self) {
        debug!(scene = %self.name, "activated");
        self.active = true;
    }

    /// Releases the canvas and deactivates the Scene
    pub fn delete(&mut self) {
        debug!(scene = %self.name, "deleted");
        self.canvas = None;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        self.actors.iter_mut().for_each(Actor::update);
    }

    pub fn draw(&self) {
        let Some(canvas) = &self.canvas else {
            return;
        };
        if !self.active {
            return;
        }

        let mut surface = canvas.borrow_mut();
        surface.set_fill_style(&self.background_color);
        surface.fill_rect(0.0, 0.0, self.playfield.width, self.playfield.height);

        for actor in &self.actors {
            actor.draw(&mut *surface);
        }
    }
}

/// Every kind of Scene the Game can switch between
pub enum SceneKind {
    Basic(Scene),
    Ingame(IngameScene),
}

impl SceneKind {
    pub fn scene(&self) -> &Scene {
        match self {
            SceneKind::Basic(scene) => scene,
            SceneKind::Ingame(ingame) => &ingame.scene,
        }
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        match self {
            SceneKind::Basic(scene) => scene,
            SceneKind::Ingame(ingame) => &mut ingame.scene,
        }
    }

    pub fn create(&mut self) {
        match self {
            SceneKind::Basic(scene) => scene.create(),
            SceneKind::Ingame(ingame) => ingame.create(),
        }
    }

    pub fn update(&mut self) {
        match self {
            SceneKind::Basic(scene) => scene.update(),
            SceneKind::Ingame(ingame) => ingame.update(),
        }
    }

    pub fn draw(&self) {
        self.scene().draw();
    }

    pub fn as_ingame(&self) -> Option<&IngameScene> {
        match self {
            SceneKind::Ingame(ingame) => Some(ingame),
            _ => None,
        }
    }

    pub fn as_ingame_mut(&mut self) -> Option<&mut IngameScene> {
        match self {
            SceneKind::Ingame(ingame) => Some(ingame),
            _ => None,
        }
    }
}

impl From<Scene> for SceneKind {
    fn from(scene: Scene) -> Self {
        SceneKind::Basic(scene)
    }
}

impl From<IngameScene> for SceneKind {
    fn from(ingame: IngameScene) -> Self {
        SceneKind::Ingame(ingame)
    }
}
