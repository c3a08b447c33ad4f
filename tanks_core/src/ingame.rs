//! The match itself: a row of Tanks taking turns

use tracing::info;

use crate::{
    common::{
        actor::ActorId,
        constants::{TANK_SIZE, TANK_SPAWN_HEIGHT, TURN_MARGIN},
        tank::Tank,
    },
    config::{GameConfig, Playfield, TankOption},
    error::GameError,
    scene::Scene,
    utils::Vector2,
};

pub struct IngameScene {
    pub scene: Scene,
    /// Turn order, pointing into the actors of `scene`
    tanks: Vec<ActorId>,
    turn_idx: usize,
    tank_size: f64,
    turn_margin: f64,
}

impl IngameScene {
    pub fn new(playfield: Playfield) -> Self {
        let mut scene = Scene::new("ingame scene", playfield);
        scene.set_background_color("#000");

        Self {
            scene,
            tanks: Vec::new(),
            turn_idx: 0,
            tank_size: TANK_SIZE,
            turn_margin: TURN_MARGIN,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            tank_size: config.tank_size,
            turn_margin: config.turn_margin,
            ..Self::new(config.playfield)
        }
    }

    /// Spreads the Tanks evenly across the playfield, leaving the turn margin
    /// free on both sides.
    ///
    /// # Panics
    ///
    /// With fewer than two options there is no spacing to spread them by.
    pub fn add_tanks(&mut self, options: &[TankOption]) {
        assert!(
            options.len() >= 2,
            "a match needs at least two tanks, got {}",
            options.len()
        );

        let playfield = self.scene.playfield();
        let spacing =
            (playfield.width - 2.0 * self.turn_margin) / (options.len() - 1) as f64;

        let mut tank_x = self.turn_margin;
        for option in options {
            let mut tank = Tank::new(
                &option.color,
                Vector2::new(tank_x, TANK_SPAWN_HEIGHT),
                playfield,
            )
            .with_name(&option.name);
            tank.size = self.tank_size;

            let id = self.scene.add_actor(tank);
            self.tanks.push(id);
            tank_x += spacing;
        }
    }

    pub fn create(&mut self) {
        self.scene.create();
    }

    pub fn update(&mut self) {
        self.scene.update();
    }

    /// Hands the turn to the next living Tank in order
    pub fn next_turn(&mut self) -> Result<(), GameError> {
        if self.tanks.is_empty() {
            return Err(GameError::AllTanksDead);
        }

        let prev_turn_idx = self.turn_idx;
        loop {
            self.turn_idx = (self.turn_idx + 1) % self.tanks.len();
            if self.turn_idx == prev_turn_idx {
                return Err(GameError::AllTanksDead);
            }
            if self.tank(self.turn_idx).map_or(false, Tank::is_alive) {
                break;
            }
        }

        let name = self.tank(self.turn_idx).map_or("", |tank| tank.name.as_str());
        info!(turn = self.turn_idx, tank = %name, "next turn");
        Ok(())
    }

    pub fn turn_idx(&self) -> usize {
        self.turn_idx
    }

    /// Gives the turn to the Tank at `idx` in turn order
    pub fn give_turn_to(&mut self, idx: usize) {
        assert!(idx < self.tanks.len(), "no tank at turn index {}", idx);
        self.turn_idx = idx;
    }

    pub fn tank_count(&self) -> usize {
        self.tanks.len()
    }

    pub fn tank(&self, idx: usize) -> Option<&Tank> {
        let id = *self.tanks.get(idx)?;
        self.scene.actor(id)?.as_tank()
    }

    pub fn tank_mut(&mut self, idx: usize) -> Option<&mut Tank> {
        let id = *self.tanks.get(idx)?;
        self.scene.actor_mut(id)?.as_tank_mut()
    }

    pub fn tanks(&self) -> impl Iterator<Item = &Tank> {
        self.tanks
            .iter()
            .filter_map(|id| self.scene.actor(*id)?.as_tank())
    }

    pub fn current_tank(&self) -> Option<&Tank> {
        self.tank(self.turn_idx)
    }

    pub fn current_tank_mut(&mut self) -> Option<&mut Tank> {
        self.tank_mut(self.turn_idx)
    }
}
