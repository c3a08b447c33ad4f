//! Tunable game settings, loadable from JSON

use serde::Deserialize;

use crate::{
    common::constants::{
        PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TANK_SIZE, TICK_INTERVAL_MS, TURN_MARGIN,
    },
    error::GameError,
};

/// Size of the area Scenes draw on and Tanks are kept inside of
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// A player taking part in a match
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TankOption {
    pub name: String,
    pub color: String,
}

impl TankOption {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub tick_interval_ms: u64,
    pub tank_size: f64,
    pub turn_margin: f64,
    pub tanks: Vec<TankOption>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            tank_size: TANK_SIZE,
            turn_margin: TURN_MARGIN,
            tanks: vec![
                TankOption::new("Hubert", "red"),
                TankOption::new("Martin", "blue"),
                TankOption::new("Clarisse", "lime"),
            ],
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings a match cannot be started with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.tanks.len() < 2 {
            return Err(GameError::NotEnoughTanks(self.tanks.len()));
        }
        // host timers take a positive 32 bit millisecond delay
        if self.tick_interval_ms == 0 || self.tick_interval_ms > i32::MAX as u64 {
            return Err(GameError::InvalidTickInterval(self.tick_interval_ms));
        }
        Ok(())
    }
}
