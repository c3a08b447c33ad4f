pub mod common {
    pub mod actor;
    pub mod constants;
    pub mod tank;
}

pub mod config;
pub mod error;
pub mod game;
pub mod ingame;
pub mod input;
pub mod render;
pub mod scene;
pub mod setup;
pub mod utils;
