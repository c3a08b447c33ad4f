use thiserror::Error;

use crate::scene::SceneId;

#[derive(Error, Debug)]
pub enum GameError {
    /// No Tank is left to hand the turn to
    #[error("all tanks are dead")]
    AllTanksDead,
    #[error("a match needs at least two tanks, got {0}")]
    NotEnoughTanks(usize),
    #[error("tick interval of {0} ms cannot be scheduled")]
    InvalidTickInterval(u64),
    #[error("no scene registered as {0:?}")]
    UnknownScene(SceneId),
    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),
}
