//! Up front configuration values

/// Width of the playfield in canvas pixels
pub const PLAYFIELD_WIDTH: f64 = 800.0;
/// Height of the playfield in canvas pixels, also the floor tanks rest on
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

/// Milliseconds between two update/draw ticks of the active Scene
pub const TICK_INTERVAL_MS: u64 = 20;

/// Radius of a Tank body, the cannon is twice as long
pub const TANK_SIZE: f64 = 20.0;
/// Horizontal distance kept free on each side when laying out Tanks
pub const TURN_MARGIN: f64 = 50.0;
/// Height Tanks are dropped from when they are laid out
pub const TANK_SPAWN_HEIGHT: f64 = 10.0;
/// Downward acceleration applied to Tanks every tick
pub const TANK_GRAVITY: f64 = 1.0;

/// Background of a Scene that never had one set
pub const DEFAULT_BACKGROUND: &str = "#000";
