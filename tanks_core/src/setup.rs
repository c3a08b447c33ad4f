//! Wiring of the scenes and key bindings a match starts with

use tracing::warn;

use crate::{
    config::GameConfig,
    error::GameError,
    game::{Game, Scheduler},
    ingame::IngameScene,
    input::key_handler,
    render::SharedSurface,
    scene::{Scene, SceneId},
};

/// Scenes registered by [`build_game`]
#[derive(Debug, Clone, Copy)]
pub struct Scenes {
    pub main_menu: SceneId,
    pub options_menu: SceneId,
    pub players_menu: SceneId,
    pub ingame: SceneId,
}

/// Builds the Game, starts the match and binds the controls
pub fn build_game(
    canvas: SharedSurface,
    scheduler: Box<dyn Scheduler>,
    config: GameConfig,
) -> Result<(Game, Scenes), GameError> {
    config.validate()?;
    let mut game = Game::new(canvas, scheduler, config.clone());

    let menu = |name: &str, color: &str| {
        let mut scene = Scene::new(name, config.playfield);
        scene.set_background_color(color);
        scene
    };
    let main_menu = game.add_scene(menu("main menu", "#0000ff"));
    let options_menu = game.add_scene(menu("options menu", "#00ff00"));
    let players_menu = game.add_scene(menu("players menu", "#ff0000"));

    let mut ingame_scene = IngameScene::from_config(&config);
    ingame_scene.add_tanks(&config.tanks);
    ingame_scene.scene.set_background_color("black");
    let ingame = game.add_scene(ingame_scene);

    game.activate_scene(ingame)?;

    let scenes = Scenes {
        main_menu,
        options_menu,
        players_menu,
        ingame,
    };
    bind_controls(&mut game, scenes);

    Ok((game, scenes))
}

fn bind_controls(game: &mut Game, scenes: Scenes) {
    let ingame = scenes.ingame;

    game.add_key_down_handler(
        "ArrowUp",
        key_handler(move |_, game| {
            if let Some(tank) = game.ingame_mut(ingame).and_then(IngameScene::current_tank_mut) {
                tank.increase_power(1.0);
            }
        }),
    );
    game.add_key_down_handler(
        "ArrowDown",
        key_handler(move |_, game| {
            if let Some(tank) = game.ingame_mut(ingame).and_then(IngameScene::current_tank_mut) {
                tank.decrease_power(1.0);
            }
        }),
    );
    game.add_key_down_handler(
        "ArrowLeft",
        key_handler(move |_, game| {
            if let Some(tank) = game.ingame_mut(ingame).and_then(IngameScene::current_tank_mut) {
                tank.increase_angle(1);
            }
        }),
    );
    game.add_key_down_handler(
        "ArrowRight",
        key_handler(move |_, game| {
            if let Some(tank) = game.ingame_mut(ingame).and_then(IngameScene::current_tank_mut) {
                tank.decrease_angle(1);
            }
        }),
    );

    game.add_key_down_handler(
        "a",
        key_handler(move |_, game| {
            if let Some(scene) = game.ingame_mut(ingame) {
                if let Err(err) = scene.next_turn() {
                    warn!(%err, "could not pass the turn");
                }
            }
        }),
    );

    game.add_key_down_handler(
        "p",
        key_handler(|_, game| {
            if let Some(scene) = game.active_scene_mut().map(|scene| scene.scene_mut()) {
                if scene.is_paused() {
                    scene.resume();
                } else {
                    scene.pause();
                }
            }
        }),
    );

    game.add_key_down_handler(
        "Escape",
        key_handler(move |_, game| {
            let target = match game.active_scene_id() {
                Some(id) if id == scenes.ingame => scenes.main_menu,
                Some(id) if id == scenes.main_menu => scenes.ingame,
                _ => return,
            };
            if let Err(err) = game.activate_scene(target) {
                warn!(%err, "could not switch scene");
            }
        }),
    );
}
