//! Entities that take part in the update/draw cycle of a Scene

use crate::{render::Surface, utils::Vector2};

use super::tank::Tank;

/// Handle to an Actor owned by a Scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub usize);

/// Kinematic state shared by every kind of Actor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    pub position: Vector2,
    pub velocity: Vector2,
    pub gravity: Vector2,
}

impl Body {
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn physics_update(&mut self) {
        self.position = self.position.plus(&self.velocity);
    }
}

/// Actor drawn as an image centred on its position
#[derive(Debug, Clone)]
pub struct SpriteActor {
    pub body: Body,
    /// Source of the image, resolved by the Surface
    pub sprite: String,
}

impl SpriteActor {
    pub fn new(sprite: &str, position: Vector2) -> Self {
        Self {
            body: Body::new(position),
            sprite: sprite.to_string(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        // nothing to draw until the image has loaded
        if let Some((width, height)) = surface.image_size(&self.sprite) {
            surface.draw_image(
                &self.sprite,
                self.body.x() - width / 2.0,
                self.body.y() - height / 2.0,
            );
        }
    }
}

#[derive(Debug)]
pub enum Actor {
    /// Moves but has no visuals of its own
    Plain(Body),
    Sprite(SpriteActor),
    Tank(Tank),
}

impl Actor {
    pub fn body(&self) -> &Body {
        match self {
            Actor::Plain(body) => body,
            Actor::Sprite(sprite) => &sprite.body,
            Actor::Tank(tank) => &tank.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Actor::Plain(body) => body,
            Actor::Sprite(sprite) => &mut sprite.body,
            Actor::Tank(tank) => &mut tank.body,
        }
    }

    pub fn update(&mut self) {
        match self {
            Actor::Plain(body) => body.physics_update(),
            Actor::Sprite(sprite) => sprite.body.physics_update(),
            Actor::Tank(tank) => tank.update(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Actor::Plain(_) => {}
            Actor::Sprite(sprite) => sprite.draw(surface),
            Actor::Tank(tank) => tank.draw(surface),
        }
    }

    pub fn as_tank(&self) -> Option<&Tank> {
        match self {
            Actor::Tank(tank) => Some(tank),
            _ => None,
        }
    }

    pub fn as_tank_mut(&mut self) -> Option<&mut Tank> {
        match self {
            Actor::Tank(tank) => Some(tank),
            _ => None,
        }
    }
}

impl From<Body> for Actor {
    fn from(body: Body) -> Self {
        Actor::Plain(body)
    }
}

impl From<SpriteActor> for Actor {
    fn from(sprite: SpriteActor) -> Self {
        Actor::Sprite(sprite)
    }
}

impl From<Tank> for Actor {
    fn from(tank: Tank) -> Self {
        Actor::Tank(tank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{Call, RecordingSurface};

    #[test]
    fn update_adds_velocity_to_position() {
        let mut actor = Actor::from(Body {
            position: Vector2::new(10.0, 20.0),
            velocity: Vector2::new(3.0, -4.5),
            gravity: Vector2::new(0.0, 9.0),
        });

        actor.update();
        assert_eq!(actor.body().position, Vector2::new(13.0, 15.5));

        // gravity is not integrated by a plain actor
        assert_eq!(actor.body().velocity, Vector2::new(3.0, -4.5));
    }

    #[test]
    fn zero_velocity_keeps_position() {
        let mut actor = Actor::from(Body::new(Vector2::new(7.0, 8.0)));
        for _ in 0..5 {
            actor.update();
        }
        assert_eq!(actor.body().position, Vector2::new(7.0, 8.0));
    }

    #[test]
    fn plain_actor_draws_nothing() {
        let mut surface = RecordingSurface::default();
        Actor::from(Body::default()).draw(&mut surface);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn sprite_is_centred_once_loaded() {
        let sprite = Actor::from(SpriteActor::new("tank.png", Vector2::new(100.0, 50.0)));

        let mut surface = RecordingSurface::default();
        sprite.draw(&mut surface);
        assert!(surface.calls.is_empty());

        surface
            .image_sizes
            .push(("tank.png".to_string(), (40.0, 20.0)));
        sprite.draw(&mut surface);
        assert_eq!(
            surface.calls,
            vec![Call::DrawImage("tank.png".to_string(), 80.0, 40.0)]
        );
    }
}
