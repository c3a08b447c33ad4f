//! The artillery piece each player controls

use std::f64::consts::PI;

use crate::{config::Playfield, render::Surface, utils::Vector2};

use super::{
    actor::Body,
    constants::{TANK_GRAVITY, TANK_SIZE},
};

#[derive(Debug, Clone)]
pub struct Tank {
    pub body: Body,
    /// Name of the player owning the Tank
    pub name: String,
    pub color: String,
    /// Radius of the body
    pub size: f64,
    /// Angle of the cannon in radians, kept within [0, π]
    pub angle: f64,
    pub power: f64,
    /// Nothing in the game sets this yet, so a fresh Tank counts as dead
    pub alive: bool,
    /// Area the Tank is kept inside of
    pub bounds: Playfield,
}

impl Tank {
    pub fn new(color: &str, position: Vector2, bounds: Playfield) -> Self {
        let mut body = Body::new(position);
        body.gravity.y = TANK_GRAVITY;

        Self {
            body,
            name: String::new(),
            color: color.to_string(),
            size: TANK_SIZE,
            angle: 0.0,
            power: 0.0,
            alive: false,
            bounds,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn x(&self) -> f64 {
        self.body.x()
    }

    pub fn y(&self) -> f64 {
        self.body.y()
    }

    /// Cannon angle rounded to whole degrees
    pub fn angle_degrees(&self) -> i32 {
        (self.angle * 180.0 / PI).round() as i32
    }

    /// Turns the cannon by `amount` degrees, wrapping once around half a turn.
    ///
    /// The angle is snapped to whole degrees every time it is adjusted.
    pub fn increase_angle(&mut self, amount: i32) {
        let mut degrees = self.angle_degrees() + amount;
        if degrees < 0 {
            degrees += 180;
        } else if degrees > 180 {
            degrees -= 180;
        }

        self.angle = degrees as f64 * PI / 180.0;
    }

    pub fn decrease_angle(&mut self, amount: i32) {
        self.increase_angle(-amount);
    }

    pub fn increase_power(&mut self, amount: f64) {
        self.power += amount;
    }

    pub fn decrease_power(&mut self, amount: f64) {
        self.power -= amount;
    }
}

impl Tank {
    pub fn update(&mut self) {
        self.body.physics_update();

        let Body {
            position,
            velocity,
            gravity,
        } = &mut self.body;

        // rest on the floor instead of falling through it
        if position.y + velocity.y > self.bounds.height {
            velocity.y = 0.0;
            position.y = self.bounds.height;
        } else {
            velocity.y += gravity.y;
        }

        if position.x + velocity.x < 0.0 {
            velocity.x = 0.0;
            position.x = 0.0;
        } else if position.x + velocity.x > self.bounds.width {
            velocity.x = 0.0;
            position.x = self.bounds.width;
        } else {
            velocity.x += gravity.x;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let (x, y) = (self.x(), self.y());

        // Body
        surface.begin_path();
        surface.set_fill_style(&self.color);
        surface.arc(x, y, self.size, 0.0, PI, true);
        surface.fill();
        surface.close_path();

        // Cannon
        let line_width = self.size / 3.0;
        surface.begin_path();
        surface.set_line_width(line_width);
        surface.set_stroke_style(&self.color);
        surface.move_to(x, y - line_width / 2.0);
        surface.line_to(
            x + self.angle.cos() * self.size * 2.0,
            y - self.angle.sin() * self.size * 2.0 - line_width / 2.0,
        );
        surface.close_path();
        surface.stroke();
    }
}
