/*
 * Renderer Module
 *
 * This module draws the current world state. Drawing is a separate pass from
 * the update, and goes through the small Canvas trait so the simulation can
 * run without a window.
 *
 * Pixel coordinates have their origin at the top-left corner with y growing
 * downwards; NannouCanvas maps them onto nannou's centered, y-up space.
 */

use nannou::color::{named, Srgb};
use nannou::Draw;

use crate::vector::Vector2D;
use crate::world::World;

pub type Color = Srgb<u8>;

pub const BACKGROUND_COLOR: Color = named::WHITE;
pub const BIRD_COLOR: Color = named::BLACK;
pub const PREDATOR_COLOR: Color = named::RED;
pub const BIRD_RADIUS: u32 = 3;
pub const PREDATOR_RADIUS: u32 = 5;

/// Minimal drawing surface.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_circle(&mut self, center: (i32, i32), radius: u32, color: Color);
}

// Truncate towards zero, as integer pixel positions are expected
pub fn to_pixel(position: Vector2D) -> (i32, i32) {
    (position.x as i32, position.y as i32)
}

/// Clear the frame, then draw every predator and every bird in insertion
/// order (later agents paint over earlier ones).
pub fn draw_world<C: Canvas + ?Sized>(canvas: &mut C, world: &World) {
    canvas.clear(BACKGROUND_COLOR);

    for predator in world.predators() {
        canvas.draw_circle(to_pixel(predator.position), PREDATOR_RADIUS, PREDATOR_COLOR);
    }

    for bird in world.birds() {
        canvas.draw_circle(to_pixel(bird.position), BIRD_RADIUS, BIRD_COLOR);
    }
}

/// Canvas backed by a nannou Draw for a window of the given size.
pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32) -> Self {
        Self { draw, width, height }
    }

    // Top-left/y-down pixel to nannou's centered/y-up coordinates
    pub fn to_window(&self, (x, y): (i32, i32)) -> (f32, f32) {
        (x as f32 - self.width / 2.0, self.height / 2.0 - y as f32)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.draw.background().color(color);
    }

    fn draw_circle(&mut self, center: (i32, i32), radius: u32, color: Color) {
        let (x, y) = self.to_window(center);
        self.draw.ellipse().x_y(x, y).radius(radius as f32).color(color);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle { center: (i32, i32), radius: u32, color: Color },
}

/// Canvas that records what was drawn. Used for headless runs.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    pub frames_presented: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, center: (i32, i32), radius: u32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bird::Bird;
    use crate::params::SimulationParams;
    use crate::predator::Predator;

    #[test]
    fn draws_predators_then_birds_on_a_white_frame() {
        let world = World::with_agents(
            SimulationParams::default(),
            vec![
                Bird::new(Vector2D::new(10.7, 20.2), Vector2D::ZERO),
                Bird::new(Vector2D::new(799.9, 599.9), Vector2D::ZERO),
            ],
            vec![Predator::new(Vector2D::new(400.5, 300.5), Vector2D::ZERO)],
        );
        let mut canvas = RecordingCanvas::new();

        draw_world(&mut canvas, &world);

        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::Clear(BACKGROUND_COLOR),
                DrawCommand::Circle { center: (400, 300), radius: 5, color: PREDATOR_COLOR },
                DrawCommand::Circle { center: (10, 20), radius: 3, color: BIRD_COLOR },
                DrawCommand::Circle { center: (799, 599), radius: 3, color: BIRD_COLOR },
            ]
        );
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_circle((1, 1), 3, BIRD_COLOR);
        canvas.clear(BACKGROUND_COLOR);
        assert_eq!(canvas.commands, vec![DrawCommand::Clear(BACKGROUND_COLOR)]);
        assert_eq!(canvas.circles().count(), 0);
    }

    #[test]
    fn pixel_origin_maps_to_top_left_of_window() {
        let draw = Draw::new();
        let canvas = NannouCanvas::new(&draw, 800.0, 600.0);
        assert_eq!(canvas.to_window((0, 0)), (-400.0, 300.0));
        assert_eq!(canvas.to_window((400, 300)), (0.0, 0.0));
        assert_eq!(canvas.to_window((800, 600)), (400.0, -300.0));
    }
}
