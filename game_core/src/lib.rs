pub mod components;
pub mod config;
pub mod game;
pub mod palette;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use palette::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, y),
        FlashCounter::default(),
        AiOffset::default(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
